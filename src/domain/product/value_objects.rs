use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("product id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("product name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ProductCategory {
    Poultry,
    Seafood,
    Vegetables,
    Fruits,
    Meat,
    Dairy,
    Other,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Poultry => "Poultry",
            ProductCategory::Seafood => "Seafood",
            ProductCategory::Vegetables => "Vegetables",
            ProductCategory::Fruits => "Fruits",
            ProductCategory::Meat => "Meat",
            ProductCategory::Dairy => "Dairy",
            ProductCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Poultry" => Ok(ProductCategory::Poultry),
            "Seafood" => Ok(ProductCategory::Seafood),
            "Vegetables" => Ok(ProductCategory::Vegetables),
            "Fruits" => Ok(ProductCategory::Fruits),
            "Meat" => Ok(ProductCategory::Meat),
            "Dairy" => Ok(ProductCategory::Dairy),
            "Other" => Ok(ProductCategory::Other),
            other => Err(DomainError::Validation(format!(
                "unknown product category '{other}'"
            ))),
        }
    }
}

/// Unit price, strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value <= Decimal::ZERO {
            return Err(DomainError::Validation("price must be greater than zero".into()));
        }
        Ok(Self(value))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

/// Grams per piece or pieces per kilogram.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Measure(f64);

impl Measure {
    pub fn new(field: &str, value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::Validation(format!(
                "{field} must be a positive number"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency(String);

impl Currency {
    pub const DEFAULT: &'static str = "INR";

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_uppercase();
        if value.len() != 3 || !value.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(DomainError::Validation(format!(
                "currency '{value}' must be a three-letter code"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

/// Units on hand, never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stock(i64);

impl Stock {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::Validation("stock cannot be negative".into()));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// A stored image as reported by the upload handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductImage {
    pub url: String,
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_must_be_positive() {
        assert!(Price::new(Decimal::new(1999, 2)).is_ok());
        assert!(Price::new(Decimal::ZERO).is_err());
        assert!(Price::new(Decimal::new(-5, 0)).is_err());
    }

    #[test]
    fn measure_rejects_nan_and_zero() {
        assert!(Measure::new("weight_per_piece", 250.0).is_ok());
        assert!(Measure::new("weight_per_piece", 0.0).is_err());
        assert!(Measure::new("pieces_per_kg", f64::NAN).is_err());
    }

    #[test]
    fn currency_is_upper_cased() {
        assert_eq!(Currency::new("usd").unwrap().as_str(), "USD");
        assert!(Currency::new("rupees").is_err());
        assert_eq!(Currency::default().as_str(), "INR");
    }

    #[test]
    fn category_parses_display_names() {
        assert_eq!("Seafood".parse::<ProductCategory>().unwrap(), ProductCategory::Seafood);
        assert!("seafood".parse::<ProductCategory>().is_err());
    }
}
