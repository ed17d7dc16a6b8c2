use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::Email;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnquiryId(pub i64);

impl EnquiryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("enquiry id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<EnquiryId> for i64 {
    fn from(value: EnquiryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStatus {
    #[default]
    New,
    Contacted,
    Quoted,
    Completed,
    Rejected,
}

impl EnquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryStatus::New => "new",
            EnquiryStatus::Contacted => "contacted",
            EnquiryStatus::Quoted => "quoted",
            EnquiryStatus::Completed => "completed",
            EnquiryStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for EnquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnquiryStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(EnquiryStatus::New),
            "contacted" => Ok(EnquiryStatus::Contacted),
            "quoted" => Ok(EnquiryStatus::Quoted),
            "completed" => Ok(EnquiryStatus::Completed),
            "rejected" => Ok(EnquiryStatus::Rejected),
            other => Err(DomainError::Validation(format!(
                "unknown enquiry status '{other}'"
            ))),
        }
    }
}

/// Requested amount for one item. At least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub const MAX: i32 = i32::MAX;

    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 1 {
            return Err(DomainError::Validation(
                "quantity must be at least 1".into(),
            ));
        }
        if value > i64::from(Self::MAX) {
            return Err(DomainError::Validation(format!(
                "quantity {value} exceeds {}",
                Self::MAX
            )));
        }
        Ok(Self(value as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Who asked. Name and phone must be non-blank; the email is normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerContact {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub company: Option<String>,
}

impl CustomerContact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        company: Option<String>,
    ) -> DomainResult<Self> {
        let name = required("customer name", name.into())?;
        let email = Email::new(required("customer email", email.into())?)?;
        let phone = required("customer phone", phone.into())?;
        let company = company
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Ok(Self {
            name,
            email,
            phone,
            company,
        })
    }
}

fn required(field: &str, value: String) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_must_be_positive() {
        assert_eq!(Quantity::new(2).unwrap().value(), 2);
        assert!(Quantity::new(0).is_err());
        assert!(Quantity::new(-3).is_err());
    }

    #[test]
    fn contact_rejects_blank_fields() {
        assert!(CustomerContact::new("  ", "a@b.com", "123", None).is_err());
        assert!(CustomerContact::new("Asha", "", "123", None).is_err());
        assert!(CustomerContact::new("Asha", "a@b.com", " ", None).is_err());
    }

    #[test]
    fn contact_email_is_lower_cased() {
        let contact =
            CustomerContact::new("Asha", "Asha@Farm.IN", "98450", Some("  ".into())).unwrap();
        assert_eq!(contact.email.as_str(), "asha@farm.in");
        assert!(contact.company.is_none());
    }

    #[test]
    fn status_uses_lowercase_names() {
        assert_eq!("quoted".parse::<EnquiryStatus>().unwrap(), EnquiryStatus::Quoted);
        assert_eq!(EnquiryStatus::default(), EnquiryStatus::New);
        assert!("Quoted".parse::<EnquiryStatus>().is_err());
    }
}
