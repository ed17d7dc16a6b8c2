//! URL-safe identifiers shared by products, categories and enquiries.
//!
//! Slugs are non-empty strings of lowercase ASCII letters, digits and single
//! hyphens, never starting or ending with a hyphen.

mod lifecycle;
mod resolver;

pub use lifecycle::{SlugLifecycle, SluggedRecord};
pub use resolver::{SlugLookup, UniqueSlugResolver};

use crate::domain::errors::{DomainError, DomainResult};
use regex::Regex;
use std::{fmt, sync::LazyLock};

static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").expect("literal pattern compiles"));

/// Normalise a display name into a slug candidate.
///
/// Lower-cases the input, collapses every run of characters outside
/// `[a-z0-9]` into one hyphen and trims hyphens from both ends. The result may
/// be empty when the name carries no ASCII letters or digits.
pub fn generate_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Turns a display name into a slug candidate for [`SlugLifecycle`].
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_valid_slug(&value) {
            return Err(DomainError::Validation(format!("invalid slug '{value}'")));
        }
        Ok(Self(value))
    }

    /// `base-n`, the n-th collision alternative for this slug.
    pub fn with_suffix(&self, n: u64) -> Self {
        Self(format!("{}-{n}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_symbol_runs_and_trims() {
        assert_eq!(generate_slug("Dairy Products!!"), "dairy-products");
        assert_eq!(generate_slug("  --Frozen   Prawns (500g)-- "), "frozen-prawns-500g");
        assert_eq!(generate_slug("Chicken_Breast/Boneless"), "chicken-breast-boneless");
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        assert_eq!(generate_slug("Café Crème"), "caf-cr-me");
    }

    #[test]
    fn empty_and_symbol_only_names_produce_empty_slug() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("!!! ??? ***"), "");
    }

    #[test]
    fn slug_value_rejects_malformed_input() {
        assert!(Slug::new("dairy-products").is_ok());
        assert!(Slug::new("").is_err());
        assert!(Slug::new("-dairy").is_err());
        assert!(Slug::new("Dairy").is_err());
        assert!(Slug::new("dairy products").is_err());
    }

    #[test]
    fn suffix_appends_counter() {
        let base = Slug::new("prawns").unwrap();
        assert_eq!(base.with_suffix(3).as_str(), "prawns-3");
    }
}
