use super::Slug;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

/// Read capability the resolver needs from a store: who currently owns a slug.
#[async_trait]
pub trait SlugLookup<I>: Send + Sync {
    async fn slug_owner(&self, slug: &Slug) -> DomainResult<Option<I>>;
}

/// Finds a free slug by trying `base`, `base-1`, `base-2`, ... in order.
///
/// A slug held by `self_id` counts as free, so a record re-resolving its own
/// unchanged slug keeps it. The search gives up after `max_attempts` lookups.
#[derive(Debug, Clone, Copy)]
pub struct UniqueSlugResolver {
    max_attempts: u32,
}

impl UniqueSlugResolver {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub async fn resolve<I>(
        &self,
        base: &Slug,
        lookup: &dyn SlugLookup<I>,
        self_id: Option<I>,
    ) -> DomainResult<Slug>
    where
        I: PartialEq + Send + Sync,
    {
        let mut candidate = base.clone();
        let mut counter = 0u64;

        loop {
            match lookup.slug_owner(&candidate).await? {
                None => return Ok(candidate),
                Some(owner) if self_id.as_ref() == Some(&owner) => return Ok(candidate),
                Some(_) => {
                    counter += 1;
                    if counter >= u64::from(self.max_attempts) {
                        tracing::warn!(base = %base, attempts = counter, "slug search exhausted");
                        return Err(DomainError::SlugExhausted(format!(
                            "no free slug for '{base}' after {counter} attempts"
                        )));
                    }
                    candidate = base.with_suffix(counter);
                }
            }
        }
    }
}

impl Default for UniqueSlugResolver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MapLookup {
        owners: Mutex<HashMap<String, i64>>,
        calls: Mutex<u32>,
    }

    impl MapLookup {
        fn new(entries: &[(&str, i64)]) -> Self {
            Self {
                owners: Mutex::new(
                    entries
                        .iter()
                        .map(|(slug, id)| ((*slug).to_string(), *id))
                        .collect(),
                ),
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl SlugLookup<i64> for MapLookup {
        async fn slug_owner(&self, slug: &Slug) -> DomainResult<Option<i64>> {
            *self.calls.lock().unwrap() += 1;
            Ok(self.owners.lock().unwrap().get(slug.as_str()).copied())
        }
    }

    fn slug(value: &str) -> Slug {
        Slug::new(value).unwrap()
    }

    #[tokio::test]
    async fn free_candidate_is_accepted_as_is() {
        let lookup = MapLookup::new(&[]);
        let resolved = UniqueSlugResolver::default()
            .resolve(&slug("prawns"), &lookup, None)
            .await
            .unwrap();
        assert_eq!(resolved.as_str(), "prawns");
    }

    #[tokio::test]
    async fn own_slug_is_not_a_collision() {
        let lookup = MapLookup::new(&[("prawns", 7)]);
        let resolved = UniqueSlugResolver::default()
            .resolve(&slug("prawns"), &lookup, Some(7))
            .await
            .unwrap();
        assert_eq!(resolved.as_str(), "prawns");
        assert_eq!(*lookup.calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn suffixes_are_derived_from_the_base() {
        let lookup = MapLookup::new(&[("prawns", 1), ("prawns-1", 2), ("prawns-2", 3)]);
        let resolved = UniqueSlugResolver::default()
            .resolve(&slug("prawns"), &lookup, Some(99))
            .await
            .unwrap();
        assert_eq!(resolved.as_str(), "prawns-3");
    }

    #[tokio::test]
    async fn own_suffixed_slug_is_kept() {
        let lookup = MapLookup::new(&[("prawns", 1), ("prawns-1", 2)]);
        let resolved = UniqueSlugResolver::default()
            .resolve(&slug("prawns"), &lookup, Some(2))
            .await
            .unwrap();
        assert_eq!(resolved.as_str(), "prawns-1");
    }

    #[tokio::test]
    async fn search_stops_at_the_ceiling() {
        let lookup = MapLookup::new(&[("prawns", 1), ("prawns-1", 2), ("prawns-2", 3)]);
        let err = UniqueSlugResolver::new(3)
            .resolve(&slug("prawns"), &lookup, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SlugExhausted(_)));
        assert_eq!(*lookup.calls.lock().unwrap(), 3);
    }
}
