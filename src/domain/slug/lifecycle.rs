use super::{Slug, SlugGenerator, SlugLookup, UniqueSlugResolver};
use crate::domain::errors::{DomainError, DomainResult};
use std::sync::Arc;

/// A record whose slug is derived from a display name.
pub trait SluggedRecord {
    type Id: PartialEq + Copy + Send + Sync;

    /// `None` while the record has not been persisted yet.
    fn record_id(&self) -> Option<Self::Id>;
    fn slug_source(&self) -> &str;
    fn assign_slug(&mut self, slug: Slug);
}

/// Slug assignment step run by command services right before a write.
pub struct SlugLifecycle {
    generator: Arc<dyn SlugGenerator>,
    resolver: UniqueSlugResolver,
}

impl SlugLifecycle {
    pub fn new(generator: Arc<dyn SlugGenerator>, resolver: UniqueSlugResolver) -> Self {
        Self {
            generator,
            resolver,
        }
    }

    /// Derive the base slug for `name`. Names without any letter or digit are rejected.
    pub fn candidate_for(&self, name: &str) -> DomainResult<Slug> {
        let raw = self.generator.slugify(name);
        if raw.is_empty() {
            return Err(DomainError::Validation(format!(
                "name '{name}' must contain at least one letter or digit"
            )));
        }
        Slug::new(raw)
    }

    /// Assign a unique slug to `record` when it is new or its name changed.
    ///
    /// Returns `true` when the slug field was (re)assigned. Only the slug is touched.
    pub async fn before_write<R>(
        &self,
        record: &mut R,
        name_changed: bool,
        lookup: &dyn SlugLookup<R::Id>,
    ) -> DomainResult<bool>
    where
        R: SluggedRecord + Send,
    {
        let self_id = record.record_id();
        if self_id.is_some() && !name_changed {
            return Ok(false);
        }

        let base = self.candidate_for(record.slug_source())?;
        let slug = self.resolver.resolve(&base, lookup, self_id).await?;
        if slug != base {
            tracing::debug!(base = %base, resolved = %slug, "slug collision resolved by suffix");
        }
        record.assign_slug(slug);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::generate_slug;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct RegexSlugger;

    impl SlugGenerator for RegexSlugger {
        fn slugify(&self, input: &str) -> String {
            generate_slug(input)
        }
    }

    struct Named {
        id: Option<i64>,
        name: String,
        slug: Option<Slug>,
        other: u32,
    }

    impl SluggedRecord for Named {
        type Id = i64;

        fn record_id(&self) -> Option<i64> {
            self.id
        }

        fn slug_source(&self) -> &str {
            &self.name
        }

        fn assign_slug(&mut self, slug: Slug) {
            self.slug = Some(slug);
        }
    }

    struct Owners(HashMap<&'static str, i64>);

    #[async_trait]
    impl SlugLookup<i64> for Owners {
        async fn slug_owner(&self, slug: &Slug) -> DomainResult<Option<i64>> {
            Ok(self.0.get(slug.as_str()).copied())
        }
    }

    fn lifecycle() -> SlugLifecycle {
        SlugLifecycle::new(Arc::new(RegexSlugger), UniqueSlugResolver::default())
    }

    #[tokio::test]
    async fn new_record_always_gets_a_slug() {
        let owners = Owners(HashMap::from([("frozen-peas", 1)]));
        let mut record = Named {
            id: None,
            name: "Frozen Peas".into(),
            slug: None,
            other: 5,
        };
        let assigned = lifecycle()
            .before_write(&mut record, false, &owners)
            .await
            .unwrap();
        assert!(assigned);
        assert_eq!(record.slug.unwrap().as_str(), "frozen-peas-1");
        assert_eq!(record.other, 5);
    }

    #[tokio::test]
    async fn unchanged_name_keeps_existing_slug() {
        let owners = Owners(HashMap::new());
        let mut record = Named {
            id: Some(3),
            name: "Frozen Peas".into(),
            slug: Some(Slug::new("legacy-slug").unwrap()),
            other: 0,
        };
        let assigned = lifecycle()
            .before_write(&mut record, false, &owners)
            .await
            .unwrap();
        assert!(!assigned);
        assert_eq!(record.slug.unwrap().as_str(), "legacy-slug");
    }

    #[tokio::test]
    async fn renaming_back_to_own_slug_is_not_a_collision() {
        let owners = Owners(HashMap::from([("frozen-peas", 3)]));
        let mut record = Named {
            id: Some(3),
            name: "FROZEN peas".into(),
            slug: Some(Slug::new("frozen-peas").unwrap()),
            other: 0,
        };
        lifecycle()
            .before_write(&mut record, true, &owners)
            .await
            .unwrap();
        assert_eq!(record.slug.unwrap().as_str(), "frozen-peas");
    }

    #[tokio::test]
    async fn symbol_only_name_is_rejected() {
        let owners = Owners(HashMap::new());
        let mut record = Named {
            id: None,
            name: "!!!".into(),
            slug: None,
            other: 0,
        };
        let err = lifecycle()
            .before_write(&mut record, true, &owners)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(record.slug.is_none());
    }
}
