use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SluggedRecord};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Replace the name. Returns whether it actually changed.
    pub fn rename(&mut self, name: CategoryName) -> bool {
        if self.name == name {
            return false;
        }
        self.name = name;
        true
    }
}

impl SluggedRecord for Category {
    type Id = CategoryId;

    fn record_id(&self) -> Option<CategoryId> {
        Some(self.id)
    }

    fn slug_source(&self) -> &str {
        self.name.as_str()
    }

    fn assign_slug(&mut self, slug: Slug) {
        self.slug = slug;
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Option<Slug>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewCategory {
    pub fn new(name: CategoryName, created_at: DateTime<Utc>) -> Self {
        Self {
            name,
            slug: None,
            is_active: true,
            created_at,
        }
    }

    pub fn assigned_slug(&self) -> DomainResult<&Slug> {
        self.slug
            .as_ref()
            .ok_or_else(|| DomainError::Validation("category slug has not been assigned".into()))
    }
}

impl SluggedRecord for NewCategory {
    type Id = CategoryId;

    fn record_id(&self) -> Option<CategoryId> {
        None
    }

    fn slug_source(&self) -> &str {
        self.name.as_str()
    }

    fn assign_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
    }
}

#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub name: Option<CategoryName>,
    pub slug: Option<Slug>,
    pub is_active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryUpdate {
    pub fn new(id: CategoryId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            is_active: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: CategoryName, slug: Slug) -> Self {
        self.name = Some(name);
        self.slug = Some(slug);
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}
