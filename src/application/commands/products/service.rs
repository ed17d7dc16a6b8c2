use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        product::{ProductReadRepository, ProductSlugOwners, ProductWriteRepository},
        slug::SlugLifecycle,
    },
};

pub struct ProductCommandService {
    pub(super) write_repo: Arc<dyn ProductWriteRepository>,
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) slugs: Arc<SlugLifecycle>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) conflict_retries: u32,
}

impl ProductCommandService {
    pub fn new(
        write_repo: Arc<dyn ProductWriteRepository>,
        read_repo: Arc<dyn ProductReadRepository>,
        slugs: Arc<SlugLifecycle>,
        clock: Arc<dyn Clock>,
        conflict_retries: u32,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slugs,
            clock,
            conflict_retries,
        }
    }

    pub(super) fn slug_owners(&self) -> ProductSlugOwners {
        ProductSlugOwners(Arc::clone(&self.read_repo))
    }
}
