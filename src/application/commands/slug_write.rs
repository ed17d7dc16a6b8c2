use crate::{
    application::error::ApplicationResult,
    domain::{
        errors::{DomainError, DomainResult},
        slug::{SlugLifecycle, SlugLookup, SluggedRecord},
    },
};
use std::future::Future;

/// Assign a slug to `record` and run `write`, re-resolving when the store
/// reports the slug was taken in the meantime.
///
/// At most `retries` extra attempts are made after the first conflict.
pub(super) async fn write_with_slug_retry<R, T, F, Fut>(
    lifecycle: &SlugLifecycle,
    record: &mut R,
    name_changed: bool,
    lookup: &dyn SlugLookup<R::Id>,
    retries: u32,
    mut write: F,
) -> ApplicationResult<T>
where
    R: SluggedRecord + Send,
    F: FnMut(&R) -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let mut attempt = 0u32;
    let mut needs_slug = name_changed;

    loop {
        lifecycle.before_write(record, needs_slug, lookup).await?;

        match write(record).await {
            Ok(saved) => return Ok(saved),
            Err(DomainError::SlugTaken(detail)) if attempt < retries => {
                attempt += 1;
                needs_slug = true;
                tracing::warn!(attempt, %detail, "slug taken concurrently, resolving again");
            }
            Err(DomainError::SlugTaken(detail)) => {
                return Err(DomainError::Conflict(format!(
                    "slug still taken after {attempt} retries: {detail}"
                ))
                .into());
            }
            Err(err) => return Err(err.into()),
        }
    }
}
