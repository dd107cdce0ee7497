//! Pagination metadata
//!
//! Both operations fully consume their source to count items, then
//! derive the page count by ceiling division. Only the page size is
//! validated; no page number is involved.

use crate::error::Result;
use crate::types::{ensure_positive_page_size, PaginationMetadata};
use futures::stream::{Stream, StreamExt};
use tracing::debug;

/// Count a source and derive its total page count
///
/// Consumes the whole source. `total_pages` is
/// `ceil(total_count / page_size)`; an empty source has zero pages.
pub fn pagination_metadata<I>(source: I, page_size: i32) -> Result<PaginationMetadata>
where
    I: IntoIterator,
{
    ensure_positive_page_size(page_size)?;

    let total_count = source.into_iter().count() as u64;
    debug!("counted {} items for page size {}", total_count, page_size);
    Ok(PaginationMetadata::from_count(total_count, page_size))
}

/// Count an async source and derive its total page count
///
/// Drains the producer item by item, suspending whenever it suspends,
/// and resolves once the source is exhausted.
pub async fn pagination_metadata_async<S>(source: S, page_size: i32) -> Result<PaginationMetadata>
where
    S: Stream,
{
    ensure_positive_page_size(page_size)?;

    let total_count = source.count().await as u64;
    debug!("counted {} items for page size {}", total_count, page_size);
    Ok(PaginationMetadata::from_count(total_count, page_size))
}
