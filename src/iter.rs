//! Synchronous in-memory pagination
//!
//! Pages are lazy views over the source iterator: nothing is consumed
//! until the caller iterates, and nothing past the end of the page is
//! ever pulled.

use crate::error::Result;
use crate::types::PageRequest;
use tracing::debug;

/// Return one page of a source as a lazy iterator
///
/// Skips the first `(page_number - 1) * page_size` elements, then
/// yields at most `page_size` further elements in source order. A
/// source shorter than the requested window yields a short or empty
/// page, never an error.
///
/// Validation happens before the source is touched; on `Err` no
/// element has been consumed.
pub fn paginate<I>(
    source: I,
    page_number: i32,
    page_size: i32,
) -> Result<impl Iterator<Item = I::Item>>
where
    I: IntoIterator,
{
    let request = PageRequest::new(page_number, page_size)?;
    debug!(
        "paginating iterator: offset {} limit {}",
        request.offset(),
        request.limit()
    );
    Ok(source
        .into_iter()
        .skip(request.offset())
        .take(request.limit()))
}

/// Method-call form of [`paginate`] for any `IntoIterator`
pub trait PaginateIteratorExt: IntoIterator + Sized {
    /// Return one page of this source, see [`paginate`]
    fn paginate(
        self,
        page_number: i32,
        page_size: i32,
    ) -> Result<impl Iterator<Item = Self::Item>> {
        paginate(self, page_number, page_size)
    }
}

impl<I: IntoIterator> PaginateIteratorExt for I {}
