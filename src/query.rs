//! Deferred query pagination
//!
//! A [`QuerySource`] stands for items that have not been produced yet:
//! a query builder, a remote cursor, anything whose execution engine
//! can apply skip and limit itself. Paginating one composes the window
//! into the source and hands back a source of the same kind, so the
//! full result set is never pulled client-side.

use crate::error::Result;
use crate::types::PageRequest;
use tracing::debug;

/// A lazily-evaluated source that accepts skip/limit pushdown
///
/// Both operations return a new source of the same capability; nothing
/// is executed until the caller runs the final source through its own
/// engine.
pub trait QuerySource: Sized {
    /// Exclude the first `n` items from the eventual result
    #[must_use]
    fn skip(self, n: usize) -> Self;

    /// Cap the eventual result at `n` items
    #[must_use]
    fn take(self, n: usize) -> Self;
}

/// Narrow a deferred query to one page
///
/// Identical page semantics to [`crate::paginate`], but the skip and
/// limit land in the query itself. For any fully materialized result
/// the two are indistinguishable.
pub fn paginate_query<Q>(query: Q, page_number: i32, page_size: i32) -> Result<Q>
where
    Q: QuerySource,
{
    let request = PageRequest::new(page_number, page_size)?;
    debug!(
        "paginating query: offset {} limit {}",
        request.offset(),
        request.limit()
    );
    Ok(query.skip(request.offset()).take(request.limit()))
}

// ============================================================================
// In-Memory Query Source
// ============================================================================

/// In-memory [`QuerySource`] over a `Vec`
///
/// Records a skip/take window and applies it once at [`execute`].
/// Useful for tests and for small data sets that still want the query
/// shape. Repeated operations compose the way lazy query builders
/// compose them: a later `skip` advances the window start and shrinks
/// any existing cap, a later `take` can only narrow the cap.
///
/// [`execute`]: MemoryQuery::execute
#[derive(Debug, Clone)]
pub struct MemoryQuery<T> {
    items: Vec<T>,
    start: usize,
    cap: Option<usize>,
}

impl<T> MemoryQuery<T> {
    /// Wrap a vector as a deferred query
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            start: 0,
            cap: None,
        }
    }

    /// Start of the recorded window
    pub fn offset(&self) -> usize {
        self.start
    }

    /// Cap of the recorded window, if any `take` was applied
    pub fn limit(&self) -> Option<usize> {
        self.cap
    }

    /// Run the query, applying the recorded window
    pub fn execute(self) -> Vec<T> {
        let cap = self.cap.unwrap_or(usize::MAX);
        self.items.into_iter().skip(self.start).take(cap).collect()
    }
}

impl<T> QuerySource for MemoryQuery<T> {
    fn skip(mut self, n: usize) -> Self {
        self.start = self.start.saturating_add(n);
        self.cap = self.cap.map(|cap| cap.saturating_sub(n));
        self
    }

    fn take(mut self, n: usize) -> Self {
        self.cap = Some(self.cap.map_or(n, |cap| cap.min(n)));
        self
    }
}

impl<T> FromIterator<T> for MemoryQuery<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_query_returns_requested_page() {
        let query: MemoryQuery<i32> = (1..=100).collect();
        let page = paginate_query(query, 3, 10).unwrap();
        assert_eq!(page.execute(), (21..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_paginate_query_records_window_without_executing() {
        let query: MemoryQuery<i32> = (1..=100).collect();
        let page = paginate_query(query, 3, 10).unwrap();

        // The window is in the plan, not applied to the data yet
        assert_eq!(page.offset(), 20);
        assert_eq!(page.limit(), Some(10));
    }

    #[test]
    fn test_paginate_query_past_the_end_is_empty() {
        let query: MemoryQuery<i32> = (1..=25).collect();
        let page = paginate_query(query, 4, 10).unwrap();
        assert!(page.execute().is_empty());
    }

    #[test]
    fn test_paginate_query_rejects_invalid_page_number() {
        let query: MemoryQuery<i32> = (1..=100).collect();
        let err = paginate_query(query, 0, 10).unwrap_err();
        assert_eq!(err.param(), "page_number");
    }

    #[test]
    fn test_memory_query_skip_then_take() {
        let query: MemoryQuery<i32> = (1..=10).collect();
        assert_eq!(query.skip(2).take(3).execute(), vec![3, 4, 5]);
    }

    #[test]
    fn test_memory_query_take_then_skip_shrinks_cap() {
        // take(5) keeps 1..=5; skip(2) inside that window leaves 3..=5
        let query: MemoryQuery<i32> = (1..=10).collect();
        assert_eq!(query.take(5).skip(2).execute(), vec![3, 4, 5]);
    }

    #[test]
    fn test_memory_query_repeated_take_narrows() {
        let query: MemoryQuery<i32> = (1..=10).collect();
        assert_eq!(query.take(8).take(3).execute(), vec![1, 2, 3]);
    }

    #[test]
    fn test_memory_query_skip_past_end() {
        let query: MemoryQuery<i32> = (1..=5).collect();
        assert!(query.skip(10).execute().is_empty());
    }
}
