//! # Pagekit
//!
//! Lightweight pagination for iterators, lazy queries, and async streams.
//! One validation contract, three source shapes, zero buffering.
//!
//! ## Features
//!
//! - **In-memory pagination**: lazy `skip`/`take` over any `IntoIterator`
//! - **Query pushdown**: compose skip/limit into a deferred query source
//!   instead of materializing it
//! - **Async streams**: paginate a `futures::Stream` without buffering,
//!   releasing the producer as soon as the page is complete
//! - **Metadata**: total item and page counts for any source shape
//!
//! ## Quick Start
//!
//! ```rust
//! use pagekit::{paginate, pagination_metadata, Result};
//!
//! fn main() -> Result<()> {
//!     // Second page of ten items
//!     let page: Vec<i32> = paginate(1..=100, 2, 10)?.collect();
//!     assert_eq!(page, (11..=20).collect::<Vec<_>>());
//!
//!     // Totals for the same source
//!     let meta = pagination_metadata(1..=100, 10)?;
//!     assert_eq!((meta.total_pages, meta.total_count), (10, 100));
//!
//!     Ok(())
//! }
//! ```
//!
//! Async sources work the same way through [`paginate_stream`]:
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use pagekit::paginate_stream;
//!
//! let page: Vec<_> = paginate_stream(source, 2, 10)?.collect().await;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Page request and metadata types
pub mod types;

/// Synchronous in-memory pagination
pub mod iter;

/// Deferred query pagination with skip/limit pushdown
pub mod query;

/// Async stream pagination
pub mod stream;

/// Total item and page counts
pub mod metadata;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use iter::{paginate, PaginateIteratorExt};
pub use metadata::{pagination_metadata, pagination_metadata_async};
pub use query::{paginate_query, MemoryQuery, QuerySource};
pub use stream::{paginate_stream, PageStream, PaginateStreamExt};
pub use types::{PageRequest, PaginationMetadata, MAX_PAGE_SIZE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
