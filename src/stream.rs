//! Async stream pagination
//!
//! [`PageStream`] wraps a producer and yields one page of it. Items
//! are pulled one at a time: leading items are discarded while the
//! skip counter runs down, then up to `page_size` items are passed
//! through. The inner stream is dropped the moment the page is
//! complete, so a producer holding a scoped resource (an open cursor,
//! a connection) is released instead of drained. Dropping the
//! `PageStream` itself releases the producer the same way.

use crate::error::Result;
use crate::types::PageRequest;
use futures::ready;
use futures::stream::Stream;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::debug;

pin_project! {
    /// One page of an underlying stream
    ///
    /// Created by [`paginate_stream`]. Yields items in source order,
    /// suspending whenever the producer suspends.
    #[must_use = "streams do nothing unless polled"]
    pub struct PageStream<S> {
        // Dropped as soon as the page is complete or the source ends
        #[pin]
        inner: Option<S>,
        remaining_skip: usize,
        remaining_take: usize,
    }
}

/// Return one page of an async source as a stream
///
/// Same page semantics as [`crate::paginate`]. Validation is
/// synchronous: on `Err` the source has not been polled. The returned
/// stream never buffers unconsumed items and stops pulling from the
/// producer once `page_size` items have been emitted.
pub fn paginate_stream<S>(source: S, page_number: i32, page_size: i32) -> Result<PageStream<S>>
where
    S: Stream,
{
    let request = PageRequest::new(page_number, page_size)?;
    debug!(
        "paginating stream: offset {} limit {}",
        request.offset(),
        request.limit()
    );
    Ok(PageStream {
        inner: Some(source),
        remaining_skip: request.offset(),
        remaining_take: request.limit(),
    })
}

impl<S: Stream> Stream for PageStream<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            let Some(inner) = this.inner.as_mut().as_pin_mut() else {
                return Poll::Ready(None);
            };

            match ready!(inner.poll_next(cx)) {
                Some(item) => {
                    if *this.remaining_skip > 0 {
                        *this.remaining_skip -= 1;
                        continue;
                    }
                    *this.remaining_take -= 1;
                    if *this.remaining_take == 0 {
                        // Page complete; release the producer before
                        // handing out the final item
                        this.inner.set(None);
                    }
                    return Poll::Ready(Some(item));
                }
                None => {
                    this.inner.set(None);
                    return Poll::Ready(None);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(inner) => {
                let upper = match inner.size_hint().1 {
                    Some(source_upper) => source_upper
                        .saturating_sub(self.remaining_skip)
                        .min(self.remaining_take),
                    None => self.remaining_take,
                };
                (0, Some(upper))
            }
            None => (0, Some(0)),
        }
    }
}

/// Method-call form of [`paginate_stream`] for any stream
pub trait PaginateStreamExt: Stream + Sized {
    /// Return one page of this stream, see [`paginate_stream`]
    fn paginate(self, page_number: i32, page_size: i32) -> Result<PageStream<Self>> {
        paginate_stream(self, page_number, page_size)
    }
}

impl<S: Stream> PaginateStreamExt for S {}
