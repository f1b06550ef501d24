// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Side-effect operator.
//!
//! The [`tap`](TapExt::tap) operator invokes a function for each item without
//! affecting the stream. The render event manager uses it to drive handler
//! bookkeeping (e.g. scheduling a redraw) before the consumer sees an event.
//!
//! ```
//! use renderflux_stream::TapExt;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut seen = Vec::new();
//! let items: Vec<_> = stream::iter(vec![1, 2, 3])
//!     .tap(|value| seen.push(*value))
//!     .collect()
//!     .await;
//!
//! assert_eq!(items, vec![1, 2, 3]);
//! assert_eq!(seen, vec![1, 2, 3]);
//! # }
//! ```

use futures::{Stream, StreamExt};

/// Extension trait providing the [`tap`](TapExt::tap) operator.
pub trait TapExt: Stream + Sized {
    /// Invokes a side-effect function for each item, passing the item through unchanged.
    fn tap<F>(self, f: F) -> impl Stream<Item = Self::Item> + Send
    where
        Self: Send,
        F: FnMut(&Self::Item) + Send;
}

impl<S> TapExt for S
where
    S: Stream + Sized,
{
    fn tap<F>(self, mut f: F) -> impl Stream<Item = Self::Item> + Send
    where
        Self: Send,
        F: FnMut(&Self::Item) + Send,
    {
        self.map(move |item| {
            f(&item);
            item
        })
    }
}
