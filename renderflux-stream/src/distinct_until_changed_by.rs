// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use parking_lot::Mutex;
use std::sync::Arc;

/// Extension trait providing the `distinct_until_changed_by` operator for streams.
///
/// This operator filters out consecutive duplicate items using a custom comparison
/// function, emitting only when the item changes from the previous emission according
/// to the provided comparer.
pub trait DistinctUntilChangedByExt: Stream + Sized {
    /// Emits items only when they differ from the previously emitted item according
    /// to a custom comparison function.
    ///
    /// # Behavior
    ///
    /// - First item is always emitted (no previous item to compare)
    /// - Subsequent items are compared to the last *emitted* item using `compare`
    /// - Only items where `compare(current, previous) == false` are emitted
    /// - The comparer should return `true` if items are considered equal
    ///
    /// # Examples
    ///
    /// ```rust
    /// use renderflux_stream::DistinctUntilChangedByExt;
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let words = stream::iter(vec!["hello", "HELLO", "world", "World"]);
    ///
    /// let distinct: Vec<_> = words
    ///     .distinct_until_changed_by(|a, b| a.eq_ignore_ascii_case(b))
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(distinct, vec!["hello", "world"]);
    /// # }
    /// ```
    ///
    /// # Performance
    ///
    /// - O(1) time complexity per item (plus the cost of the comparer function)
    /// - Stores only the last emitted item
    ///
    /// # See Also
    ///
    /// - [`distinct_until_changed`](crate::DistinctUntilChangedExt::distinct_until_changed) - Uses `PartialEq` for comparison
    /// - [`distinct_render_events`](crate::DistinctRenderEventsExt::distinct_render_events) - Render event comparer
    fn distinct_until_changed_by<F>(
        self,
        compare: F,
    ) -> impl Stream<Item = Self::Item> + Send + Unpin
    where
        Self: Send + 'static,
        Self::Item: Clone + Send + 'static,
        F: Fn(&Self::Item, &Self::Item) -> bool + Send + Sync + 'static;
}

impl<S> DistinctUntilChangedByExt for S
where
    S: Stream + Sized,
{
    fn distinct_until_changed_by<F>(
        self,
        compare: F,
    ) -> impl Stream<Item = Self::Item> + Send + Unpin
    where
        Self: Send + 'static,
        Self::Item: Clone + Send + 'static,
        F: Fn(&Self::Item, &Self::Item) -> bool + Send + Sync + 'static,
    {
        let last_item: Arc<Mutex<Option<S::Item>>> = Arc::new(Mutex::new(None));
        let compare = Arc::new(compare);

        let stream = self.filter_map(move |item| {
            let last_item = Arc::clone(&last_item);
            let compare = Arc::clone(&compare);

            async move {
                let mut last = last_item.lock();

                let should_emit = match last.as_ref() {
                    None => true,
                    Some(prev) => !compare(&item, prev),
                };

                if should_emit {
                    *last = Some(item.clone());
                    Some(item)
                } else {
                    None
                }
            }
        });

        Box::pin(stream)
    }
}
