// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::DistinctUntilChangedByExt;
use futures::Stream;
use renderflux_core::RenderEvent;

/// Extension trait collapsing consecutive render events that describe the same state.
pub trait DistinctRenderEventsExt<T>: Stream<Item = RenderEvent<T>> + Sized {
    /// Drops an event when it has the same render state as the previously
    /// emitted one, across epochs.
    ///
    /// See [`RenderEvent::same_render_state`] for the comparison: kind and
    /// `reset` must match, `synchronous` is ignored, values and errors are
    /// compared with `PartialEq`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use renderflux_core::RenderEvent;
    /// use renderflux_stream::DistinctRenderEventsExt;
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let events = stream::iter(vec![
    ///     RenderEvent::next(1, false, true),
    ///     RenderEvent::next(1, false, false), // same state, dropped
    ///     RenderEvent::next(2, false, false),
    /// ]);
    ///
    /// let distinct: Vec<_> = events.distinct_render_events().collect().await;
    /// assert_eq!(distinct.len(), 2);
    /// # }
    /// ```
    fn distinct_render_events(self) -> impl Stream<Item = RenderEvent<T>> + Send + Unpin
    where
        Self: Send + 'static,
        T: Clone + PartialEq + Send + 'static;
}

impl<S, T> DistinctRenderEventsExt<T> for S
where
    S: Stream<Item = RenderEvent<T>> + Sized,
{
    fn distinct_render_events(self) -> impl Stream<Item = RenderEvent<T>> + Send + Unpin
    where
        Self: Send + 'static,
        T: Clone + PartialEq + Send + 'static,
    {
        self.distinct_until_changed_by(|current: &RenderEvent<T>, previous: &RenderEvent<T>| {
            current.same_render_state(previous)
        })
    }
}
