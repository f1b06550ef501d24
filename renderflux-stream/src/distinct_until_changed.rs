// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::DistinctUntilChangedByExt;
use futures::Stream;

/// Extension trait providing the `distinct_until_changed` operator for streams.
///
/// Applied to a stream of [`PotentialObservable`](renderflux_core::PotentialObservable)s
/// this is the epoch detector: re-pushing the same source does not start a new epoch.
pub trait DistinctUntilChangedExt: Stream + Sized {
    /// Emits items only when they differ from the previously emitted item.
    ///
    /// Equality is the item's `PartialEq`. For potential observables that means
    /// value equality for plain values and identity for sources, never a
    /// structural comparison of what a source would emit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use renderflux_core::{Observable, PotentialObservable};
    /// use renderflux_stream::DistinctUntilChangedExt;
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let users = Observable::from_iter(vec!["alice", "bob"]);
    /// let inputs = stream::iter(vec![
    ///     PotentialObservable::from(users.clone()),
    ///     PotentialObservable::from(users),
    ///     PotentialObservable::Value("carol"),
    /// ]);
    ///
    /// let epochs: Vec<_> = inputs.distinct_until_changed().collect().await;
    /// assert_eq!(epochs.len(), 2);
    /// # }
    /// ```
    fn distinct_until_changed(self) -> impl Stream<Item = Self::Item> + Send + Unpin
    where
        Self: Send + 'static,
        Self::Item: Clone + PartialEq + Send + 'static;
}

impl<S> DistinctUntilChangedExt for S
where
    S: Stream + Sized,
{
    fn distinct_until_changed(self) -> impl Stream<Item = Self::Item> + Send + Unpin
    where
        Self: Send + 'static,
        Self::Item: Clone + PartialEq + Send + 'static,
    {
        self.distinct_until_changed_by(|current, previous| current == previous)
    }
}
