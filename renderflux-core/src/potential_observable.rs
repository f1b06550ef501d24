// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Inputs accepted by the render event pipeline and their normalization.
//!
//! A [`PotentialObservable`] is absent, a plain value, a [`Deferred`] value or
//! an [`Observable`] multi-value source. [`PotentialObservable::into_source`]
//! turns any of them into a [`SourceStream`] of [`StreamItem`]s.
//!
//! ## Equality
//!
//! Plain values compare with `PartialEq`. Deferred values and observables
//! compare by identity: clones of one `Observable` are equal, two observables
//! built from identical factories are not. Re-pushing the same source is
//! therefore a no-op for the pipeline, while pushing a freshly built source
//! always starts a new epoch.
//!
//! ## Example
//!
//! ```
//! use renderflux_core::{Observable, PotentialObservable};
//!
//! let numbers = Observable::from_iter(vec![1, 2, 3]);
//!
//! let first = PotentialObservable::from(numbers.clone());
//! let second = PotentialObservable::from(numbers);
//! assert_eq!(first, second);
//!
//! let rebuilt = PotentialObservable::from(Observable::from_iter(vec![1, 2, 3]));
//! assert_ne!(first, rebuilt);
//! ```

use crate::error::RenderError;
use crate::StreamItem;
use core::fmt;
use core::future::Future;
use futures::future::{BoxFuture, FutureExt, Shared};
use futures::stream::{self, BoxStream, Stream, StreamExt};
use std::sync::Arc;

/// The normalized form of every input: a boxed stream of [`StreamItem`]s.
pub type SourceStream<T> = BoxStream<'static, StreamItem<T>>;

type SubscribeFn<T> = dyn Fn() -> SourceStream<T> + Send + Sync;

/// A cold, restartable asynchronous multi-value source.
///
/// Every call to [`subscribe`](Observable::subscribe) creates a fresh stream.
/// Dropping that stream is the cancellation of the subscription.
pub struct Observable<T> {
    subscribe: Arc<SubscribeFn<T>>,
}

impl<T: Send + 'static> Observable<T> {
    /// Creates an observable from a factory producing one stream per subscription.
    pub fn new<F, S>(factory: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
        S: Stream<Item = StreamItem<T>> + Send + 'static,
    {
        Self {
            subscribe: Arc::new(move || factory().boxed()),
        }
    }

    /// Creates an observable that emits the given values on subscription, then completes.
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Clone + Send + Sync + 'static,
    {
        let values = values.into_iter();
        Self::new(move || stream::iter(values.clone()).map(StreamItem::Value))
    }

    /// Creates an observable that never emits and never completes.
    #[must_use]
    pub fn never() -> Self {
        Self::new(stream::pending::<StreamItem<T>>)
    }

    /// Subscribes to the source, returning a fresh stream of its items.
    #[must_use]
    pub fn subscribe(&self) -> SourceStream<T> {
        (self.subscribe)()
    }
}

impl<T> Observable<T> {
    /// Returns `true` if both handles refer to the same source.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.subscribe, &other.subscribe)
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            subscribe: Arc::clone(&self.subscribe),
        }
    }
}

impl<T> PartialEq for Observable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Observable")
            .field(&Arc::as_ptr(&self.subscribe).cast::<()>())
            .finish()
    }
}

/// A single value that becomes available later, shared by every subscriber.
///
/// The future runs at most once; later subscribers observe the same outcome.
/// A subscription emits the resolved value and completes, or emits the error.
pub struct Deferred<T> {
    outcome: Arc<Shared<BoxFuture<'static, StreamItem<T>>>>,
}

impl<T: Clone + Send + Sync + 'static> Deferred<T> {
    /// Creates a deferred value from a future resolving to a value or an error.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, RenderError>> + Send + 'static,
    {
        Self {
            outcome: Arc::new(
                future
                    .map(|result| match result {
                        Ok(value) => StreamItem::Value(value),
                        Err(error) => StreamItem::Error(error),
                    })
                    .boxed()
                    .shared(),
            ),
        }
    }

    /// Creates an already resolved deferred value.
    pub fn resolved(value: T) -> Self {
        Self::new(futures::future::ready(Ok(value)))
    }

    /// Creates an already rejected deferred value.
    pub fn rejected(error: RenderError) -> Self {
        Self::new(futures::future::ready(Err(error)))
    }

    /// Subscribes to the outcome.
    #[must_use]
    pub fn subscribe(&self) -> SourceStream<T> {
        stream::once((*self.outcome).clone()).boxed()
    }
}

impl<T> Deferred<T> {
    /// Returns `true` if both handles refer to the same deferred value.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.outcome, &other.outcome)
    }
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            outcome: Arc::clone(&self.outcome),
        }
    }
}

impl<T> PartialEq for Deferred<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Deferred")
            .field(&Arc::as_ptr(&self.outcome).cast::<()>())
            .finish()
    }
}

/// Any input the render event pipeline accepts.
#[derive(Debug, Clone, Default)]
pub enum PotentialObservable<T> {
    /// No source. Normalizes to a source that never emits.
    #[default]
    Absent,
    /// A plain value. Emitted once, synchronously; the source then idles.
    Value(T),
    /// A single deferred value.
    Deferred(Deferred<T>),
    /// A multi-value source.
    Observable(Observable<T>),
}

impl<T> PotentialObservable<T> {
    /// Returns `true` if this is `Absent`.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl<T: Clone + Send + Sync + 'static> PotentialObservable<T> {
    /// Normalizes this input into an asynchronous source.
    ///
    /// - `Absent` never emits and never completes.
    /// - `Value(v)` emits `v` as soon as it is polled, then never completes.
    /// - `Deferred(d)` emits the outcome when resolved and completes after a value.
    /// - `Observable(o)` subscribes to `o`.
    #[must_use]
    pub fn into_source(self) -> SourceStream<T> {
        match self {
            Self::Absent => stream::pending().boxed(),
            Self::Value(value) => stream::once(futures::future::ready(StreamItem::Value(value)))
                .chain(stream::pending())
                .boxed(),
            Self::Deferred(deferred) => deferred.subscribe(),
            Self::Observable(observable) => observable.subscribe(),
        }
    }
}

impl<T: PartialEq> PartialEq for PotentialObservable<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) => true,
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Deferred(a), Self::Deferred(b)) => a.ptr_eq(b),
            (Self::Observable(a), Self::Observable(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl<T> From<Observable<T>> for PotentialObservable<T> {
    fn from(observable: Observable<T>) -> Self {
        Self::Observable(observable)
    }
}

impl<T> From<Deferred<T>> for PotentialObservable<T> {
    fn from(deferred: Deferred<T>) -> Self {
        Self::Deferred(deferred)
    }
}
