// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A source whose emissions are driven by the test.
//!
//! A [`ControlledSource`] hands out an [`Observable`] whose subscriptions
//! first yield a fixed list of items synchronously, then whatever the test
//! sends through [`next`](ControlledSource::next),
//! [`error`](ControlledSource::error) and
//! [`complete`](ControlledSource::complete). It also counts subscriptions so
//! tests can observe cancellation on switch.

use futures::stream::{self, StreamExt};
use parking_lot::Mutex;
use renderflux_core::{Observable, PotentialObservable, RenderError, StreamItem};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

struct SourceState<T> {
    sync_items: Vec<StreamItem<T>>,
    senders: Vec<mpsc::UnboundedSender<StreamItem<T>>>,
    completed: bool,
    subscriptions: usize,
}

/// A test-driven source. Clones share the same state and the same [`Observable`].
pub struct ControlledSource<T> {
    state: Arc<Mutex<SourceState<T>>>,
    observable: Observable<T>,
}

impl<T: Clone + Send + 'static> ControlledSource<T> {
    /// Creates a source that emits nothing during subscription.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sync_items(Vec::new())
    }

    /// Creates a source that emits `values` synchronously on every subscription.
    #[must_use]
    pub fn with_sync_values(values: Vec<T>) -> Self {
        Self::with_sync_items(values.into_iter().map(StreamItem::Value).collect())
    }

    /// Creates a source that emits `items` synchronously on every subscription.
    #[must_use]
    pub fn with_sync_items(items: Vec<StreamItem<T>>) -> Self {
        let state = Arc::new(Mutex::new(SourceState {
            sync_items: items,
            senders: Vec::new(),
            completed: false,
            subscriptions: 0,
        }));

        let shared = Arc::clone(&state);
        let observable = Observable::new(move || {
            let mut state = shared.lock();
            state.subscriptions += 1;

            let (tx, rx) = mpsc::unbounded_channel();
            if !state.completed {
                state.senders.push(tx);
            }

            stream::iter(state.sync_items.clone()).chain(UnboundedReceiverStream::new(rx))
        });

        Self { state, observable }
    }

    /// The observable handed to the pipeline. Every call returns the same source.
    #[must_use]
    pub fn observable(&self) -> Observable<T> {
        self.observable.clone()
    }

    /// The observable wrapped as a [`PotentialObservable`].
    #[must_use]
    pub fn potential(&self) -> PotentialObservable<T> {
        PotentialObservable::Observable(self.observable())
    }

    /// Sends a value to every live subscription.
    pub fn next(&self, value: T) {
        self.send(StreamItem::Value(value));
    }

    /// Sends an error to every live subscription.
    pub fn error(&self, error: RenderError) {
        self.send(StreamItem::Error(error));
    }

    /// Ends every live subscription and every later one after its synchronous items.
    pub fn complete(&self) {
        let mut state = self.state.lock();
        state.completed = true;
        state.senders.clear();
    }

    /// Total number of subscriptions made so far.
    #[must_use]
    pub fn subscriptions(&self) -> usize {
        self.state.lock().subscriptions
    }

    /// Number of subscriptions whose stream has not been dropped.
    #[must_use]
    pub fn active_subscriptions(&self) -> usize {
        let mut state = self.state.lock();
        state.senders.retain(|tx| !tx.is_closed());
        state.senders.len()
    }

    fn send(&self, item: StreamItem<T>) {
        let mut state = self.state.lock();
        state.senders.retain(|tx| tx.send(item.clone()).is_ok());
    }
}

impl<T: Clone + Send + 'static> Default for ControlledSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ControlledSource<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            observable: self.observable.clone(),
        }
    }
}
