// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The render event manager.
//!
//! [`RenderEventManager`] owns the input buffer and assembles the pipeline:
//!
//! ```text
//! push_input ─► ReplaySubject ─► distinct_until_changed ─► switch_to_render_events
//!                                                                  │
//!            consumer ◄─ tap(handler) ◄─ distinct_render_events ◄──┘
//! ```

use crate::handlers::RenderEventHandler;
use futures::Stream;
use parking_lot::Mutex;
use renderflux_core::{PotentialObservable, RenderEvent, ReplaySubject};
use renderflux_stream::prelude::*;
use std::sync::Arc;

/// Turns a sequence of potential observables into render events.
///
/// Inputs are pushed with [`push_input`](Self::push_input) at any time,
/// including before anyone listens: the latest input is replayed to every
/// new render event stream. Clones share the input buffer and the handler.
///
/// # Example
///
/// ```
/// use renderflux::{Observable, PotentialObservable, RenderEvent, RenderEventManager};
/// use futures::StreamExt;
///
/// # #[tokio::main]
/// # async fn main() {
/// let manager: RenderEventManager<&str> = RenderEventManager::new(());
/// manager.push_input(Observable::from_iter(vec!["loaded"]));
///
/// let mut events = manager.render_events();
/// assert_eq!(events.next().await, Some(RenderEvent::next("loaded", true, true)));
/// assert_eq!(events.next().await, Some(RenderEvent::complete(false, true)));
///
/// manager.push_input(PotentialObservable::Absent);
/// assert_eq!(events.next().await, Some(RenderEvent::suspense(true, true)));
/// # }
/// ```
pub struct RenderEventManager<T: Clone + Send + Sync + 'static, H = ()> {
    inputs: ReplaySubject<PotentialObservable<T>>,
    handler: Arc<Mutex<H>>,
}

impl<T, H> RenderEventManager<T, H>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    H: RenderEventHandler<T> + Send + 'static,
{
    /// Creates a manager whose render event streams report to `handler`.
    pub fn new(handler: H) -> Self {
        Self {
            inputs: ReplaySubject::new(),
            handler: Arc::new(Mutex::new(handler)),
        }
    }

    /// Pushes the next potential observable.
    ///
    /// Pushing an input equal to the current one does nothing. After
    /// [`close`](Self::close) the input is logged and dropped.
    pub fn push_input(&self, input: impl Into<PotentialObservable<T>>) {
        if let Err(error) = self.inputs.push(input.into()) {
            warn!("render event manager: input dropped: {error}");
        }
    }

    /// Creates a render event stream.
    ///
    /// The stream starts from the latest pushed input. The handler sees every
    /// event before the stream yields it. Dropping the stream cancels the
    /// active source.
    pub fn render_events(&self) -> impl Stream<Item = RenderEvent<T>> + Send + Unpin {
        let handler = Arc::clone(&self.handler);

        let events = self
            .inputs
            .observe()
            .distinct_until_changed()
            .switch_to_render_events(PotentialObservable::into_source)
            .distinct_render_events()
            .tap(move |event: &RenderEvent<T>| handler.lock().handle(event));

        Box::pin(events)
    }

    /// The most recently pushed input, if any.
    pub fn latest_input(&self) -> Option<PotentialObservable<T>> {
        self.inputs.latest()
    }

    /// Shared handle to the handler.
    pub fn handler(&self) -> Arc<Mutex<H>> {
        Arc::clone(&self.handler)
    }

    /// Stops accepting inputs.
    ///
    /// Live render event streams end once their active source ends.
    pub fn close(&self) {
        self.inputs.close();
    }

    /// Returns `true` once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.inputs.is_closed()
    }
}

impl<T, H> Default for RenderEventManager<T, H>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    H: RenderEventHandler<T> + Default + Send + 'static,
{
    fn default() -> Self {
        Self::new(H::default())
    }
}

impl<T: Clone + Send + Sync + 'static, H> Clone for RenderEventManager<T, H> {
    fn clone(&self) -> Self {
        Self {
            inputs: self.inputs.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}
