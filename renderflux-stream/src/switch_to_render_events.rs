// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Switch-latest operator wrapping every source emission in a [`RenderEvent`].
//!
//! Each input starts a new *epoch*: the previous source is dropped, the input
//! is normalized into a source and that source is polled right away, inside the
//! same `poll_next` call. Everything the source has ready during this
//! subscription turn is emitted with `synchronous: true`; everything after it
//! with `synchronous: false`.
//!
//! # Event sequence of one epoch
//!
//! | Source behaviour | Events |
//! |------------------|--------|
//! | nothing ready on subscribe | `Suspense { reset: true, synchronous: true }`, then later events with `reset: false` |
//! | value ready on subscribe | `Next { reset: true, synchronous: true }`, no `Suspense` |
//! | yields an error | `Error`, epoch over |
//! | ends | `Complete`, epoch over |
//!
//! # Example
//!
//! ```
//! use renderflux_core::{Observable, PotentialObservable, RenderEvent};
//! use renderflux_stream::SwitchToRenderEventsExt;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let inputs = stream::iter(vec![PotentialObservable::from(Observable::from_iter(vec![1, 2]))]);
//!
//! let events: Vec<_> = inputs
//!     .switch_to_render_events(PotentialObservable::into_source)
//!     .collect()
//!     .await;
//!
//! assert_eq!(
//!     events,
//!     vec![
//!         RenderEvent::next(1, true, true),
//!         RenderEvent::next(2, false, true),
//!         RenderEvent::complete(false, true),
//!     ]
//! );
//! # }
//! ```

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use pin_project::pin_project;
use renderflux_core::{RenderEvent, StreamItem};
use std::collections::VecDeque;

/// Extension trait providing the [`switch_to_render_events`](SwitchToRenderEventsExt::switch_to_render_events) operator.
pub trait SwitchToRenderEventsExt: Stream + Sized {
    /// Switches to the source produced by `to_source` for every input and
    /// emits its items as render events.
    ///
    /// # Behavior
    ///
    /// - At most one source is alive: a new input drops the previous source
    ///   before `to_source` is called, so an abandoned source emits nothing more.
    /// - `Suspense { reset: true, synchronous: true }` is emitted when the new
    ///   source has nothing ready during its subscription turn.
    /// - Values become `Next`, an error item becomes `Error` and the end of the
    ///   source becomes `Complete`; `Error` and `Complete` end the epoch.
    /// - Events produced during a subscription turn are delivered before the
    ///   next input is taken.
    /// - The stream ends once the inputs are exhausted and no source is alive.
    ///
    /// A source that never reports pending during its subscription turn keeps
    /// the subscription turn going forever.
    ///
    /// # Arguments
    ///
    /// * `to_source` - Normalizes an input into a source of [`StreamItem`]s
    fn switch_to_render_events<T, Src, F>(
        self,
        to_source: F,
    ) -> impl Stream<Item = RenderEvent<T>> + Send
    where
        Self: Send,
        T: Send,
        Src: Stream<Item = StreamItem<T>> + Send,
        F: FnMut(Self::Item) -> Src + Send;
}

impl<S> SwitchToRenderEventsExt for S
where
    S: Stream + Sized,
{
    fn switch_to_render_events<T, Src, F>(
        self,
        to_source: F,
    ) -> impl Stream<Item = RenderEvent<T>> + Send
    where
        Self: Send,
        T: Send,
        Src: Stream<Item = StreamItem<T>> + Send,
        F: FnMut(Self::Item) -> Src + Send,
    {
        RenderEventStream {
            inputs: self,
            to_source,
            active: None,
            epoch: EpochState::default(),
            ready: VecDeque::new(),
            inputs_done: false,
        }
    }
}

/// Per-epoch flags shared by every event of the epoch.
#[derive(Debug)]
struct EpochState {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    id: u64,
    reset: bool,
    synchronous: bool,
}

impl Default for EpochState {
    fn default() -> Self {
        Self {
            id: 0,
            reset: true,
            synchronous: true,
        }
    }
}

impl EpochState {
    fn begin(&mut self) {
        self.id += 1;
        self.reset = true;
        self.synchronous = true;
    }

    fn take_reset(&mut self) -> bool {
        core::mem::replace(&mut self.reset, false)
    }

    fn wrap<T>(&mut self, item: StreamItem<T>) -> RenderEvent<T> {
        let synchronous = self.synchronous;
        let reset = self.take_reset();
        match item {
            StreamItem::Value(value) => RenderEvent::next(value, reset, synchronous),
            StreamItem::Error(error) => RenderEvent::error(error, reset, synchronous),
        }
    }

    fn complete<T>(&mut self) -> RenderEvent<T> {
        let synchronous = self.synchronous;
        RenderEvent::complete(self.take_reset(), synchronous)
    }
}

#[pin_project]
struct RenderEventStream<S, F, Src, T> {
    #[pin]
    inputs: S,
    to_source: F,
    active: Option<Pin<Box<Src>>>,
    epoch: EpochState,
    ready: VecDeque<RenderEvent<T>>,
    inputs_done: bool,
}

impl<S, F, Src, T> Stream for RenderEventStream<S, F, Src, T>
where
    S: Stream,
    Src: Stream<Item = StreamItem<T>>,
    F: FnMut(S::Item) -> Src,
{
    type Item = RenderEvent<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(event) = this.ready.pop_front() {
                return Poll::Ready(Some(event));
            }

            // 1. A new input wins over the active source
            if !*this.inputs_done {
                match this.inputs.as_mut().poll_next(cx) {
                    Poll::Ready(Some(input)) => {
                        // Unsubscribe before resubscribing
                        *this.active = None;
                        this.epoch.begin();
                        trace!(epoch = this.epoch.id, "switching to new source");

                        let mut source = Box::pin((this.to_source)(input));
                        let alive = subscribe(&mut source, this.epoch, this.ready, cx);
                        if alive {
                            *this.active = Some(source);
                        }
                        continue;
                    }
                    Poll::Ready(None) => *this.inputs_done = true,
                    Poll::Pending => {}
                }
            }

            // 2. Forward the active source
            let Some(source) = this.active.as_mut() else {
                return if *this.inputs_done {
                    Poll::Ready(None)
                } else {
                    Poll::Pending
                };
            };

            return match source.as_mut().poll_next(cx) {
                Poll::Ready(Some(item)) => {
                    if item.is_error() {
                        trace!(epoch = this.epoch.id, "source failed");
                        *this.active = None;
                    }
                    Poll::Ready(Some(this.epoch.wrap(item)))
                }
                Poll::Ready(None) => {
                    trace!(epoch = this.epoch.id, "source completed");
                    *this.active = None;
                    Poll::Ready(Some(this.epoch.complete()))
                }
                Poll::Pending => Poll::Pending,
            };
        }
    }
}

/// Runs the subscription turn of a fresh source.
///
/// Drains everything the source has ready into `ready`, appends the Suspense
/// marker if nothing was ready and closes the synchronous window. Returns
/// `false` when the source already ended or failed.
fn subscribe<Src, T>(
    source: &mut Pin<Box<Src>>,
    epoch: &mut EpochState,
    ready: &mut VecDeque<RenderEvent<T>>,
    cx: &mut Context<'_>,
) -> bool
where
    Src: Stream<Item = StreamItem<T>>,
{
    let mut alive = true;

    while alive {
        match source.as_mut().poll_next(cx) {
            Poll::Ready(Some(item)) => {
                alive = !item.is_error();
                ready.push_back(epoch.wrap(item));
            }
            Poll::Ready(None) => {
                alive = false;
                ready.push_back(epoch.complete());
            }
            Poll::Pending => break,
        }
    }

    if epoch.reset {
        ready.push_back(RenderEvent::suspense(epoch.take_reset(), true));
    }
    epoch.synchronous = false;

    alive
}
