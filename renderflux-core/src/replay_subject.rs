// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-slot, replay-on-subscribe input buffer.
//!
//! A [`ReplaySubject`] keeps the most recently pushed value and forwards every
//! push to its live subscribers.
//!
//! ## Characteristics
//!
//! - **Replay depth 1**: a subscriber first receives the latest value, then every later push.
//! - **Lazy**: [`observe`](ReplaySubject::observe) registers on first poll, so values
//!   pushed before that are collapsed into the latest one.
//! - **Unbounded**: uses unbounded mpsc channels internally (no backpressure).
//! - **Thread-safe**: cheap to clone; all clones share the same internal state.
//! - **Close**: live subscribers end after draining; late subscribers receive the
//!   retained value and then end.
//!
//! ## Example
//!
//! ```
//! use renderflux_core::ReplaySubject;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = ReplaySubject::<i32>::new();
//!
//! subject.push(1).unwrap();
//! subject.push(2).unwrap();
//!
//! // Late subscriber only sees the latest value
//! let mut stream = subject.observe();
//! assert_eq!(stream.next().await, Some(2));
//!
//! subject.push(3).unwrap();
//! subject.close();
//!
//! assert_eq!(stream.next().await, Some(3));
//! assert_eq!(stream.next().await, None);
//! # }
//! ```

use crate::BufferError;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::Stream;
use parking_lot::Mutex;
use std::sync::Arc;

struct SubjectState<T> {
    closed: bool,
    latest: Option<T>,
    senders: Vec<UnboundedSender<T>>,
}

/// A replay-1 subject holding the most recently pushed value.
///
/// See the [module documentation](self) for examples and more details.
pub struct ReplaySubject<T: Clone + Send + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> ReplaySubject<T> {
    /// Creates a new empty subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                latest: None,
                senders: Vec::new(),
            })),
        }
    }

    /// Stores `value` as the latest value and forwards it to all live subscribers.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::Closed` if the subject has been closed.
    pub fn push(&self, value: T) -> Result<(), BufferError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(BufferError::Closed);
        }

        state
            .senders
            .retain(|tx| tx.unbounded_send(value.clone()).is_ok());
        state.latest = Some(value);
        Ok(())
    }

    /// Returns a stream of pushed values, starting with the latest one.
    ///
    /// The subscription is registered when the stream is first polled.
    #[must_use]
    pub fn observe(&self) -> ReplayStream<T> {
        ReplayStream {
            state: Arc::clone(&self.state),
            receiver: None,
        }
    }

    /// Returns a clone of the latest pushed value, if any.
    #[must_use]
    pub fn latest(&self) -> Option<T> {
        self.state.lock().latest.clone()
    }

    /// Closes the subject, completing all subscriber streams.
    ///
    /// After closing:
    /// - Existing subscribers receive what was already pushed, then `None`.
    /// - `push()` returns `BufferError::Closed`.
    /// - New subscribers receive the retained latest value, then `None`.
    ///
    /// Closing is idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    /// Returns `true` if the subject has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Returns the number of registered subscribers.
    ///
    /// Note: dropped subscribers are removed on the next `push()`, not when dropped.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + 'static> Default for ReplaySubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Clone for ReplaySubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

/// Subscriber stream returned by [`ReplaySubject::observe`].
pub struct ReplayStream<T> {
    state: Arc<Mutex<SubjectState<T>>>,
    receiver: Option<UnboundedReceiver<T>>,
}

impl<T: Clone> ReplayStream<T> {
    fn register(&self) -> UnboundedReceiver<T> {
        let mut state = self.state.lock();
        let (tx, rx) = mpsc::unbounded();

        if let Some(latest) = state.latest.clone() {
            // The receiver is alive, so this cannot fail.
            let _ = tx.unbounded_send(latest);
        }

        if !state.closed {
            state.senders.push(tx);
        }

        rx
    }
}

impl<T: Clone> Stream for ReplayStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.receiver.is_none() {
            this.receiver = Some(this.register());
        }

        match this.receiver.as_mut() {
            Some(receiver) => Pin::new(receiver).poll_next(cx),
            None => Poll::Ready(None),
        }
    }
}
