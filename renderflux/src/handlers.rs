// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Side-effect hooks invoked for every render event before the consumer sees it.
//!
//! A [`RenderEventHandler`] reacts per event kind. Implement the trait for a
//! stateful handler, or assemble one from closures with
//! [`RenderEventHandlers`]. `()` is the handler that does nothing.
//!
//! # Example
//!
//! ```
//! use renderflux::{RenderEvent, RenderEventHandler, RenderEventHandlers};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let redraws = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&redraws);
//!
//! let mut handlers = RenderEventHandlers::<i32>::new()
//!     .with_next(move |_| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     });
//!
//! handlers.handle(&RenderEvent::next(1, true, true));
//! handlers.handle(&RenderEvent::suspense(true, true)); // no suspense hook
//!
//! assert_eq!(redraws.load(Ordering::SeqCst), 1);
//! ```

use core::fmt;
use renderflux_core::{RenderEvent, RenderEventKind};

/// Reacts to render events by kind.
///
/// Every hook defaults to a no-op, so an implementation only overrides the
/// kinds it cares about. The hooks must not block: they run inline while the
/// render event stream is polled.
pub trait RenderEventHandler<T> {
    fn on_suspense(&mut self, _event: &RenderEvent<T>) {}

    fn on_next(&mut self, _event: &RenderEvent<T>) {}

    fn on_error(&mut self, _event: &RenderEvent<T>) {}

    fn on_complete(&mut self, _event: &RenderEvent<T>) {}

    /// Dispatches `event` to the hook matching its kind.
    fn handle(&mut self, event: &RenderEvent<T>) {
        match event.kind() {
            RenderEventKind::Suspense => self.on_suspense(event),
            RenderEventKind::Next => self.on_next(event),
            RenderEventKind::Error => self.on_error(event),
            RenderEventKind::Complete => self.on_complete(event),
        }
    }
}

impl<T> RenderEventHandler<T> for () {}

type Hook<T> = Box<dyn FnMut(&RenderEvent<T>) + Send>;

/// A [`RenderEventHandler`] built from optional per-kind closures.
///
/// A kind without a closure is ignored.
pub struct RenderEventHandlers<T> {
    suspense: Option<Hook<T>>,
    next: Option<Hook<T>>,
    error: Option<Hook<T>>,
    complete: Option<Hook<T>>,
}

impl<T> RenderEventHandlers<T> {
    /// Creates a handler set with no hooks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            suspense: None,
            next: None,
            error: None,
            complete: None,
        }
    }

    /// Sets the hook for `Suspense` events.
    #[must_use]
    pub fn with_suspense(mut self, hook: impl FnMut(&RenderEvent<T>) + Send + 'static) -> Self {
        self.suspense = Some(Box::new(hook));
        self
    }

    /// Sets the hook for `Next` events.
    #[must_use]
    pub fn with_next(mut self, hook: impl FnMut(&RenderEvent<T>) + Send + 'static) -> Self {
        self.next = Some(Box::new(hook));
        self
    }

    /// Sets the hook for `Error` events.
    #[must_use]
    pub fn with_error(mut self, hook: impl FnMut(&RenderEvent<T>) + Send + 'static) -> Self {
        self.error = Some(Box::new(hook));
        self
    }

    /// Sets the hook for `Complete` events.
    #[must_use]
    pub fn with_complete(mut self, hook: impl FnMut(&RenderEvent<T>) + Send + 'static) -> Self {
        self.complete = Some(Box::new(hook));
        self
    }
}

impl<T> RenderEventHandler<T> for RenderEventHandlers<T> {
    fn on_suspense(&mut self, event: &RenderEvent<T>) {
        if let Some(hook) = self.suspense.as_mut() {
            hook(event);
        }
    }

    fn on_next(&mut self, event: &RenderEvent<T>) {
        if let Some(hook) = self.next.as_mut() {
            hook(event);
        }
    }

    fn on_error(&mut self, event: &RenderEvent<T>) {
        if let Some(hook) = self.error.as_mut() {
            hook(event);
        }
    }

    fn on_complete(&mut self, event: &RenderEvent<T>) {
        if let Some(hook) = self.complete.as_mut() {
            hook(event);
        }
    }
}

impl<T> Default for RenderEventHandlers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RenderEventHandlers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderEventHandlers")
            .field("suspense", &self.suspense.is_some())
            .field("next", &self.next.is_some())
            .field("error", &self.error.is_some())
            .field("complete", &self.complete.is_some())
            .finish()
    }
}
