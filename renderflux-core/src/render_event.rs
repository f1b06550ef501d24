// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Render events: what a UI surface should currently display.
//!
//! Every event carries two flags:
//!
//! - `reset` is `true` only for the first event of an epoch (a state discontinuity).
//! - `synchronous` is `true` for events delivered within the subscription turn
//!   that started the epoch.
//!
//! ```
//! use renderflux_core::{RenderEvent, RenderEventKind};
//!
//! let loading = RenderEvent::<i32>::suspense(true, true);
//! let loaded = RenderEvent::next(42, false, false);
//!
//! assert_eq!(loading.kind(), RenderEventKind::Suspense);
//! assert_eq!(loaded.value(), Some(&42));
//! assert!(!loaded.same_render_state(&loading));
//! ```

use crate::error::RenderError;
use core::fmt;

/// A render event emitted by the render event pipeline.
///
/// `PartialEq` compares every field, including `synchronous`. Deduplication
/// uses the weaker [`same_render_state`](RenderEvent::same_render_state).
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent<T> {
    /// No current value; the source just (re)started.
    Suspense { reset: bool, synchronous: bool },
    /// The source produced a value.
    Next {
        value: T,
        reset: bool,
        synchronous: bool,
    },
    /// The source failed. No further events follow in the epoch.
    Error {
        error: RenderError,
        reset: bool,
        synchronous: bool,
    },
    /// The source finished. No further events follow in the epoch.
    Complete { reset: bool, synchronous: bool },
}

/// The variant tag of a [`RenderEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderEventKind {
    Suspense,
    Next,
    Error,
    Complete,
}

impl fmt::Display for RenderEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Suspense => "suspense",
            Self::Next => "next",
            Self::Error => "error",
            Self::Complete => "complete",
        };
        f.write_str(name)
    }
}

impl<T> RenderEvent<T> {
    pub const fn suspense(reset: bool, synchronous: bool) -> Self {
        Self::Suspense { reset, synchronous }
    }

    pub const fn next(value: T, reset: bool, synchronous: bool) -> Self {
        Self::Next {
            value,
            reset,
            synchronous,
        }
    }

    pub const fn error(error: RenderError, reset: bool, synchronous: bool) -> Self {
        Self::Error {
            error,
            reset,
            synchronous,
        }
    }

    pub const fn complete(reset: bool, synchronous: bool) -> Self {
        Self::Complete { reset, synchronous }
    }

    /// Returns the variant tag of this event.
    pub const fn kind(&self) -> RenderEventKind {
        match self {
            Self::Suspense { .. } => RenderEventKind::Suspense,
            Self::Next { .. } => RenderEventKind::Next,
            Self::Error { .. } => RenderEventKind::Error,
            Self::Complete { .. } => RenderEventKind::Complete,
        }
    }

    /// Returns `true` if this is the first event of its epoch.
    pub const fn reset(&self) -> bool {
        match self {
            Self::Suspense { reset, .. }
            | Self::Next { reset, .. }
            | Self::Error { reset, .. }
            | Self::Complete { reset, .. } => *reset,
        }
    }

    /// Returns `true` if this event was delivered during the subscription turn of its epoch.
    pub const fn synchronous(&self) -> bool {
        match self {
            Self::Suspense { synchronous, .. }
            | Self::Next { synchronous, .. }
            | Self::Error { synchronous, .. }
            | Self::Complete { synchronous, .. } => *synchronous,
        }
    }

    /// Returns the carried value of a `Next` event.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Next { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Returns the carried error of an `Error` event.
    pub const fn error_ref(&self) -> Option<&RenderError> {
        match self {
            Self::Error { error, .. } => Some(error),
            _ => None,
        }
    }

    pub const fn is_suspense(&self) -> bool {
        matches!(self, Self::Suspense { .. })
    }

    pub const fn is_next(&self) -> bool {
        matches!(self, Self::Next { .. })
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    /// Returns `true` if `other` describes the same renderable state as `self`.
    ///
    /// Kind and `reset` must match; `synchronous` is ignored. `Next` events
    /// additionally compare their values and `Error` events their errors.
    /// `Suspense` and `Complete` carry nothing else to compare.
    pub fn same_render_state(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        if self.kind() != other.kind() || self.reset() != other.reset() {
            return false;
        }

        match (self, other) {
            (Self::Next { value: a, .. }, Self::Next { value: b, .. }) => a == b,
            (Self::Error { error: a, .. }, Self::Error { error: b, .. }) => a == b,
            _ => true,
        }
    }
}
