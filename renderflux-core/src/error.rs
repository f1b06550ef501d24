// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::doc_markdown)]
//! Error types carried by render event sources.
//!
//! Sources never fail the pipeline itself. A failing source yields
//! [`StreamItem::Error`](crate::StreamItem::Error) carrying a [`RenderError`],
//! which the pipeline turns into a [`RenderEvent::Error`](crate::RenderEvent::Error).
//!
//! # Examples
//!
//! ```
//! use renderflux_core::{RenderError, Result};
//!
//! fn load_profile() -> Result<String> {
//!     Err(RenderError::source_error("profile service unavailable"))
//! }
//!
//! assert!(load_profile().is_err());
//! ```

use std::sync::Arc;

/// Error produced by a render event source.
///
/// Equality follows the identity rules used for render event deduplication:
/// context errors compare by message, wrapped user errors compare by identity
/// (two clones of the same wrapped error are equal, two separately wrapped
/// errors are not, even if they print the same).
#[derive(Debug, Clone, thiserror::Error)]
pub enum RenderError {
    /// The source failed with a plain description.
    #[error("Source error: {context}")]
    SourceError {
        /// Description of what went wrong
        context: String,
    },

    /// An error produced by user code, shared so clones keep their identity.
    #[error("User error: {0}")]
    UserError(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl RenderError {
    /// Create a source error with the given context
    pub fn source_error(context: impl Into<String>) -> Self {
        Self::SourceError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Arc::new(error))
    }

    /// Returns `true` if this error wraps a user-provided error.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::UserError(_))
    }
}

impl PartialEq for RenderError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SourceError { context: a }, Self::SourceError { context: b }) => a == b,
            (Self::UserError(a), Self::UserError(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Specialized Result type for render event sources.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Extension trait for converting foreign errors into [`RenderError`].
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoRenderError {
    /// Convert this error into a [`RenderError::UserError`].
    fn into_render_error(self) -> RenderError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoRenderError for E {
    fn into_render_error(self) -> RenderError {
        RenderError::user_error(self)
    }
}
