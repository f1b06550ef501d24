// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Renderflux
//!
//! Turns a sequence of *potential observables* (nothing, a plain value, a
//! deferred value or an asynchronous multi-value source) into a stream of
//! render events a UI layer can draw from.
//!
//! ## Overview
//!
//! Each input that differs from the previous one starts an *epoch*. Within an
//! epoch the active source is reported as:
//!
//! - `Suspense`: nothing to show yet
//! - `Next`: a value arrived
//! - `Error`: the source failed
//! - `Complete`: the source finished
//!
//! Every event carries two flags. `reset` marks the first event of an epoch,
//! `synchronous` marks events produced while the source was being subscribed.
//! Consecutive events describing the same state are collapsed.
//!
//! ## Quick Start
//!
//! ```rust
//! use renderflux::{Observable, RenderEvent, RenderEventHandlers, RenderEventManager};
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() {
//!     let handlers = RenderEventHandlers::new().with_suspense(|_| println!("show spinner"));
//!     let manager = RenderEventManager::new(handlers);
//!
//!     manager.push_input(Observable::from_iter(vec![1, 2]));
//!
//!     let events: Vec<_> = manager.render_events().take(3).collect().await;
//!     assert_eq!(
//!         events,
//!         vec![
//!             RenderEvent::next(1, true, true),
//!             RenderEvent::next(2, false, true),
//!             RenderEvent::complete(false, true),
//!         ]
//!     );
//! }
//! ```
//!
//! ## Crates
//!
//! - `renderflux-core`: inputs, render events, errors and the input buffer
//! - `renderflux-stream`: the stream operators the pipeline is made of
//! - `renderflux`: the [`RenderEventManager`] facade and handlers

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod handlers;
pub mod manager;

pub use handlers::{RenderEventHandler, RenderEventHandlers};
pub use manager::RenderEventManager;

// Re-export core types
pub use renderflux_core::{
    BufferError, Deferred, IntoRenderError, Observable, PotentialObservable, RenderError,
    RenderEvent, RenderEventKind, ReplaySubject, SourceStream, StreamItem,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{RenderEventHandler, RenderEventHandlers, RenderEventManager};
    pub use renderflux_core::{
        Deferred, Observable, PotentialObservable, RenderError, RenderEvent, StreamItem,
    };
    pub use renderflux_stream::prelude::*;
}
