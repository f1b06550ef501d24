// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for turning potential observables into render events.
//!
//! - [`PotentialObservable`]: the input, with [`Observable`] and [`Deferred`] sources
//! - [`StreamItem`]: what a normalized source yields
//! - [`RenderEvent`]: what the pipeline emits
//! - [`ReplaySubject`]: the replay-1 input buffer
//! - [`RenderError`] / [`BufferError`]: error types

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod buffer_error;
pub mod error;
pub mod potential_observable;
pub mod render_event;
pub mod replay_subject;
pub mod stream_item;

pub use self::buffer_error::BufferError;
pub use self::error::{IntoRenderError, RenderError, Result};
pub use self::potential_observable::{Deferred, Observable, PotentialObservable, SourceStream};
pub use self::render_event::{RenderEvent, RenderEventKind};
pub use self::replay_subject::{ReplayStream, ReplaySubject};
pub use self::stream_item::StreamItem;
