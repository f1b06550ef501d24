// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream operators that turn a stream of inputs into render events.
//!
//! Every operator is an extension trait over [`futures::Stream`], so the
//! render event pipeline is an ordinary operator chain:
//!
//! ```text
//! inputs ─► distinct_until_changed ─► switch_to_render_events ─► distinct_render_events ─► tap
//!           (epoch detector)          (Suspense/Next/Error/      (dedup by render state)   (handlers)
//!                                      Complete + flags)
//! ```
//!
//! ## Operators
//!
//! | Operator | Purpose |
//! |----------|---------|
//! | [`distinct_until_changed`](DistinctUntilChangedExt::distinct_until_changed) | Drop an item equal to the previous one |
//! | [`distinct_until_changed_by`](DistinctUntilChangedByExt::distinct_until_changed_by) | Same, with a custom comparer |
//! | [`switch_to_render_events`](SwitchToRenderEventsExt::switch_to_render_events) | Switch-latest into render events |
//! | [`distinct_render_events`](DistinctRenderEventsExt::distinct_render_events) | Collapse events with the same render state |
//! | [`tap`](TapExt::tap) | Side effect per item |
//!
//! ## Example
//!
//! ```
//! use renderflux_core::{PotentialObservable, RenderEvent};
//! use renderflux_stream::prelude::*;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let inputs = stream::iter(vec![
//!     PotentialObservable::Value(1),
//!     PotentialObservable::Value(1), // same input, no new epoch
//!     PotentialObservable::Absent,
//! ]);
//!
//! let mut events = Box::pin(
//!     inputs
//!         .distinct_until_changed()
//!         .switch_to_render_events(PotentialObservable::into_source)
//!         .distinct_render_events(),
//! );
//!
//! assert_eq!(events.next().await, Some(RenderEvent::next(1, true, true)));
//! assert_eq!(events.next().await, Some(RenderEvent::suspense(true, true)));
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod distinct_render_events;
pub mod distinct_until_changed;
pub mod distinct_until_changed_by;
pub mod prelude;
pub mod switch_to_render_events;
pub mod tap;

pub use distinct_render_events::DistinctRenderEventsExt;
pub use distinct_until_changed::DistinctUntilChangedExt;
pub use distinct_until_changed_by::DistinctUntilChangedByExt;
pub use switch_to_render_events::SwitchToRenderEventsExt;
pub use tap::TapExt;
