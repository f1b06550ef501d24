// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the renderflux workspace.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! - [`ControlledSource`]: an observable whose emissions the test drives
//! - [`test_channel`]: a plain input channel for feeding operators
//! - [`helpers`]: stream assertions
//!
//! # Examples
//!
//! ```rust
//! use renderflux_test_utils::{drain_ready, ControlledSource};
//! use renderflux_core::StreamItem;
//!
//! let source = ControlledSource::with_sync_values(vec![1]);
//! let mut subscription = source.observable().subscribe();
//!
//! assert_eq!(drain_ready(&mut subscription), vec![StreamItem::Value(1)]);
//!
//! source.next(2);
//! assert_eq!(drain_ready(&mut subscription), vec![StreamItem::Value(2)]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod controlled_source;
pub mod helpers;

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use controlled_source::ControlledSource;
pub use helpers::{assert_no_element_emitted, drain_ready, unwrap_stream};

/// Creates an unbounded test channel whose receiving side is a stream.
///
/// Sending from the test while an operator consumes the stream avoids the
/// conflict between consuming operators and imperative setup.
///
/// # Example
///
/// ```rust
/// use renderflux_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # #[tokio::main]
/// # async fn main() {
/// let (tx, mut stream) = test_channel();
/// tx.send(1).unwrap();
///
/// assert_eq!(stream.next().await, Some(1));
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = T> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
