// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use parking_lot::Mutex;
use renderflux_core::{PotentialObservable, RenderEvent, RenderEventKind};
use renderflux_stream::prelude::*;
use renderflux_test_utils::{drain_ready, test_channel, unwrap_stream, ControlledSource};
use std::sync::Arc;

#[tokio::test]
async fn test_tap_passes_items_through_unchanged() -> anyhow::Result<()> {
    // Arrange
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);

    // Act
    let items: Vec<_> = stream::iter(vec![1, 2, 3])
        .tap(move |value| seen_clone.lock().push(*value))
        .collect()
        .await;

    // Assert
    assert_eq!(items, vec![1, 2, 3]);
    assert_eq!(*seen.lock(), vec![1, 2, 3]);

    Ok(())
}

#[tokio::test]
async fn test_tap_runs_before_consumer_sees_item() -> anyhow::Result<()> {
    // Arrange
    let counter = Arc::new(Mutex::new(0));
    let counter_clone = Arc::clone(&counter);
    let (tx, items) = test_channel::<&str>();
    let mut tapped = Box::pin(items.tap(move |_| *counter_clone.lock() += 1));

    // Act
    tx.send("first")?;
    let first = unwrap_stream(&mut tapped, 500).await;

    // Assert
    assert_eq!(first, "first");
    assert_eq!(*counter.lock(), 1);

    Ok(())
}

#[tokio::test]
async fn test_tap_sees_only_deduplicated_render_events() -> anyhow::Result<()> {
    // Arrange
    let kinds = Arc::new(Mutex::new(Vec::new()));
    let kinds_clone = Arc::clone(&kinds);
    let source = ControlledSource::<i32>::new();
    let (tx, inputs) = test_channel();
    let mut events = Box::pin(
        inputs
            .distinct_until_changed()
            .switch_to_render_events(PotentialObservable::into_source)
            .distinct_render_events()
            .tap(move |event: &RenderEvent<i32>| kinds_clone.lock().push(event.kind())),
    );

    // Act
    tx.send(source.potential())?;
    let _ = drain_ready(&mut events);
    source.next(1);
    source.next(1);
    source.complete();
    let _ = drain_ready(&mut events);

    // Assert
    assert_eq!(
        *kinds.lock(),
        vec![RenderEventKind::Suspense, RenderEventKind::Next, RenderEventKind::Complete]
    );

    Ok(())
}
