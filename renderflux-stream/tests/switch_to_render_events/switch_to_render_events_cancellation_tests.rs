// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use futures::StreamExt;
use renderflux_core::{PotentialObservable, RenderEvent};
use renderflux_stream::SwitchToRenderEventsExt;
use renderflux_test_utils::{assert_no_element_emitted, drain_ready, test_channel, ControlledSource};

#[tokio::test]
async fn test_switch_drops_previous_source() -> anyhow::Result<()> {
    // Arrange
    let first = ControlledSource::<i32>::new();
    let second = ControlledSource::<i32>::new();
    let (tx, inputs) = test_channel();
    let mut events = Box::pin(inputs.switch_to_render_events(PotentialObservable::into_source));

    tx.send(first.potential())?;
    let _ = drain_ready(&mut events);
    assert_eq!(first.active_subscriptions(), 1);

    // Act
    tx.send(second.potential())?;
    let _ = drain_ready(&mut events);

    // Assert
    assert_eq!(first.active_subscriptions(), 0);
    assert_eq!(second.active_subscriptions(), 1);

    Ok(())
}

#[tokio::test]
async fn test_switch_abandoned_source_emits_nothing() -> anyhow::Result<()> {
    // Arrange
    let first = ControlledSource::<i32>::new();
    let second = ControlledSource::<i32>::new();
    let (tx, inputs) = test_channel();
    let mut events = Box::pin(inputs.switch_to_render_events(PotentialObservable::into_source));

    tx.send(first.potential())?;
    tx.send(second.potential())?;
    let _ = drain_ready(&mut events);

    // Act
    first.next(1);
    first.complete();

    // Assert: no value and no synthetic Complete for the abandoned epoch
    assert_no_element_emitted(&mut events, 100).await;

    // Act
    second.next(2);

    // Assert
    assert_eq!(drain_ready(&mut events), vec![RenderEvent::next(2, false, false)]);

    Ok(())
}

#[tokio::test]
async fn test_switch_delivers_subscription_turn_before_next_input() -> anyhow::Result<()> {
    // Arrange: both inputs are ready at once
    let first = ControlledSource::with_sync_values(vec![1, 2]);
    let second = ControlledSource::with_sync_values(vec![3]);
    let inputs = stream::iter(vec![first.potential(), second.potential()]);

    // Act
    let mut events = Box::pin(inputs.switch_to_render_events(PotentialObservable::into_source));
    let emitted = drain_ready(&mut events);

    // Assert
    assert_eq!(
        emitted,
        vec![
            RenderEvent::next(1, true, true),
            RenderEvent::next(2, false, true),
            RenderEvent::next(3, true, true),
        ]
    );
    assert_eq!(first.active_subscriptions(), 0);
    assert_eq!(second.active_subscriptions(), 1);

    Ok(())
}

#[tokio::test]
async fn test_switch_new_input_wins_over_pending_source_items() -> anyhow::Result<()> {
    // Arrange
    let first = ControlledSource::<i32>::new();
    let second = ControlledSource::with_sync_values(vec![10]);
    let (tx, inputs) = test_channel();
    let mut events = Box::pin(inputs.switch_to_render_events(PotentialObservable::into_source));

    tx.send(first.potential())?;
    let _ = drain_ready(&mut events);

    // Act: the old source has an item queued when the new input arrives
    first.next(1);
    tx.send(second.potential())?;

    // Assert
    assert_eq!(drain_ready(&mut events), vec![RenderEvent::next(10, true, true)]);

    Ok(())
}

#[tokio::test]
async fn test_switch_resubscribes_same_source_on_every_input() -> anyhow::Result<()> {
    // Arrange
    let source = ControlledSource::with_sync_values(vec![1]);
    let (tx, inputs) = test_channel();
    let mut events = Box::pin(inputs.switch_to_render_events(PotentialObservable::into_source));

    // Act: without an epoch detector in front, the same input restarts the source
    tx.send(source.potential())?;
    tx.send(source.potential())?;
    let emitted = drain_ready(&mut events);

    // Assert
    assert_eq!(
        emitted,
        vec![
            RenderEvent::next(1, true, true),
            RenderEvent::next(1, true, true),
        ]
    );
    assert_eq!(source.subscriptions(), 2);
    assert_eq!(source.active_subscriptions(), 1);

    Ok(())
}

#[tokio::test]
async fn test_switch_dropping_stream_cancels_source() -> anyhow::Result<()> {
    // Arrange
    let source = ControlledSource::<i32>::new();
    let (tx, inputs) = test_channel();
    let mut events = Box::pin(inputs.switch_to_render_events(PotentialObservable::into_source));

    tx.send(source.potential())?;
    let _ = drain_ready(&mut events);

    // Act
    drop(events);

    // Assert
    assert_eq!(source.active_subscriptions(), 0);

    Ok(())
}

#[tokio::test]
async fn test_switch_keeps_active_source_after_inputs_end() -> anyhow::Result<()> {
    // Arrange
    let source = ControlledSource::<i32>::new();
    let (tx, inputs) = test_channel();
    let mut events = Box::pin(inputs.switch_to_render_events(PotentialObservable::into_source));

    tx.send(source.potential())?;
    let _ = drain_ready(&mut events);

    // Act
    drop(tx);
    source.next(1);
    source.complete();

    // Assert
    assert_eq!(events.next().await, Some(RenderEvent::next(1, false, false)));
    assert_eq!(events.next().await, Some(RenderEvent::complete(false, false)));
    assert_eq!(events.next().await, None);

    Ok(())
}
