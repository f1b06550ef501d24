// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::channel::oneshot;
use futures::{stream, StreamExt};
use renderflux_core::{Deferred, Observable, PotentialObservable, RenderError, RenderEvent};
use renderflux_stream::SwitchToRenderEventsExt;
use renderflux_test_utils::{
    assert_no_element_emitted, drain_ready, test_channel, unwrap_stream, ControlledSource,
};

#[tokio::test]
async fn test_switch_to_render_events_synchronous_value_skips_suspense() -> anyhow::Result<()> {
    // Arrange
    let source = ControlledSource::with_sync_values(vec![1]);
    let (tx, inputs) = test_channel::<PotentialObservable<i32>>();
    let mut events = Box::pin(inputs.switch_to_render_events(PotentialObservable::into_source));

    // Act
    tx.send(source.potential())?;

    // Assert
    assert_eq!(drain_ready(&mut events), vec![RenderEvent::next(1, true, true)]);

    // Act: later value
    source.next(2);

    // Assert
    assert_eq!(drain_ready(&mut events), vec![RenderEvent::next(2, false, false)]);

    Ok(())
}

#[tokio::test]
async fn test_switch_to_render_events_idle_source_emits_single_suspense() -> anyhow::Result<()> {
    // Arrange
    let source = ControlledSource::<i32>::new();
    let (tx, inputs) = test_channel();
    let mut events = Box::pin(inputs.switch_to_render_events(PotentialObservable::into_source));

    // Act
    tx.send(source.potential())?;

    // Assert
    assert_eq!(drain_ready(&mut events), vec![RenderEvent::suspense(true, true)]);
    assert_no_element_emitted(&mut events, 100).await;

    // Act: the source wakes up, then finishes
    source.next(5);
    source.complete();

    // Assert
    assert_eq!(
        drain_ready(&mut events),
        vec![
            RenderEvent::next(5, false, false),
            RenderEvent::complete(false, false),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_switch_to_render_events_reset_only_on_first_event_of_epoch() -> anyhow::Result<()> {
    // Arrange
    let source = ControlledSource::with_sync_values(vec![1, 2, 3]);
    let (tx, inputs) = test_channel();
    let mut events = Box::pin(inputs.switch_to_render_events(PotentialObservable::into_source));

    // Act
    tx.send(source.potential())?;
    let mut emitted = drain_ready(&mut events);
    source.next(4);
    emitted.extend(drain_ready(&mut events));

    // Assert
    let resets: Vec<bool> = emitted.iter().map(RenderEvent::reset).collect();
    assert_eq!(resets, vec![true, false, false, false]);

    Ok(())
}

#[tokio::test]
async fn test_switch_to_render_events_synchronous_items_then_complete() -> anyhow::Result<()> {
    // Arrange
    let source = ControlledSource::with_sync_values(vec![1, 2]);
    source.complete();
    let inputs = stream::iter(vec![source.potential()]);

    // Act
    let events: Vec<_> = inputs
        .switch_to_render_events(PotentialObservable::into_source)
        .collect()
        .await;

    // Assert
    assert_eq!(
        events,
        vec![
            RenderEvent::next(1, true, true),
            RenderEvent::next(2, false, true),
            RenderEvent::complete(false, true),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_switch_to_render_events_empty_source_completes_without_suspense(
) -> anyhow::Result<()> {
    // Arrange
    let inputs = stream::iter(vec![PotentialObservable::from(Observable::from_iter(
        Vec::<i32>::new(),
    ))]);

    // Act
    let events: Vec<_> = inputs
        .switch_to_render_events(PotentialObservable::into_source)
        .collect()
        .await;

    // Assert
    assert_eq!(events, vec![RenderEvent::complete(true, true)]);

    Ok(())
}

#[tokio::test]
async fn test_switch_to_render_events_plain_value_never_completes() -> anyhow::Result<()> {
    // Arrange
    let (tx, inputs) = test_channel();
    let mut events = Box::pin(inputs.switch_to_render_events(PotentialObservable::into_source));

    // Act
    tx.send(PotentialObservable::Value("ready"))?;

    // Assert
    assert_eq!(
        unwrap_stream(&mut events, 500).await,
        RenderEvent::next("ready", true, true)
    );
    assert_no_element_emitted(&mut events, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_switch_to_render_events_absent_input_suspends() -> anyhow::Result<()> {
    // Arrange
    let (tx, inputs) = test_channel::<PotentialObservable<i32>>();
    let mut events = Box::pin(inputs.switch_to_render_events(PotentialObservable::into_source));

    // Act
    tx.send(PotentialObservable::Absent)?;

    // Assert
    assert_eq!(
        unwrap_stream(&mut events, 500).await,
        RenderEvent::suspense(true, true)
    );
    assert_no_element_emitted(&mut events, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_switch_to_render_events_deferred_resolving_later() -> anyhow::Result<()> {
    // Arrange
    let (resolve, resolved) = oneshot::channel::<i32>();
    let deferred = Deferred::new(async move {
        resolved
            .await
            .map_err(|_| RenderError::source_error("resolver dropped"))
    });
    let (tx, inputs) = test_channel();
    let mut events = Box::pin(inputs.switch_to_render_events(PotentialObservable::into_source));

    // Act
    tx.send(PotentialObservable::from(deferred))?;

    // Assert
    assert_eq!(drain_ready(&mut events), vec![RenderEvent::suspense(true, true)]);

    // Act
    resolve
        .send(3)
        .map_err(|_| anyhow::anyhow!("deferred receiver dropped"))?;

    // Assert
    assert_eq!(
        drain_ready(&mut events),
        vec![
            RenderEvent::next(3, false, false),
            RenderEvent::complete(false, false),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_switch_to_render_events_resolved_deferred_is_synchronous() -> anyhow::Result<()> {
    // Arrange
    let inputs = stream::iter(vec![PotentialObservable::from(Deferred::resolved(9))]);

    // Act
    let events: Vec<_> = inputs
        .switch_to_render_events(PotentialObservable::into_source)
        .collect()
        .await;

    // Assert
    assert_eq!(
        events,
        vec![
            RenderEvent::next(9, true, true),
            RenderEvent::complete(false, true),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_switch_to_render_events_each_input_restarts_flags() -> anyhow::Result<()> {
    // Arrange
    let first = ControlledSource::<i32>::new();
    let second = ControlledSource::<i32>::new();
    let (tx, inputs) = test_channel();
    let mut events = Box::pin(inputs.switch_to_render_events(PotentialObservable::into_source));

    // Act
    tx.send(first.potential())?;
    let mut first_epoch = drain_ready(&mut events);
    first.next(1);
    first_epoch.extend(drain_ready(&mut events));

    tx.send(second.potential())?;
    let mut second_epoch = drain_ready(&mut events);
    second.next(2);
    second_epoch.extend(drain_ready(&mut events));

    // Assert
    assert_eq!(
        first_epoch,
        vec![
            RenderEvent::suspense(true, true),
            RenderEvent::next(1, false, false),
        ]
    );
    assert_eq!(
        second_epoch,
        vec![
            RenderEvent::suspense(true, true),
            RenderEvent::next(2, false, false),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_switch_to_render_events_custom_normalization() -> anyhow::Result<()> {
    // Arrange: every input is a count of synchronous values to emit
    let inputs = stream::iter(vec![2usize, 0]);

    // Act
    let events: Vec<_> = inputs
        .switch_to_render_events(|count| {
            stream::iter((0..count).map(renderflux_core::StreamItem::Value)).chain(stream::pending())
        })
        .take(3)
        .collect()
        .await;

    // Assert
    assert_eq!(
        events,
        vec![
            RenderEvent::next(0, true, true),
            RenderEvent::next(1, false, true),
            RenderEvent::suspense(true, true),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_switch_to_render_events_ends_after_inputs_and_source_end() -> anyhow::Result<()> {
    // Arrange
    let inputs = stream::iter(Vec::<PotentialObservable<i32>>::new());

    // Act
    let events: Vec<_> = inputs
        .switch_to_render_events(PotentialObservable::into_source)
        .collect()
        .await;

    // Assert
    assert!(events.is_empty());

    Ok(())
}
