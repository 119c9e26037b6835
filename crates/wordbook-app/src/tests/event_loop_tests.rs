use std::time::Duration;

use kanal::AsyncReceiver;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use wordbook_types::{AppEvent, LookupState, NOT_FOUND_MESSAGE};

use super::{ChefOnly, app_state, app_state_with};
use crate::controller::ChannelSet;
use crate::events::event_loop;

async fn next_event(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("Timeout - no event arrived")
        .expect("channel open")
}

/// Wait for the first state update that is not `Loading`
async fn settled(rx: &AsyncReceiver<AppEvent>) -> LookupState {
    loop {
        match next_event(rx).await {
            AppEvent::StateChanged(LookupState::Loading) => continue,
            AppEvent::StateChanged(state) => return state,
            other => panic!("unexpected event: {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_search_event_produces_loaded_state() {
    let channels = ChannelSet::new();
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(event_loop(
        app_state(),
        channels.ui_to_app.1.clone(),
        channels.app_to_ui.0.clone(),
        cancel.clone(),
    ));

    channels
        .ui_to_app
        .0
        .send(AppEvent::Search("chef".to_string()))
        .await
        .expect("send failed");

    let state = settled(&channels.app_to_ui.1).await;
    assert_eq!(state.entries().len(), 1);
    assert_eq!(state.entries()[0].word, "chef");

    cancel.cancel();
    timeout(Duration::from_secs(2), handle)
        .await
        .expect("event loop stopped")
        .expect("event loop task")
        .expect("event loop result");
}

#[tokio::test]
async fn test_blank_search_reports_not_found() {
    let channels = ChannelSet::new();
    let cancel = CancellationToken::new();
    tokio::spawn(event_loop(
        app_state(),
        channels.ui_to_app.1.clone(),
        channels.app_to_ui.0.clone(),
        cancel.clone(),
    ));

    channels
        .ui_to_app
        .0
        .send(AppEvent::Search(String::new()))
        .await
        .expect("send failed");

    let state = settled(&channels.app_to_ui.1).await;
    assert_eq!(state.error(), Some(NOT_FOUND_MESSAGE));

    cancel.cancel();
}

#[tokio::test]
async fn test_loading_reaches_ui_before_result() {
    let (provider, release) = ChefOnly::gated();
    let channels = ChannelSet::new();
    let cancel = CancellationToken::new();
    tokio::spawn(event_loop(
        app_state_with(provider),
        channels.ui_to_app.1.clone(),
        channels.app_to_ui.0.clone(),
        cancel.clone(),
    ));

    channels
        .ui_to_app
        .0
        .send(AppEvent::Search("chef".to_string()))
        .await
        .expect("send failed");

    match next_event(&channels.app_to_ui.1).await {
        AppEvent::StateChanged(state) => assert_eq!(state, LookupState::Loading),
        other => panic!("unexpected event: {other:?}"),
    }

    release.send(()).expect("lookup waiting on gate");

    match next_event(&channels.app_to_ui.1).await {
        AppEvent::StateChanged(state) => assert_eq!(state.entries()[0].word, "chef"),
        other => panic!("unexpected event: {other:?}"),
    }

    cancel.cancel();
}

#[tokio::test]
async fn test_shutdown_waits_for_pending_lookup() {
    let channels = ChannelSet::new();
    let handle = tokio::spawn(event_loop(
        app_state_with(ChefOnly::slow(Duration::from_millis(50))),
        channels.ui_to_app.1.clone(),
        channels.app_to_ui.0.clone(),
        CancellationToken::new(),
    ));

    let tx = &channels.ui_to_app.0;
    tx.send(AppEvent::Search("chef".to_string())).await.expect("send failed");
    tx.send(AppEvent::Shutdown).await.expect("send failed");

    let mut states = Vec::new();
    loop {
        match next_event(&channels.app_to_ui.1).await {
            AppEvent::StateChanged(state) => states.push(state),
            AppEvent::Shutdown => break,
            other => panic!("unexpected event: {other:?}"),
        }
    }

    let last = states.last().expect("at least one state");
    assert_eq!(last.entries().len(), 1);
    assert_eq!(last.entries()[0].word, "chef");

    timeout(Duration::from_secs(2), handle)
        .await
        .expect("event loop stopped")
        .expect("event loop task")
        .expect("event loop result");
}

#[tokio::test]
async fn test_shutdown_event_is_echoed_to_ui() {
    let channels = ChannelSet::new();
    let handle = tokio::spawn(event_loop(
        app_state(),
        channels.ui_to_app.1.clone(),
        channels.app_to_ui.0.clone(),
        CancellationToken::new(),
    ));

    channels
        .ui_to_app
        .0
        .send(AppEvent::Shutdown)
        .await
        .expect("send failed");

    assert!(matches!(next_event(&channels.app_to_ui.1).await, AppEvent::Shutdown));
    let result = timeout(Duration::from_secs(2), handle).await;
    assert!(result.is_ok(), "Timeout - event loop ignored shutdown");
}

#[tokio::test]
async fn test_closed_ui_channel_stops_loop() {
    let (ui_tx, ui_rx) = kanal::bounded_async::<AppEvent>(4);
    let (app_tx, _app_rx) = kanal::bounded_async::<AppEvent>(4);
    let handle = tokio::spawn(event_loop(app_state(), ui_rx, app_tx, CancellationToken::new()));

    drop(ui_tx);

    let result = timeout(Duration::from_secs(2), handle)
        .await
        .expect("event loop stopped")
        .expect("event loop task");
    assert!(result.is_ok());
}
