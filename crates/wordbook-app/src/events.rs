use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::watch;
use tokio::task::{JoinError, JoinSet};
use tokio_util::sync::CancellationToken;
use wordbook_types::{AppEvent, LookupState};

use crate::state::AppState;

/// App's main loop: turns submitted terms into lookups.
///
/// On `Shutdown` from the UI, lookups still in flight are finished and their
/// final state is forwarded before `Shutdown` is echoed back to the UI.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let forward_cancel = cancel.child_token();
    let forwarder = tokio::spawn(forward_states(
        state.session.subscribe(),
        app_to_ui_tx.clone(),
        forward_cancel.clone(),
    ));

    // Overlapping lookups are not serialized, the last to resolve wins
    let mut lookups: JoinSet<Result<LookupState, JoinError>> = JoinSet::new();
    let mut drain = false;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(e) => {
                    tracing::info!("[EVENT_LOOP] UI channel closed: {}", e);
                    break;
                }
            },
            Some(joined) = lookups.join_next(), if !lookups.is_empty() => {
                log_finished(joined);
                continue;
            }
            _ = cancel.cancelled() => break,
        };

        match event {
            AppEvent::Search(term) => {
                tracing::debug!("[EVENT_LOOP] Search submitted: '{}'", term);
                lookups.spawn(state.session.submit(term));
            }
            AppEvent::Shutdown => {
                tracing::info!("[EVENT_LOOP] Shutdown requested by UI");
                drain = true;
                break;
            }
            AppEvent::StateChanged(_) => {
                // UI-only event, ignore in backend
            }
        }
    }

    if drain {
        tracing::debug!("[EVENT_LOOP] Waiting for {} pending lookups", lookups.len());
        while let Some(joined) = lookups.join_next().await {
            log_finished(joined);
        }
    } else {
        lookups.abort_all();
    }

    forward_cancel.cancel();
    forwarder.await??;

    if drain && app_to_ui_tx.send(AppEvent::Shutdown).await.is_err() {
        tracing::debug!("[EVENT_LOOP] UI already gone");
    }

    Ok(())
}

fn log_finished(joined: Result<Result<LookupState, JoinError>, JoinError>) {
    match joined {
        Ok(Ok(state)) => tracing::debug!("[EVENT_LOOP] Lookup finished: {:?}", std::mem::discriminant(&state)),
        Ok(Err(e)) | Err(e) => tracing::error!("[EVENT_LOOP] Lookup task failed: {}", e),
    }
}

/// Push every state the session publishes to the UI.
///
/// A change published before `cancel` fires is still forwarded.
async fn forward_states(
    mut updates: watch::Receiver<LookupState>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            biased;
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = cancel.cancelled() => break,
        }

        let current = updates.borrow_and_update().clone();
        tracing::debug!("[EVENT_LOOP] State -> {:?}", std::mem::discriminant(&current));

        if app_to_ui_tx.send(AppEvent::StateChanged(current)).await.is_err() {
            tracing::debug!("[EVENT_LOOP] UI channel closed");
            break;
        }
    }

    Ok(())
}
