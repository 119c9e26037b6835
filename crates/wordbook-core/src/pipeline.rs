use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;
use wordbook_config::lookup::LookupConfig;
use wordbook_dictionary::DictionaryProvider;
use wordbook_types::LookupState;

use crate::shape::shape_entries;

/// One search session: owns the current [`LookupState`] and drives lookups.
///
/// Searches are not serialized. If two overlap, whichever response arrives
/// last decides the final state.
pub struct LookupSession {
    provider: Arc<dyn DictionaryProvider>,
    definition_cap: usize,
    state: watch::Sender<LookupState>,
}

impl LookupSession {
    pub fn new(provider: Arc<dyn DictionaryProvider>, config: &LookupConfig) -> Self {
        let (state, _) = watch::channel(LookupState::Idle);

        Self {
            provider,
            definition_cap: config.definition_cap(),
            state,
        }
    }

    pub fn state(&self) -> LookupState {
        self.state.borrow().clone()
    }

    /// Receiver that sees every state the session publishes
    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.state.subscribe()
    }

    /// Run one lookup to completion and return the final state
    pub async fn search(&self, term: String) -> LookupState {
        self.begin();
        self.resolve(term).await
    }

    /// Publish `Loading` right away, then finish the lookup on a spawned task
    pub fn submit(self: &Arc<Self>, term: String) -> JoinHandle<LookupState> {
        self.begin();

        let session = Arc::clone(self);
        tokio::spawn(async move { session.resolve(term).await })
    }

    fn begin(&self) {
        self.state.send_replace(LookupState::Loading);
    }

    async fn resolve(&self, term: String) -> LookupState {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("lookup", %request_id, term = %term);

        async {
            tracing::debug!("[PIPELINE] Request issued");

            let next = match self.provider.lookup(&term).await {
                Ok(raw) => {
                    let entries = shape_entries(&raw, self.definition_cap);
                    tracing::info!("[PIPELINE] Loaded {} entries", entries.len());
                    LookupState::Loaded(entries)
                }
                Err(e) => {
                    tracing::warn!("[PIPELINE] Lookup failed: {}", e);
                    LookupState::Error(e.user_message().to_string())
                }
            };

            self.state.send_replace(next.clone());
            next
        }
        .instrument(span)
        .await
    }
}
