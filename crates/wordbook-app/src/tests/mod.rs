mod event_loop_tests;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;
use wordbook_config::Config;
use wordbook_dictionary::{DictionaryProvider, LookupError, ProviderMetadata};
use wordbook_types::RawEntry;

use crate::state::AppState;

const CHEF: &str = include_str!("../../../../fixtures/chef.json");

/// Knows only "chef"; everything else is a 404.
///
/// Answers after `delay`, or once the gate is released when one is set.
#[derive(Default)]
struct ChefOnly {
    delay: Duration,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl ChefOnly {
    fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    fn gated() -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        let provider = Self {
            gate: Mutex::new(Some(rx)),
            ..Self::default()
        };
        (provider, tx)
    }
}

#[async_trait]
impl DictionaryProvider for ChefOnly {
    async fn lookup(&self, term: &str) -> Result<Vec<RawEntry>, LookupError> {
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.await.ok();
        }
        tokio::time::sleep(self.delay).await;

        if term == "chef" {
            Ok(serde_json::from_str(CHEF).expect("fixture parses"))
        } else {
            Err(LookupError::NotFound { status: 404 })
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "chef-only".to_string(),
            base_url: "http://localhost/en".to_string(),
        }
    }
}

fn app_state_with(provider: ChefOnly) -> Arc<AppState> {
    Arc::new(AppState::with_provider(Config::default(), Arc::new(provider)))
}

fn app_state() -> Arc<AppState> {
    app_state_with(ChefOnly::default())
}
