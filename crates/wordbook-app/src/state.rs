use std::sync::Arc;

use wordbook_config::Config;
use wordbook_core::LookupSession;
use wordbook_dictionary::{DictionaryProvider, FreeDictionaryClient};

pub struct AppState {
    pub config: Arc<Config>,
    pub session: Arc<LookupSession>,
}

impl AppState {
    /// State backed by the real dictionary service
    pub fn new(config: Config) -> Self {
        let provider = Arc::new(FreeDictionaryClient::from_config(&config.network));
        tracing::info!("Dictionary endpoint: {}", provider.metadata().base_url);

        Self::with_provider(config, provider)
    }

    pub fn with_provider(config: Config, provider: Arc<dyn DictionaryProvider>) -> Self {
        let session = Arc::new(LookupSession::new(provider, &config.lookup));

        Self {
            config: Arc::new(config),
            session,
        }
    }
}
