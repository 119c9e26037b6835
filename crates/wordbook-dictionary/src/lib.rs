mod free_dictionary;

pub use free_dictionary::FreeDictionaryClient;

use wordbook_types::{NOT_FOUND_MESSAGE, RawEntry, UNEXPECTED_MESSAGE};

/// Remote dictionary interface
#[async_trait::async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Fetch every entry the provider has for `term`, in provider order
    async fn lookup(&self, term: &str) -> Result<Vec<RawEntry>, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Lookup rejected with HTTP {status}")]
    NotFound { status: u16 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl LookupError {
    /// Message shown to the user in place of results
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::NotFound { .. } => NOT_FOUND_MESSAGE,
            LookupError::Network(_) | LookupError::Decode(_) => UNEXPECTED_MESSAGE,
        }
    }
}
