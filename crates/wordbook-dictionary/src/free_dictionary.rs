use async_trait::async_trait;
use wordbook_config::network::NetworkConfig;
use wordbook_types::RawEntry;

use crate::{DictionaryProvider, LookupError, ProviderMetadata};

/// Client for the dictionaryapi.dev entries endpoint
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    entries_url: String,
}

impl FreeDictionaryClient {
    /// `entries_url` is the language-level base, e.g. `.../api/v2/entries/en`
    pub fn new(entries_url: impl Into<String>) -> Self {
        let entries_url: String = entries_url.into();

        Self {
            client: reqwest::Client::new(),
            entries_url: entries_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &NetworkConfig) -> Self {
        Self::new(config.entries_url())
    }

    /// Full request URL for `term`. Empty terms are kept and give a trailing slash.
    pub fn request_url(&self, term: &str) -> String {
        format!("{}/{}", self.entries_url, urlencoding::encode(term))
    }
}

#[async_trait]
impl DictionaryProvider for FreeDictionaryClient {
    async fn lookup(&self, term: &str) -> Result<Vec<RawEntry>, LookupError> {
        let url = self.request_url(term);
        tracing::debug!("[DICTIONARY] GET {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("[DICTIONARY] {} answered {}", url, status);
            return Err(LookupError::NotFound {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let entries: Vec<RawEntry> = serde_json::from_slice(&body)
            .map_err(|e| LookupError::Decode(e.to_string()))?;

        tracing::debug!("[DICTIONARY] {} entries for '{}'", entries.len(), term);
        Ok(entries)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Free Dictionary API".to_string(),
            base_url: self.entries_url.clone(),
        }
    }
}
