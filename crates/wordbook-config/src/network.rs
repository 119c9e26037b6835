use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// Where lookups are sent
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl NetworkConfig {
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: var("DICTIONARY_API_URL").unwrap_or_else(default_api_url),
            language: var("DICTIONARY_LANG").unwrap_or_else(default_language),
        }
    }

    /// Base URL for entries in the configured language, without a trailing slash
    pub fn entries_url(&self) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), self.language)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            language: default_language(),
        }
    }
}
