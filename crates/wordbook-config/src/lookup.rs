use serde::{Deserialize, Serialize};

/// Upper bound on definitions shown per meaning
pub const MAX_DEFINITIONS: usize = 5;

fn default_max_definitions() -> usize {
    MAX_DEFINITIONS
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LookupConfig {
    #[serde(default = "default_max_definitions")]
    pub max_definitions: usize,
}

impl LookupConfig {
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let max_definitions = var("MAX_DEFINITIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_definitions);

        Self { max_definitions }
    }

    /// Configured cap, kept within 1..=MAX_DEFINITIONS
    pub fn definition_cap(&self) -> usize {
        self.max_definitions.clamp(1, MAX_DEFINITIONS)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            max_definitions: default_max_definitions(),
        }
    }
}
