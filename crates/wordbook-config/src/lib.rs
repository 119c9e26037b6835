use std::env;

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::network::NetworkConfig;
use self::ui::UiConfig;

pub mod lookup;
pub mod network;
pub mod ui;

pub use ui::{Layout, OutputFormat};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub lookup: LookupConfig,
    pub ui: UiConfig,

    pub log_format: LogFormat,
}

impl Config {
    /// Build from process environment, falling back to defaults
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let log_format = match var("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Config {
            network: NetworkConfig::from_vars(&var),
            lookup: LookupConfig::from_vars(&var),
            ui: UiConfig::from_vars(&var),

            log_format,
        }
    }
}
