use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How results are arranged on the page
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    List,
    Book,
}

/// What the shell writes to stdout
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub layout: Layout,
    pub format: OutputFormat,
}

impl UiConfig {
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let layout = var("WORDBOOK_LAYOUT")
            .and_then(|v| Layout::from_str(&v, true).ok())
            .unwrap_or_default();
        let format = var("WORDBOOK_FORMAT")
            .and_then(|v| OutputFormat::from_str(&v, true).ok())
            .unwrap_or_default();

        Self { layout, format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_values_are_case_insensitive() {
        let ui = UiConfig::from_vars(|key| match key {
            "WORDBOOK_LAYOUT" => Some("BOOK".to_string()),
            "WORDBOOK_FORMAT" => Some("Html".to_string()),
            _ => None,
        });

        assert_eq!(ui.layout, Layout::Book);
        assert_eq!(ui.format, OutputFormat::Html);
    }

    #[test]
    fn test_unknown_env_values_fall_back_to_defaults() {
        let ui = UiConfig::from_vars(|key| match key {
            "WORDBOOK_LAYOUT" => Some("scroll".to_string()),
            "WORDBOOK_FORMAT" => Some("pdf".to_string()),
            _ => None,
        });

        assert_eq!(ui, UiConfig::default());
    }

    #[test]
    fn test_flag_names_are_lowercase() {
        let names: Vec<_> = Layout::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();

        assert_eq!(names, vec!["list", "book"]);
    }
}
