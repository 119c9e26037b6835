use crate::entry::DisplayEntry;

pub const NOT_FOUND_MESSAGE: &str = "Word not found in the dictionary";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

/// State of one search session; exactly one variant holds at a time
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LookupState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Loaded(Vec<DisplayEntry>),
}

impl LookupState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LookupState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded entries, empty for every other state
    pub fn entries(&self) -> &[DisplayEntry] {
        match self {
            LookupState::Loaded(entries) => entries,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Committed search term from the input
    Search(String),
    StateChanged(LookupState),
    Shutdown,
}
