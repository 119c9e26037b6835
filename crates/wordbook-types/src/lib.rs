pub mod entry;
pub mod types;

pub use entry::{Definition, DisplayEntry, License, Meaning, Phonetic, RawEntry};
pub use types::{AppEvent, LookupState, NOT_FOUND_MESSAGE, UNEXPECTED_MESSAGE};
