use wordbook_config::lookup::MAX_DEFINITIONS;
use wordbook_types::{DisplayEntry, Meaning, RawEntry};

/// Reshape one raw entry for display.
///
/// Keeps only phonetics with a non-empty audio URL and truncates every
/// meaning's definitions to `cap` (never more than [`MAX_DEFINITIONS`]).
/// Everything else is copied through unchanged.
pub fn shape_entry(raw: &RawEntry, cap: usize) -> DisplayEntry {
    let cap = cap.min(MAX_DEFINITIONS);

    DisplayEntry {
        word: raw.word.clone(),
        phonetic: raw.phonetic.clone(),
        phonetics: raw
            .phonetics
            .iter()
            .filter(|phonetic| phonetic.has_audio())
            .cloned()
            .collect(),
        meanings: raw
            .meanings
            .iter()
            .map(|meaning| Meaning {
                part_of_speech: meaning.part_of_speech.clone(),
                definitions: meaning.definitions.iter().take(cap).cloned().collect(),
                synonyms: meaning.synonyms.clone(),
                antonyms: meaning.antonyms.clone(),
            })
            .collect(),
        license: raw.license.clone(),
        source_urls: raw.source_urls.clone(),
    }
}

pub fn shape_entries(raw: &[RawEntry], cap: usize) -> Vec<DisplayEntry> {
    raw.iter().map(|entry| shape_entry(entry, cap)).collect()
}
