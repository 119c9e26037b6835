use wordbook_types::{Definition, DisplayEntry, LookupState, Meaning, Phonetic};

use crate::markup::{Element, Node, el};

pub const LOADING_TEXT: &str = "Loading...";

/// Loading indicator or error message for `state`, if any
pub fn status_line(state: &LookupState) -> Option<Element> {
    match state {
        LookupState::Loading => Some(el("p").class("loading").child(LOADING_TEXT)),
        LookupState::Error(message) => Some(el("p").class("error").child(message.as_str())),
        LookupState::Idle | LookupState::Loaded(_) => None,
    }
}

/// Results region in list layout
pub fn render_results(state: &LookupState) -> Node {
    el("section")
        .class("results")
        .children(status_line(state))
        .children(state.entries().iter().map(render_entry))
        .into()
}

pub fn render_entry(entry: &DisplayEntry) -> Element {
    el("div")
        .class("entry")
        .child(el("h3").child(entry.word.as_str()))
        .children(entry.phonetics.iter().map(render_phonetic))
        .children(
            entry
                .meanings
                .iter()
                .map(|meaning| render_meaning(meaning, "h4")),
        )
        .children(license_line(entry))
        .child(source_urls_line(&entry.source_urls))
}

fn render_phonetic(phonetic: &Phonetic) -> Element {
    el("div")
        .class("phonetic")
        .child(el("p").child(format!(
            "Phonetic Text: {}",
            phonetic.text.as_deref().unwrap_or_default()
        )))
        .children(phonetic.audio_url().map(audio_control))
}

/// Audio player bound to `url`
pub fn audio_control(url: &str) -> Element {
    el("audio")
        .attr("controls", "")
        .attr("src", url)
        .child(el("source").attr("src", url).attr("type", "audio/mpeg"))
        .child("Your browser does not support the audio element.")
}

/// One meaning: part of speech, its definitions, then meaning-level word lists
pub fn render_meaning(meaning: &Meaning, heading: &'static str) -> Element {
    el("div")
        .class("meaning")
        .child(el(heading).child(format!("Part of Speech: {}", meaning.part_of_speech)))
        .children(meaning.definitions.iter().map(render_definition))
        .children(word_list("Synonyms", &meaning.synonyms))
        .children(word_list("Antonyms", &meaning.antonyms))
}

fn render_definition(definition: &Definition) -> Element {
    el("div")
        .class("definition")
        .children(
            (!definition.definition.is_empty())
                .then(|| el("p").child(format!("Definition: {}", definition.definition))),
        )
        .children(
            definition
                .example
                .as_deref()
                .filter(|example| !example.is_empty())
                .map(|example| el("p").child(format!("Example: {example}"))),
        )
        .children(word_list("Synonyms", &definition.synonyms))
        .children(word_list("Antonyms", &definition.antonyms))
}

fn word_list(label: &str, words: &[String]) -> Option<Element> {
    (!words.is_empty()).then(|| el("p").child(format!("{label}: {}", words.join(", "))))
}

fn license_line(entry: &DisplayEntry) -> Option<Element> {
    let license = entry.license.as_ref().filter(|l| !l.name.is_empty())?;

    Some(el("p").child("License: ").child(external_link(&license.url, &license.name)))
}

fn source_urls_line(urls: &[String]) -> Element {
    let mut line = el("p").child("Source URLs:");
    for url in urls {
        line = line.child(" ").child(external_link(url, url));
    }
    line
}

fn external_link(href: &str, text: &str) -> Element {
    el("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .child(text)
}
