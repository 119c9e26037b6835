use wordbook_types::{DisplayEntry, LookupState};

use crate::markup::{Element, Node, el};
use crate::view::{audio_control, render_meaning, status_line};

/// Two-page spread; either page may be empty
pub fn book_background(left: Option<Element>, right: Option<Element>) -> Element {
    el("div")
        .class("book")
        .child(el("div").class("left-page").children(left))
        .child(el("div").class("right-page").children(right))
}

/// Results region in book layout. Only the first entry is shown.
pub fn render_book(state: &LookupState) -> Node {
    let book = state
        .entries()
        .first()
        .map(|entry| book_background(left_page(entry), right_page(entry)));

    el("section")
        .class("results")
        .children(status_line(state))
        .children(book)
        .into()
}

fn left_page(entry: &DisplayEntry) -> Option<Element> {
    let first = entry.meanings.first()?;

    let phonetic = entry
        .phonetics
        .first()
        .and_then(|p| p.text.as_deref())
        .map(|text| el("p").child(format!("Phonetic: {text}")));

    Some(
        el("div")
            .child(el("h1").child(entry.word.as_str()))
            .children(phonetic)
            .child(render_meaning(first, "p")),
    )
}

fn right_page(entry: &DisplayEntry) -> Option<Element> {
    let second = entry.meanings.get(1)?;

    let audio = entry
        .phonetics
        .first()
        .and_then(|p| p.audio_url())
        .map(audio_control);

    Some(
        el("div")
            .child(render_meaning(second, "p"))
            .children(audio),
    )
}
