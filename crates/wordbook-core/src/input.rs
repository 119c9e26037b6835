use crate::markup::{Node, el};

pub const PLACEHOLDER: &str = "Search for a word";
pub const SUBMIT_LABEL: &str = "Search";

/// Key and pointer events the search box reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Backspace,
    /// Enter pressed while the field has focus
    Enter,
    /// The "Search" button
    SubmitClicked,
}

/// Controlled search field. Owns only the draft text.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    draft: String,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.draft
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.draft = value.into();
    }

    /// Apply an event; returns the committed term on submit.
    ///
    /// The term is the draft exactly as typed, with no trimming or validation.
    pub fn handle(&mut self, event: InputEvent) -> Option<String> {
        match event {
            InputEvent::Char(c) => {
                self.draft.push(c);
                None
            }
            InputEvent::Backspace => {
                self.draft.pop();
                None
            }
            InputEvent::Enter | InputEvent::SubmitClicked => Some(self.draft.clone()),
        }
    }

    /// Type `text` into the field one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.handle(InputEvent::Char(c));
        }
    }

    pub fn view(&self) -> Node {
        el("form")
            .class("search")
            .child(
                el("input")
                    .attr("type", "text")
                    .attr("value", self.draft.as_str())
                    .attr("placeholder", PLACEHOLDER),
            )
            .child(el("button").attr("type", "submit").child(SUBMIT_LABEL))
            .into()
    }
}
