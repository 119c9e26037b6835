use maud::{DOCTYPE, PreEscaped, html};
use wordbook_config::Layout;
use wordbook_types::LookupState;

use crate::book::render_book;
use crate::input::SearchInput;
use crate::markup::{Node, el};
use crate::view::render_results;

const TITLE: &str = "Wordbook";

const STYLE: &str = "\
body { display: flex; justify-content: center; font-family: Georgia, serif; }
form.search { text-align: center; margin: 24px 0; }
section.results { width: 600px; max-width: 100%; padding: 0 36px 36px; }
div.book { width: 700px; height: 550px; display: flex; margin-top: 30px; }
div.left-page { width: 50%; padding: 0 25px 0 75px; overflow-wrap: break-word; }
div.right-page { width: 50%; padding: 20px 75px 0 25px; overflow-wrap: break-word; }
";

/// Search box above the results region for `layout`
pub fn render_page(input: &SearchInput, state: &LookupState, layout: Layout) -> Node {
    let results = match layout {
        Layout::List => render_results(state),
        Layout::Book => render_book(state),
    };

    el("main").child(input.view()).child(results).into()
}

/// Standalone HTML document around a rendered page
pub fn html_document(page: &Node) -> String {
    let document = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (TITLE) }
                style { (PreEscaped(STYLE)) }
            }
            body { (page) }
        }
    };

    format!("{}\n", document.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_search_controls_in_every_state() {
        let input = SearchInput::new();

        for state in [
            LookupState::Idle,
            LookupState::Loading,
            LookupState::Error("Word not found in the dictionary".into()),
        ] {
            for layout in [Layout::List, Layout::Book] {
                let page = render_page(&input, &state, layout);
                assert_eq!(page.find_by_tag("input").len(), 1);
                assert_eq!(page.find_by_text("Search").len(), 1);
            }
        }
    }

    #[test]
    fn test_loading_page_text() {
        let mut input = SearchInput::new();
        input.set_value("word");

        let text = render_page(&input, &LookupState::Loading, Layout::List).to_text();
        assert_eq!(text, "[ word ] [Search]\nLoading...");
    }

    #[test]
    fn test_html_document_wraps_page() {
        let input = SearchInput::new();
        let page = render_page(&input, &LookupState::Idle, Layout::List);
        let html = html_document(&page);

        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">"));
        assert!(html.contains(&format!("<style>{STYLE}</style>")));
        assert!(html.contains("<title>Wordbook</title>"));
        assert!(html.contains("placeholder=\"Search for a word\""));
        assert!(html.contains("<button type=\"submit\">Search</button>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
