//! Minimal element tree the views render into.
//!
//! A [`Node`] can be written out as HTML or as plain text for a terminal, and
//! queried by tag or by text the way a DOM would be.

use maud::Render;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// Start building an element
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, class: &'static str) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated text of this element's direct text children
    pub fn own_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    fn is_void(&self) -> bool {
        matches!(self.tag, "input" | "source" | "meta" | "br")
    }

    /// Contents are written verbatim, never entity-escaped
    fn is_raw_text(&self) -> bool {
        matches!(self.tag, "style" | "script")
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl Node {
    /// All text below this node, in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk_text(&mut out);
        out
    }

    fn walk_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.walk_text(out);
                }
            }
        }
    }

    /// Every element (including self) matching `pred`, depth first
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(&pred, &mut found);
        found
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if pred(element) {
                found.push(element);
            }
            for child in &element.children {
                child.collect(pred, found);
            }
        }
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(|element| element.tag == tag)
    }

    /// Elements whose own text contains `needle`
    pub fn find_by_text(&self, needle: &str) -> Vec<&Element> {
        self.find_all(|element| element.own_text().contains(needle))
    }

    pub fn to_html(&self) -> String {
        self.render().into_string()
    }

    /// Plain text rendering for a terminal
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);

        let mut lines: Vec<&str> = Vec::new();
        for line in out.lines().map(str::trim_end) {
            if line.is_empty() && lines.last().is_none_or(|last| last.is_empty()) {
                continue;
            }
            lines.push(line);
        }
        while lines.last().is_some_and(|last| last.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }

    fn write_text(&self, out: &mut String) {
        let element = match self {
            Node::Text(text) => {
                out.push_str(text);
                return;
            }
            Node::Element(element) => element,
        };

        match element.tag {
            "head" | "style" | "script" | "source" => {}
            "audio" => {
                out.push_str("[audio] ");
                out.push_str(element.attr_value("src").unwrap_or_default());
            }
            "a" => {
                let text = self.text_content();
                out.push_str(&text);
                if let Some(href) = element.attr_value("href")
                    && href != text
                {
                    out.push_str(&format!(" <{href}>"));
                }
            }
            "input" => {
                let shown = element
                    .attr_value("value")
                    .filter(|value| !value.is_empty())
                    .or_else(|| element.attr_value("placeholder"))
                    .unwrap_or_default();
                out.push_str(&format!("[ {shown} ] "));
            }
            "button" => {
                out.push_str(&format!("[{}]", self.text_content()));
            }
            tag => {
                let block = is_block(tag);
                if block {
                    start_line(out);
                }
                // headwords open a new paragraph
                if matches!(tag, "h1" | "h2" | "h3") && !out.is_empty() {
                    out.push('\n');
                }
                for child in &element.children {
                    child.write_text(out);
                }
                if block {
                    start_line(out);
                }
            }
        }
    }
}

impl Render for Node {
    fn render_to(&self, buffer: &mut String) {
        match self {
            Node::Text(text) => text.as_str().render_to(buffer),
            Node::Element(element) => element.render_to(buffer),
        }
    }
}

impl Render for Element {
    fn render_to(&self, buffer: &mut String) {
        buffer.push('<');
        buffer.push_str(self.tag);
        for (name, value) in &self.attrs {
            buffer.push(' ');
            buffer.push_str(name);
            buffer.push_str("=\"");
            value.as_str().render_to(buffer);
            buffer.push('"');
        }
        buffer.push('>');

        if self.is_void() {
            return;
        }

        for child in &self.children {
            match child {
                Node::Text(text) if self.is_raw_text() => buffer.push_str(text),
                child => child.render_to(buffer),
            }
        }
        buffer.push_str("</");
        buffer.push_str(self.tag);
        buffer.push('>');
    }
}

fn start_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn is_block(tag: &str) -> bool {
    matches!(
        tag,
        "html" | "body" | "main" | "section" | "div" | "form" | "p" | "h1" | "h2" | "h3" | "h4"
    )
}
