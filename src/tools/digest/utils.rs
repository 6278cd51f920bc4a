use scraper::node::Element;
use scraper::{ElementRef, Node};

const BOILERPLATE_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "svg", "nav", "footer", "aside",
];

const BOILERPLATE_CLASSES: &[&str] = &["advertisement", "ads", "sidebar"];

// Elements whose edges separate words when rendered.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption", "figure",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "ol", "p", "pre",
    "section", "table", "td", "th", "tr", "ul",
];

pub(super) fn is_boilerplate(element: &Element) -> bool {
    BOILERPLATE_TAGS.contains(&element.name())
        || element
            .classes()
            .any(|class| BOILERPLATE_CLASSES.contains(&class))
}

pub(super) fn inside_boilerplate(element: ElementRef<'_>) -> bool {
    is_boilerplate(element.value())
        || element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|ancestor| is_boilerplate(ancestor.value()))
}

/// Text under `root`, skipping boilerplate subtrees.
pub(super) fn visible_text(root: ElementRef<'_>) -> String {
    let mut out = String::new();
    push_visible(root, &mut out);
    out
}

fn push_visible(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if !is_boilerplate(el) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                let block = BLOCK_TAGS.contains(&el.name());
                if block {
                    out.push(' ');
                }
                push_visible(child, out);
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}
