//! HTML extractor using the `scraper` crate.
//!
//! Walks the body tree once, collecting every text node in document order
//! and starting a new paragraph at each block-level element boundary.
//! Script/style subtrees and named boilerplate regions such as Project
//! Gutenberg's `pg-header` and `pg-footer` sections are skipped whole.

use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};

use crate::document::DocumentFormat;
use crate::error::BookResult;
use crate::extract::TextExtractor;

/// Element ids whose entire subtree is boilerplate, not book content.
const BOILERPLATE_IDS: &[&str] = &["pg-header", "pg-footer"];

/// Elements whose text is never book content.
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "template", "head", "title"];

/// Elements that open and close a paragraph around their content.
const BLOCK_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "li", "blockquote", "pre", "div", "section",
    "article", "aside", "header", "footer", "figure", "figcaption", "ul", "ol", "table", "tr",
    "br", "hr",
];

/// HTML document extractor backed by `scraper` (servo's html5ever).
pub struct HtmlExtractor;

impl TextExtractor for HtmlExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Html
    }

    fn extract(&self, data: &[u8]) -> BookResult<String> {
        let text = String::from_utf8_lossy(data);
        let document = Html::parse_document(&text);

        // parse_document always synthesizes a body element.
        let body_selector = Selector::parse("body").expect("static selector must parse");

        let mut paragraphs: Vec<String> = Vec::new();
        let mut current = String::new();
        for body in document.select(&body_selector) {
            collect(*body, &mut paragraphs, &mut current);
        }
        flush(&mut paragraphs, &mut current);

        Ok(paragraphs.join("\n\n"))
    }
}

/// Collect the text under `node` into paragraphs, visiting each text node
/// exactly once.
fn collect(node: NodeRef<'_, Node>, paragraphs: &mut Vec<String>, current: &mut String) {
    match node.value() {
        Node::Text(text) => current.push_str(&text),
        Node::Element(el) => {
            let tag = el.name();
            if SKIP_TAGS.contains(&tag)
                || el.attr("id").is_some_and(|id| BOILERPLATE_IDS.contains(&id))
            {
                return;
            }
            let block = BLOCK_TAGS.contains(&tag);
            if block {
                flush(paragraphs, current);
            }
            for child in node.children() {
                collect(child, paragraphs, current);
            }
            if block {
                flush(paragraphs, current);
            }
        }
        // Comments, doctypes, and processing instructions carry no text;
        // fragments and the document root only forward to their children.
        _ => {
            for child in node.children() {
                collect(child, paragraphs, current);
            }
        }
    }
}

/// Close the in-progress paragraph, collapsing its internal whitespace so
/// the double-newline separator stays unambiguous downstream.
fn flush(paragraphs: &mut Vec<String>, current: &mut String) {
    let collapsed = current.split_whitespace().collect::<Vec<_>>().join(" ");
    if !collapsed.is_empty() {
        paragraphs.push(collapsed);
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> String {
        HtmlExtractor.extract(html.as_bytes()).unwrap()
    }

    #[test]
    fn extracts_body_text_in_order() {
        let html = r#"
        <html>
        <head><title>Test Book</title></head>
        <body>
            <h1>Chapter One</h1>
            <p>First paragraph.</p>
            <p>Second paragraph.</p>
        </body>
        </html>"#;

        let text = extract(html);
        let paragraphs: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(paragraphs, vec!["Chapter One", "First paragraph.", "Second paragraph."]);
    }

    #[test]
    fn nested_block_text_appears_once() {
        let html = "<body><blockquote><p>Once upon a time.</p></blockquote></body>";
        assert_eq!(extract(html), "Once upon a time.");

        let html = "<body><ul><li>First item.</li><li>Second item.</li></ul></body>";
        assert_eq!(extract(html), "First item.\n\nSecond item.");
    }

    #[test]
    fn keeps_text_outside_content_tags() {
        let html = "<body><div>Lost chapter text.</div></body>";
        assert_eq!(extract(html), "Lost chapter text.");

        let html = "<body>Bare body text.<p>A paragraph.</p></body>";
        assert_eq!(extract(html), "Bare body text.\n\nA paragraph.");
    }

    #[test]
    fn inline_markup_stays_in_its_paragraph() {
        let html = "<body><p>An <em>emphatic</em> and <b>bold</b> claim.</p></body>";
        assert_eq!(extract(html), "An emphatic and bold claim.");
    }

    #[test]
    fn skips_script_and_style() {
        let html = r#"
        <body>
            <script>var tracking = true;</script>
            <style>p { color: red; }</style>
            <p>Visible text.</p>
        </body>"#;

        let text = extract(html);
        assert_eq!(text, "Visible text.");
    }

    #[test]
    fn skips_comments() {
        let html = "<body><p>Kept.</p><!-- dropped --></body>";
        assert_eq!(extract(html), "Kept.");
    }

    #[test]
    fn skips_boilerplate_regions() {
        let html = r#"
        <body>
            <section id="pg-header"><p>The Project Gutenberg eBook of ...</p></section>
            <p>The story itself.</p>
            <section id="pg-footer"><p>END OF THE PROJECT GUTENBERG EBOOK</p></section>
        </body>"#;

        let text = extract(html);
        assert_eq!(text, "The story itself.");
    }

    #[test]
    fn empty_body_yields_empty_string() {
        assert_eq!(extract("<body></body>"), "");
    }
}
