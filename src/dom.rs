//! DOM Operations Adapter
//!
//! Thin read-only layer over the `dom_query` crate. The checks only ever
//! query the parsed tree: first-match and all-match selector lookups, text
//! extraction and sibling navigation.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril, the return type of `text_content`
pub use tendril::StrTendril;

use crate::patterns::WHITESPACE_NORMALIZE;

// === Parsing ===

/// Parse HTML string into document.
///
/// Parsing is best-effort: malformed markup is repaired by the HTML5
/// tree builder and never fails.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Heading level for `h1`..`h6`, `None` for anything else.
#[must_use]
pub fn heading_level(sel: &Selection) -> Option<u8> {
    let tag = tag_name(sel)?;
    let level = tag.strip_prefix('h')?.parse::<u8>().ok()?;
    (1..=6).contains(&level).then_some(level)
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content of the subtree with surrounding whitespace removed.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    text_content(sel).trim().to_string()
}

/// Text content with every whitespace run collapsed to one space.
#[must_use]
pub fn normalized_text(sel: &Selection) -> String {
    normalize_whitespace(&text_content(sel))
}

/// Collapse whitespace runs to single spaces and trim the ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

// === Tree Navigation ===

/// Get next element sibling (skipping text nodes)
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// First following element sibling with the given tag name.
#[must_use]
pub fn next_sibling_with_tag<'a>(sel: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    let mut current = next_element_sibling(sel)?;
    loop {
        if tag_name(&current).is_some_and(|name| name.eq_ignore_ascii_case(tag)) {
            return Some(current);
        }
        current = next_element_sibling(&current)?;
    }
}

// === Querying ===

/// Query the first element matching a CSS selector, if any.
#[must_use]
pub fn query_selector<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

/// Query all elements matching a CSS selector, in document order.
#[must_use]
pub fn query_selector_all<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Whether any element matches the selector.
#[inline]
#[must_use]
pub fn exists(doc: &Document, selector: &str) -> bool {
    doc.select(selector).exists()
}

/// Normalized text of `<body>`, or of the whole document if there is none.
#[must_use]
pub fn body_text(doc: &Document) -> String {
    let body = doc.select("body");
    if body.exists() {
        normalized_text(&body)
    } else {
        normalized_text(&doc.select("html"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_query() {
        let doc = parse(r#"<div id="main" class="container"><p>one</p><p>two</p></div>"#);

        let div = query_selector(&doc, "div").expect("div present");
        assert_eq!(div.attr("id").map(|id| id.to_string()), Some("main".to_string()));
        assert_eq!(query_selector_all(&doc, "p").len(), 2);
        assert!(query_selector(&doc, "article").is_none());
    }

    #[test]
    fn test_heading_level() {
        let doc = parse("<h1>a</h1><h3>b</h3><p>c</p>");

        let levels: Vec<Option<u8>> = query_selector_all(&doc, "h1, h3, p")
            .iter()
            .map(heading_level)
            .collect();
        assert_eq!(levels, vec![Some(1), Some(3), None]);
    }

    #[test]
    fn test_next_element_sibling_skips_text() {
        let doc = parse("<div><h2>Title</h2>\n  text  \n<p>Body</p></div>");
        let h2 = query_selector(&doc, "h2").expect("h2 present");

        let next = next_element_sibling(&h2).expect("sibling present");
        assert_eq!(tag_name(&next).as_deref(), Some("p"));
        assert_eq!(trimmed_text(&next), "Body");
    }

    #[test]
    fn test_next_sibling_with_tag() {
        let doc = parse("<body><h1>T</h1><div>x</div><ul><li>y</li></ul><p>found</p></body>");
        let h1 = query_selector(&doc, "h1").expect("h1 present");

        let p = next_sibling_with_tag(&h1, "p").expect("p present");
        assert_eq!(trimmed_text(&p), "found");
        assert!(next_sibling_with_tag(&h1, "table").is_none());
    }

    #[test]
    fn test_body_text_normalizes_whitespace() {
        let doc = parse("<body><h1>  Hello </h1>\n\n<p>big\t world</p></body>");
        assert_eq!(body_text(&doc), "Hello big world");
    }

    #[test]
    fn test_empty_document_queries_are_empty() {
        let doc = parse("");
        assert!(query_selector_all(&doc, "p").is_empty());
        assert!(!exists(&doc, "h1"));
        assert_eq!(body_text(&doc), "");
    }
}
