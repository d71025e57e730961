//! Minimal in-memory XML tree built from quick-xml events.
//!
//! The dictionary schema only needs element names, text content, and child
//! order, so this keeps a deliberately small node type instead of a full DOM.
//! Text is stored verbatim; whitespace-only nodes between child elements end
//! up on parents whose text the store never reads.

use quick_xml::events::Event;
use quick_xml::Reader;

use super::error::{DictionaryError, Result};

/// One XML element: name, direct text content, and child elements in
/// document order. Attributes are not part of the dictionary schema and
/// are discarded.
#[derive(Debug, Clone)]
pub(crate) struct Element {
    pub name: String,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    fn new(name: String) -> Self {
        Self {
            name,
            text: None,
            children: Vec::new(),
        }
    }

    /// First direct child with the given element name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    fn append_text(&mut self, chunk: &str) {
        if chunk.is_empty() {
            return;
        }
        match self.text {
            Some(ref mut t) => t.push_str(chunk),
            None => self.text = Some(chunk.to_string()),
        }
    }
}

/// Parse an XML document into an element tree.
///
/// Returns a synthetic root whose children are the document's top-level
/// elements. Fails on ill-formed XML (mismatched or unclosed tags,
/// invalid entities).
pub(crate) fn parse(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    // Index 0 is the synthetic document root.
    let mut stack = vec![Element::new(String::new())];

    loop {
        match reader
            .read_event_into(&mut buf)
            .map_err(|e| DictionaryError::Xml(e.to_string()))?
        {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                stack.push(Element::new(name));
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(Element::new(name));
                }
            }
            Event::Text(t) => {
                let text = t
                    .unescape()
                    .map_err(|e| DictionaryError::Xml(e.to_string()))?;
                if let Some(top) = stack.last_mut() {
                    top.append_text(&text);
                }
            }
            Event::CData(t) => {
                let text = String::from_utf8_lossy(&t).into_owned();
                if let Some(top) = stack.last_mut() {
                    top.append_text(&text);
                }
            }
            Event::End(_) => {
                // quick-xml has already checked that the end tag matches.
                if stack.len() > 1 {
                    let done = stack.pop().unwrap_or_else(|| Element::new(String::new()));
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(done);
                    }
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctypes.
            _ => {}
        }
        buf.clear();
    }

    Ok(stack
        .into_iter()
        .next()
        .unwrap_or_else(|| Element::new(String::new())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_elements_with_text() {
        let root = parse("<a><b>hi</b><c/><b>yo</b></a>").unwrap();
        let a = root.child("a").unwrap();
        assert_eq!(a.children.len(), 3);
        assert_eq!(a.children[0].text.as_deref(), Some("hi"));
        assert_eq!(a.children[1].name, "c");
        assert!(a.children[1].text.is_none());
        assert_eq!(a.children[2].text.as_deref(), Some("yo"));
    }

    #[test]
    fn empty_element_has_no_text() {
        let root = parse("<a><b></b></a>").unwrap();
        assert!(root.child("a").unwrap().child("b").unwrap().text.is_none());
    }

    #[test]
    fn unescapes_entities() {
        let root = parse("<a>x &amp; y</a>").unwrap();
        assert_eq!(root.child("a").unwrap().text.as_deref(), Some("x & y"));
    }

    #[test]
    fn leaf_text_is_kept_verbatim() {
        let root = parse("<a><b> spaced </b></a>").unwrap();
        assert_eq!(
            root.child("a").unwrap().child("b").unwrap().text.as_deref(),
            Some(" spaced ")
        );
    }

    #[test]
    fn rejects_mismatched_tags() {
        assert!(parse("<a><b></a></b>").is_err());
    }
}
