use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::trace;

use crate::error::{KafNafError, Result};
use crate::tree::{Document, NodeId};

/// Parse an XML document into a [`Document`].
///
/// Anything before the root element (declaration, doctype, comments) is
/// skipped, as is anything after it.
pub fn read_document(input: &[u8]) -> Result<Document> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut builder = TreeBuilder::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let node = builder.open(e)?;
                builder.stack.push(node);
            }
            Ok(Event::Empty(ref e)) => {
                builder.open(e)?;
            }
            Ok(Event::End(_)) => {
                builder.stack.pop();
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|e| KafNafError::xml(format!("Invalid text: {e}")))?;
                builder.leaf(move |doc| doc.create_text(text.into_owned()))?;
            }
            Ok(Event::CData(ref e)) => {
                let text = std::str::from_utf8(e)
                    .map_err(|e| KafNafError::xml(format!("Invalid CDATA: {e}")))?;
                builder.leaf(|doc| doc.create_text(text))?;
            }
            Ok(Event::Comment(ref e)) => {
                let text = std::str::from_utf8(e)
                    .map_err(|e| KafNafError::xml(format!("Invalid comment: {e}")))?;
                builder.leaf(|doc| doc.create_comment(text))?;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(KafNafError::xml(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    builder
        .doc
        .ok_or_else(|| KafNafError::missing_element("root"))
}

/// Incrementally assembles the tree while events stream in.
#[derive(Default)]
struct TreeBuilder {
    doc: Option<Document>,
    /// Open elements; the last one receives new children.
    stack: Vec<NodeId>,
}

impl TreeBuilder {
    /// Create the element for a start or empty tag and attach it.
    fn open(&mut self, e: &BytesStart<'_>) -> Result<NodeId> {
        let name = e.name();
        let tag = std::str::from_utf8(name.as_ref())
            .map_err(|e| KafNafError::xml(format!("Invalid tag name: {e}")))?;

        let is_root = self.doc.is_none();
        let doc = self.doc.get_or_insert_with(|| Document::new(tag));
        let node = if is_root {
            doc.root()
        } else {
            let parent = self
                .stack
                .last()
                .copied()
                .ok_or_else(|| KafNafError::xml(format!("Second root element <{tag}>")))?;
            let node = doc.create_element(tag);
            doc.append_child(parent, node)?;
            node
        };

        for attr in e.attributes() {
            let attr = attr.map_err(|e| KafNafError::xml(format!("Invalid attribute: {e}")))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| KafNafError::xml(format!("Invalid attribute name: {e}")))?;
            let value = attr
                .unescape_value()
                .map_err(|e| KafNafError::xml(format!("Invalid attribute value: {e}")))?;
            doc.set_attr(node, key, value.into_owned());
        }
        Ok(node)
    }

    /// Attach a comment or text node under the innermost open element.
    fn leaf(&mut self, create: impl FnOnce(&mut Document) -> NodeId) -> Result<()> {
        match (&mut self.doc, self.stack.last().copied()) {
            (Some(doc), Some(parent)) => {
                let node = create(doc);
                doc.append_child(parent, node)?;
            }
            _ => trace!("skipping content outside the root element"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;

    #[test]
    fn test_read_simple_layer() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<NAF xml:lang="en" version="v3">
  <terms>
    <!--run-->
    <term id="t1" lemma="run" pos="V">
      <span><target id="w1"/></span>
    </term>
  </terms>
</NAF>"#;
        let doc = read_document(xml).unwrap();
        let root = doc.root();
        assert_eq!(doc.tag(root), Some("NAF"));
        assert_eq!(doc.attr(root, "xml:lang"), Some("en"));

        let terms = doc.find_child(root, "terms").unwrap();
        let children = doc.children(terms);
        assert_eq!(children.len(), 2);
        assert_eq!(doc.kind(children[0]), Some(&NodeKind::Comment("run".to_string())));
        assert_eq!(doc.attr(children[1], "lemma"), Some("run"));
        assert_eq!(doc.descendants_by_tag(root, "target").len(), 1);
    }

    #[test]
    fn test_read_unescapes_attributes_and_text() {
        let doc = read_document(br#"<NAF><raw a="x &amp; y">1 &lt; 2</raw></NAF>"#).unwrap();
        let raw = doc.find_child(doc.root(), "raw").unwrap();
        assert_eq!(doc.attr(raw, "a"), Some("x & y"));
        assert_eq!(doc.text_content(raw), "1 < 2");
    }

    #[test]
    fn test_read_rejects_empty_input() {
        let err = read_document(b"").unwrap_err();
        assert!(matches!(err, KafNafError::Missing { kind: "element", .. }));
    }

    #[test]
    fn test_read_rejects_malformed_input() {
        assert!(matches!(
            read_document(b"<NAF><terms></NAF>"),
            Err(KafNafError::Xml(_))
        ));
    }

    #[test]
    fn test_read_rejects_second_root() {
        assert!(matches!(read_document(b"<NAF/><KAF/>"), Err(KafNafError::Xml(_))));
    }
}
