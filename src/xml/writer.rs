use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{KafNafError, Result};
use crate::tree::{Document, NodeId, NodeKind};

/// Serialization options.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Spaces per indentation level; `None` writes everything on one line.
    pub indent: Option<usize>,
    /// Emit the `<?xml ...?>` declaration.
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            declaration: true,
        }
    }
}

impl WriteOptions {
    /// Single-line output without declaration.
    pub fn compact() -> Self {
        Self {
            indent: None,
            declaration: false,
        }
    }
}

/// Serialize the attached part of `doc` (the root and its descendants).
pub fn write_document(doc: &Document, options: &WriteOptions) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    let mut writer = match options.indent {
        Some(width) => Writer::new_with_indent(&mut buffer, b' ', width),
        None => Writer::new(&mut buffer),
    };

    if options.declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(|e| KafNafError::xml(format!("Write error: {e}")))?;
    }
    write_node(&mut writer, doc, doc.root())?;

    let mut output = buffer.into_inner();
    if options.indent.is_some() {
        output.push(b'\n');
    }
    Ok(output)
}

fn write_node<W: std::io::Write>(writer: &mut Writer<W>, doc: &Document, node: NodeId) -> Result<()> {
    let event = match doc.kind(node) {
        Some(NodeKind::Element { tag }) => {
            let mut start = BytesStart::new(tag.as_str());
            for (key, value) in doc.attrs(node) {
                start.push_attribute((key, value));
            }

            let children = doc.children(node);
            if children.is_empty() {
                Event::Empty(start)
            } else {
                writer
                    .write_event(Event::Start(start))
                    .map_err(|e| KafNafError::xml(format!("Write error: {e}")))?;
                for child in children {
                    write_node(writer, doc, *child)?;
                }
                Event::End(BytesEnd::new(tag.as_str()))
            }
        }
        Some(NodeKind::Comment(text)) => Event::Comment(BytesText::from_escaped(text.as_str())),
        Some(NodeKind::Text(text)) => Event::Text(BytesText::new(text)),
        None => return Ok(()),
    };

    writer
        .write_event(event)
        .map_err(|e| KafNafError::xml(format!("Write error: {e}")))?;
    Ok(())
}
