//! Whole-document entry point.
//!
//! [`KafNafDocument`] owns the [`Document`] tree, knows which dialect it is
//! written in, and hands out layers over it.
//!
//! ```ignore
//! use kafnaf::KafNafDocument;
//!
//! let mut naf = KafNafDocument::from_bytes(&std::fs::read("doc.naf")?)?;
//! let terms = naf.term_layer().expect("document has terms");
//! let lemma = terms
//!     .get_term(naf.document(), "t1")
//!     .and_then(|t| t.lemma(naf.document()));
//! naf.to_kaf();
//! ```

use tracing::debug;

use crate::base::Dialect;
use crate::error::{KafNafError, Result};
use crate::layers::{TERM_LAYER_TAG, TermLayer};
use crate::tree::Document;

/// A NAF or KAF annotation document.
#[derive(Clone, Debug)]
pub struct KafNafDocument {
    doc: Document,
    dialect: Dialect,
}

impl KafNafDocument {
    /// Create an empty document with just the root element.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            doc: Document::new(dialect.root_tag()),
            dialect,
        }
    }

    /// Wrap an existing tree; the dialect comes from the root tag.
    pub fn from_document(doc: Document) -> Result<Self> {
        let tag = doc.tag(doc.root()).unwrap_or_default();
        let dialect = Dialect::from_root_tag(tag)
            .ok_or_else(|| KafNafError::Unsupported(format!("root element <{tag}>")))?;
        Ok(Self { doc, dialect })
    }

    /// Parse XML bytes.
    #[cfg(feature = "interchange")]
    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        Self::from_document(crate::xml::read_document(input)?)
    }

    /// Serialize to XML bytes.
    #[cfg(feature = "interchange")]
    pub fn to_bytes(&self, options: &crate::xml::WriteOptions) -> Result<Vec<u8>> {
        crate::xml::write_document(&self.doc, options)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// The `<terms>` layer, if the document has one.
    pub fn term_layer(&self) -> Option<TermLayer> {
        self.doc
            .find_child(self.doc.root(), TERM_LAYER_TAG)
            .map(|node| TermLayer::new(&self.doc, node, self.dialect))
    }

    /// The `<terms>` layer, appended to the root when missing.
    pub fn ensure_term_layer(&mut self) -> Result<TermLayer> {
        if let Some(layer) = self.term_layer() {
            return Ok(layer);
        }
        let layer = TermLayer::new_detached(&mut self.doc, TERM_LAYER_TAG, self.dialect);
        self.doc.append_child(self.doc.root(), layer.node())?;
        Ok(layer)
    }

    /// Convert the whole document to KAF. No-op if it already is.
    pub fn to_kaf(&mut self) {
        self.convert(Dialect::Kaf);
    }

    /// Convert the whole document to NAF. No-op if it already is.
    pub fn to_naf(&mut self) {
        self.convert(Dialect::Naf);
    }

    fn convert(&mut self, target: Dialect) {
        if self.dialect == target {
            return;
        }
        if let Some(mut terms) = self.term_layer() {
            match target {
                Dialect::Kaf => terms.to_kaf(&mut self.doc),
                Dialect::Naf => terms.to_naf(&mut self.doc),
            }
        }
        let root = self.doc.root();
        self.doc.set_tag(root, target.root_tag());
        self.dialect = target;
        debug!(%target, "converted document");
    }
}

impl Default for KafNafDocument {
    fn default() -> Self {
        Self::new(Dialect::default())
    }
}
