//! # kafnaf-base
//!
//! Typed views over NAF/KAF linguistic annotation documents.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! annotation → KafNafDocument: dialect detection, whole-document conversion
//!   ↓
//! layers     → Term, Span, Sentiment, ExternalReference, TermLayer
//!   ↓
//! element    → Entity trait, Layer<E> id index
//!   ↓
//! xml        → quick-xml reader/writer (feature "interchange")
//!   ↓
//! tree       → arena Document, NodeId
//!   ↓
//! base       → Dialect, IdentifierScheme
//! ```
//!
//! ## Example
//!
//! ```
//! use kafnaf::{Dialect, Entity, KafNafDocument, Term};
//!
//! let mut naf = KafNafDocument::new(Dialect::Naf);
//! let mut terms = naf.ensure_term_layer().unwrap();
//!
//! let doc = naf.document_mut();
//! let term = Term::new_detached(doc, Dialect::Naf);
//! term.set_id(doc, "t1");
//! term.set_lemma(doc, "run");
//! terms.add_term(doc, term).unwrap();
//!
//! let found = terms.get_term(naf.document(), "t1").unwrap();
//! assert_eq!(found.lemma(naf.document()), Some("run"));
//! ```

// ============================================================================
// MODULES (dependency order: base → tree → xml → element → layers → annotation)
// ============================================================================

/// Foundation types: Dialect, IdentifierScheme
pub mod base;

/// Arena-backed ordered labeled tree
pub mod tree;

/// XML reading and writing
#[cfg(feature = "interchange")]
pub mod xml;

/// Generic entity views and id-indexed layers
pub mod element;

/// Concrete annotation kinds (terms and their sub-structures)
pub mod layers;

/// Whole-document wrapper
pub mod annotation;

mod error;

pub use annotation::KafNafDocument;
pub use base::{Dialect, IdentifierScheme};
pub use element::{Entity, Layer, RemoveOptions};
pub use error::{KafNafError, Result};
pub use layers::{
    ExternalReference, ExternalReferences, Sentiment, Span, TERM_LAYER_TAG, Target, Term,
    TermLayer,
};
pub use tree::{Document, NodeId, NodeKind, TreeError};
