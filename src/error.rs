//! Error types for document operations.

use thiserror::Error;

use crate::tree::TreeError;

/// Errors that can occur while reading, writing or editing a document.
///
/// Absent data (a missing term, a term without a span) is never an error;
/// lookups return `Option` instead.
#[derive(Debug, Error)]
pub enum KafNafError {
    /// An entity with this identifier already exists in the layer.
    #[error("{kind} with id {id} already exists")]
    DuplicateId { kind: &'static str, id: String },

    /// Structural tree violation.
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    /// XML parsing or serialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Missing required element or attribute.
    #[error("Missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },

    /// Unsupported feature or format variant.
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl KafNafError {
    /// Create a duplicate identifier error.
    pub fn duplicate_id(kind: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind,
            id: id.into(),
        }
    }

    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a missing element error.
    pub fn missing_element(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "element",
            name: name.into(),
        }
    }

    /// Create a missing attribute error.
    pub fn missing_attribute(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "attribute",
            name: name.into(),
        }
    }
}

pub type Result<T, E = KafNafError> = std::result::Result<T, E>;
