//! Concrete annotation kinds.
//!
//! Each kind is declared with `entity!` and composes the generic
//! [`Entity`](crate::element::Entity) accessor; the term layer is
//! [`Layer<Term>`](crate::element::Layer) with a few renamed helpers.

mod external_references;
mod sentiment;
mod span;
mod term;

pub use external_references::{ExternalReference, ExternalReferences};
pub use sentiment::Sentiment;
pub use span::{Span, Target};
pub use term::{TERM_LAYER_TAG, Term, TermLayer};
