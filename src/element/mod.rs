//! Generic entity views and id-indexed layers.
//!
//! Every concrete annotation kind (term, span target, ...) is an
//! [`Entity`]: a `Copy` handle over one tree node plus the dialect it is
//! read under. The per-kind tag and identifier attribute names live in a
//! single [`IdentifierScheme`](crate::base::IdentifierScheme) constant, so
//! the dialect-aware id logic is written once, in the trait's provided
//! methods.
//!
//! A [`Layer`] wraps a container node and keeps an id → node index over
//! its matching children.
//!
//! ```text
//! <terms>                 Layer<Term>   index: { "t1" → #4, "t2" → #6 }
//!   <!--run-->
//!   <term id="t1"/>       Term(#4, Naf)
//!   <!--fast-->
//!   <term id="t2"/>       Term(#6, Naf)
//! </terms>
//! ```

mod entity;
mod layer;
pub(crate) mod macros;

pub use entity::Entity;
pub use layer::{Layer, RemoveOptions};
