//! Foundation types shared by every layer.
//!
//! - [`Dialect`] - which annotation convention (NAF or KAF) a document uses
//! - [`IdentifierScheme`] - per-kind tag and identifier attribute names
//!
//! This module has NO dependencies on other kafnaf modules.

mod dialect;
mod scheme;

pub use dialect::Dialect;
pub use scheme::IdentifierScheme;
