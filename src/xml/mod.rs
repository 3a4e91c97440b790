//! XML reading and writing for [`Document`](crate::tree::Document).
//!
//! ```text
//! bytes ──read_document──▶ Document ──write_document──▶ bytes
//! ```
//!
//! Both directions stream events through `quick-xml`. Whitespace-only text
//! between elements is dropped on read; comments and character data are
//! kept as nodes, so a surface-form comment in front of a `<term>` survives
//! a round trip.

mod reader;
mod writer;

pub use reader::read_document;
pub use writer::{WriteOptions, write_document};
