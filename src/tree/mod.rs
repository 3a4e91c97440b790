//! Ordered labeled tree backing every annotation document.
//!
//! Nodes live in an arena owned by a [`Document`] and are addressed by
//! [`NodeId`] handles. Handles are plain `Copy` values; all reads and
//! writes go through the owning document.
//!
//! ```text
//! Document
//! ├── nodes: Vec<NodeData>        (arena, never shrinks)
//! │     ├── kind: Element { tag } | Comment | Text
//! │     ├── attributes: IndexMap  (insertion order preserved)
//! │     ├── parent: Option<NodeId>
//! │     └── children: Vec<NodeId>
//! ├── root: NodeId
//! └── revision: u64               (bumped on every mutation)
//! ```

mod document;
mod node;

pub use document::{Document, TreeError};
pub use node::{NodeData, NodeId, NodeKind};
