//! Node handles and per-node storage.

use indexmap::IndexMap;
use smol_str::SmolStr;

/// Handle to a node inside a [`Document`](super::Document).
///
/// A `NodeId` is only meaningful for the document that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position in the owning arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A tagged element, e.g. `<term>`.
    Element { tag: SmolStr },
    /// A `<!-- ... -->` comment.
    Comment(String),
    /// Character data.
    Text(String),
}

impl NodeKind {
    pub fn is_element(&self) -> bool {
        matches!(self, NodeKind::Element { .. })
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, NodeKind::Comment(_))
    }
}

/// Storage for a single arena slot.
#[derive(Clone, Debug)]
pub struct NodeData {
    pub kind: NodeKind,
    /// Only elements carry attributes; other kinds keep this empty.
    pub attributes: IndexMap<SmolStr, String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl NodeData {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: IndexMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// The element tag, or `None` for comments and text.
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag } => Some(tag.as_str()),
            _ => None,
        }
    }
}
