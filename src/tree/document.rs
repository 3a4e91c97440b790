//! Arena-backed document.

use smol_str::SmolStr;
use thiserror::Error;

use super::node::{NodeData, NodeId, NodeKind};

/// Structural errors raised by [`Document::append_child`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The node already has a parent; detach it first.
    #[error("node {node} is already attached to {parent}")]
    AlreadyAttached { node: NodeId, parent: NodeId },

    /// Appending would make a node its own ancestor.
    #[error("appending {child} under {parent} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },

    /// The handle does not belong to this document.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
}

/// An ordered labeled tree with a single root element.
///
/// Nodes are never freed: removing a child detaches it, and the detached
/// subtree stays addressable until the document is dropped. This keeps
/// every `NodeId` handed out valid for the lifetime of the document.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: NodeId,
    revision: u64,
}

impl Document {
    /// Create a document whose root element has the given tag.
    pub fn new(root_tag: &str) -> Self {
        let root = NodeData::new(NodeKind::Element {
            tag: SmolStr::new(root_tag),
        });
        Self {
            nodes: vec![root],
            root: NodeId::new(0),
            revision: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Mutation counter. Every structural or attribute change increments it.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.index())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id.index())
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    // ── Creation ────────────────────────────────────────────────────

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(NodeData::new(kind));
        self.touch();
        id
    }

    /// Create a detached element. Insert it with [`append_child`](Self::append_child).
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(NodeKind::Element {
            tag: SmolStr::new(tag),
        })
    }

    /// Create a detached comment node.
    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeKind::Comment(text.into()))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeKind::Text(text.into()))
    }

    // ── Labels and attributes ───────────────────────────────────────

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.get(id).map(|n| &n.kind)
    }

    /// Element tag; `None` for comments, text and unknown handles.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| n.tag())
    }

    /// Rename an element. Non-elements are left untouched.
    pub fn set_tag(&mut self, id: NodeId, tag: &str) {
        if let Some(node) = self.get_mut(id) {
            if let NodeKind::Element { tag: current } = &mut node.kind {
                *current = SmolStr::new(tag);
                self.touch();
            }
        }
    }

    pub fn attr(&self, id: NodeId, key: &str) -> Option<&str> {
        self.get(id)
            .and_then(|n| n.attributes.get(key))
            .map(String::as_str)
    }

    /// Set an attribute, overwriting any previous value in place.
    ///
    /// Only elements carry attributes; the call is ignored for other kinds.
    pub fn set_attr(&mut self, id: NodeId, key: &str, value: impl Into<String>) {
        if let Some(node) = self.get_mut(id) {
            if node.kind.is_element() {
                node.attributes.insert(SmolStr::new(key), value.into());
                self.touch();
            }
        }
    }

    /// Delete an attribute, returning its previous value.
    pub fn remove_attr(&mut self, id: NodeId, key: &str) -> Option<String> {
        let removed = self
            .get_mut(id)
            .and_then(|n| n.attributes.shift_remove(key));
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    /// Rename attribute `from` to `to`, keeping its position and value.
    ///
    /// Returns `false` (and changes nothing) when `from` is absent. An
    /// existing `to` attribute is replaced.
    pub fn rename_attr(&mut self, id: NodeId, from: &str, to: &str) -> bool {
        let Some(node) = self.get_mut(id) else {
            return false;
        };
        let Some((index, _, value)) = node.attributes.shift_remove_full(from) else {
            return false;
        };
        node.attributes.shift_remove(to);
        let index = index.min(node.attributes.len());
        node.attributes.shift_insert(index, SmolStr::new(to), value);
        self.touch();
        true
    }

    /// Attributes in document order.
    pub fn attrs(&self, id: NodeId) -> impl Iterator<Item = (&str, &str)> {
        self.get(id)
            .into_iter()
            .flat_map(|n| n.attributes.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Text of a comment or text node; concatenated text children for elements.
    pub fn text_content(&self, id: NodeId) -> String {
        match self.kind(id) {
            Some(NodeKind::Comment(text)) | Some(NodeKind::Text(text)) => text.clone(),
            Some(NodeKind::Element { .. }) => self
                .children(id)
                .iter()
                .filter_map(|c| match self.kind(*c) {
                    Some(NodeKind::Text(text)) => Some(text.as_str()),
                    _ => None,
                })
                .collect(),
            None => String::new(),
        }
    }

    // ── Navigation ──────────────────────────────────────────────────

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// The sibling immediately before `id`, whatever its kind.
    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|c| *c == id)?;
        pos.checked_sub(1).map(|p| siblings[p])
    }

    /// First direct child element with the given tag.
    pub fn find_child(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|c| self.tag(*c) == Some(tag))
    }

    /// All direct child elements with the given tag, in document order.
    pub fn children_by_tag<'a>(
        &'a self,
        id: NodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(id)
            .iter()
            .copied()
            .filter(move |c| self.tag(*c) == Some(tag))
    }

    /// All descendant elements with the given tag, in document order.
    pub fn descendants_by_tag(&self, id: NodeId, tag: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            if self.tag(next) == Some(tag) {
                found.push(next);
            }
            stack.extend(self.children(next).iter().rev().copied());
        }
        found
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, mut of: NodeId) -> bool {
        loop {
            if candidate == of {
                return true;
            }
            match self.parent(of) {
                Some(p) => of = p,
                None => return false,
            }
        }
    }

    // ── Structure ───────────────────────────────────────────────────

    /// Append a detached node as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let Some(child_node) = self.get(child) else {
            return Err(TreeError::UnknownNode(child));
        };
        if self.get(parent).is_none() {
            return Err(TreeError::UnknownNode(parent));
        }
        if let Some(current) = child_node.parent {
            return Err(TreeError::AlreadyAttached {
                node: child,
                parent: current,
            });
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::Cycle { parent, child });
        }

        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
        self.touch();
        Ok(())
    }

    /// Detach `child` from `parent`. Returns `false` if it was not a child.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let Some(parent_node) = self.get_mut(parent) else {
            return false;
        };
        let Some(pos) = parent_node.children.iter().position(|c| *c == child) else {
            return false;
        };
        parent_node.children.remove(pos);
        self.nodes[child.index()].parent = None;
        self.touch();
        true
    }
}
