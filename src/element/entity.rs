//! The [`Entity`] trait: dialect-aware identifier access over one node.

use crate::base::{Dialect, IdentifierScheme};
use crate::tree::{Document, NodeId};

/// A typed view over a single element node.
///
/// Implementors only provide the naming table and the handle plumbing;
/// identifier and attribute access come from the provided methods. Use the
/// `entity!` macro to declare a kind.
///
/// Views do not own their node. They hold a [`NodeId`] into a
/// [`Document`] that every accessor takes explicitly, so a view stays
/// valid for as long as the document does.
pub trait Entity: Copy {
    /// Tag and identifier attribute names for this kind.
    const SCHEME: IdentifierScheme;

    /// Wrap an existing node. The tag is not checked.
    fn from_node(node: NodeId, dialect: Dialect) -> Self;

    fn node(&self) -> NodeId;

    fn dialect(&self) -> Dialect;

    /// Create a fresh, detached node with this kind's tag.
    ///
    /// The caller inserts it into the tree, usually through
    /// [`Layer::add_child`](super::Layer::add_child).
    fn new_detached(doc: &mut Document, dialect: Dialect) -> Self {
        let node = doc.create_element(Self::SCHEME.tag);
        Self::from_node(node, dialect)
    }

    /// Wrap `node` only if it carries this kind's tag.
    fn cast(doc: &Document, node: NodeId, dialect: Dialect) -> Option<Self> {
        (doc.tag(node) == Some(Self::SCHEME.tag)).then(|| Self::from_node(node, dialect))
    }

    /// Name of the identifier attribute under this view's dialect.
    fn id_attribute(&self) -> &'static str {
        Self::SCHEME.id_attribute(self.dialect())
    }

    /// The identifier, or `None` when the node lacks the attribute.
    fn id<'d>(&self, doc: &'d Document) -> Option<&'d str> {
        doc.attr(self.node(), self.id_attribute())
    }

    /// Set the identifier, overwriting any previous value.
    fn set_id(&self, doc: &mut Document, id: &str) {
        doc.set_attr(self.node(), self.id_attribute(), id);
    }

    /// Any other attribute of the node.
    fn attribute<'d>(&self, doc: &'d Document, name: &str) -> Option<&'d str> {
        doc.attr(self.node(), name)
    }

    fn set_attribute(&self, doc: &mut Document, name: &str, value: &str) {
        doc.set_attr(self.node(), name, value);
    }
}
