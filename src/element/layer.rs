//! Id-indexed collections of sibling entities.

use std::marker::PhantomData;

use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;
use tracing::{debug, trace};

use super::Entity;
use crate::base::Dialect;
use crate::error::{KafNafError, Result};
use crate::tree::{Document, NodeId};

/// Options for [`Layer::remove_children_with`].
#[derive(Debug, Clone, Copy)]
pub struct RemoveOptions {
    /// Also remove the node directly before each removed entity.
    ///
    /// Documents conventionally put a comment carrying the surface form right
    /// before every entity, and that comment goes with it. The preceding
    /// node is removed whatever its kind, including another entity.
    pub remove_preceding_sibling: bool,
}

impl Default for RemoveOptions {
    fn default() -> Self {
        Self {
            remove_preceding_sibling: true,
        }
    }
}

/// A container node whose direct `E`-tagged children are indexed by id.
///
/// ## Index contract
///
/// The index is a cache over the live tree. [`add_child`](Self::add_child),
/// [`remove_children`](Self::remove_children) and the dialect conversions
/// keep it exact. Edits that bypass the layer (appending through the
/// [`Document`] directly, changing an id attribute on a child) are
/// detected through [`Document::revision`]: lookups then validate index
/// hits against the tree and fall back to a scan, and mutations rebuild the
/// index before touching anything. [`iter`](Self::iter) always reads the
/// live children.
///
/// Duplicate ids already present in a document are not rejected; the last
/// one in document order wins the index slot.
#[derive(Debug, Clone)]
pub struct Layer<E: Entity> {
    node: NodeId,
    dialect: Dialect,
    index: FxHashMap<SmolStr, NodeId>,
    /// Document revision the index was last known to match.
    synced_at: u64,
    _kind: PhantomData<E>,
}

impl<E: Entity> Layer<E> {
    /// Wrap `node` and index its current children.
    pub fn new(doc: &Document, node: NodeId, dialect: Dialect) -> Self {
        let mut layer = Self {
            node,
            dialect,
            index: FxHashMap::default(),
            synced_at: 0,
            _kind: PhantomData,
        };
        layer.refresh(doc);
        debug!(
            kind = E::SCHEME.tag,
            %dialect,
            entries = layer.index.len(),
            "indexed layer"
        );
        layer
    }

    /// Create a detached, empty container element with tag `tag`.
    pub fn new_detached(doc: &mut Document, tag: &str, dialect: Dialect) -> Self {
        let node = doc.create_element(tag);
        Self::new(doc, node, dialect)
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn id_attribute(&self) -> &'static str {
        E::SCHEME.id_attribute(self.dialect)
    }

    fn view(&self, node: NodeId) -> E {
        E::from_node(node, self.dialect)
    }

    // ── Index maintenance ───────────────────────────────────────────

    /// Whether the document is unchanged since the index was last synced.
    pub fn is_fresh(&self, doc: &Document) -> bool {
        doc.revision() == self.synced_at
    }

    /// Rebuild the index from the live children.
    pub fn refresh(&mut self, doc: &Document) {
        let attr = self.id_attribute();
        self.index.clear();
        for child in doc.children_by_tag(self.node, E::SCHEME.tag) {
            match doc.attr(child, attr) {
                Some(id) => {
                    self.index.insert(SmolStr::new(id), child);
                }
                None => trace!(kind = E::SCHEME.tag, node = %child, "child without {attr}; not indexed"),
            }
        }
        self.synced_at = doc.revision();
    }

    fn ensure_fresh(&mut self, doc: &Document) {
        if !self.is_fresh(doc) {
            trace!(kind = E::SCHEME.tag, "document changed outside the layer; reindexing");
            self.refresh(doc);
        }
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Views over the matching children, in document order.
    ///
    /// Reads the live tree on every call, not the index.
    pub fn iter<'a>(&'a self, doc: &'a Document) -> impl Iterator<Item = E> + 'a {
        doc.children_by_tag(self.node, E::SCHEME.tag)
            .map(move |n| self.view(n))
    }

    /// Look up a child by id.
    pub fn get_child(&self, doc: &Document, id: &str) -> Option<E> {
        let hit = self.index.get(id).copied();
        if self.is_fresh(doc) {
            return hit.map(|n| self.view(n));
        }

        let attr = self.id_attribute();
        let live = hit
            .filter(|&node| doc.parent(node) == Some(self.node))
            .and_then(|node| E::cast(doc, node, self.dialect))
            .filter(|e| e.id(doc) == Some(id));
        if live.is_some() {
            return live;
        }
        doc.children_by_tag(self.node, E::SCHEME.tag)
            .filter(|n| doc.attr(*n, attr) == Some(id))
            .last()
            .map(|n| self.view(n))
    }

    /// Whether a child with `id` exists.
    pub fn contains(&self, doc: &Document, id: &str) -> bool {
        self.get_child(doc, id).is_some()
    }

    /// Number of distinct ids among the matching children.
    ///
    /// Counts the live children when the index is stale.
    pub fn len(&self, doc: &Document) -> usize {
        if self.is_fresh(doc) {
            return self.index.len();
        }
        let attr = self.id_attribute();
        doc.children_by_tag(self.node, E::SCHEME.tag)
            .filter_map(|n| doc.attr(n, attr))
            .collect::<FxHashSet<_>>()
            .len()
    }

    pub fn is_empty(&self, doc: &Document) -> bool {
        self.len(doc) == 0
    }

    /// Ids of the matching children, in document order.
    pub fn ids(&self, doc: &Document) -> Vec<String> {
        self.iter(doc)
            .filter_map(|e| e.id(doc).map(str::to_string))
            .collect()
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Append `child` as the last child of the container.
    ///
    /// The id is read under the layer's dialect. Fails without touching the
    /// tree when the id is missing, already taken, or the node is already
    /// attached somewhere.
    pub fn add_child(&mut self, doc: &mut Document, child: E) -> Result<()> {
        self.ensure_fresh(doc);

        let attr = self.id_attribute();
        let id = doc
            .attr(child.node(), attr)
            .map(SmolStr::new)
            .ok_or_else(|| KafNafError::missing_attribute(attr))?;
        if self.index.contains_key(&id) {
            return Err(KafNafError::duplicate_id(E::SCHEME.tag, id.as_str()));
        }

        doc.append_child(self.node, child.node())?;
        self.index.insert(id, child.node());
        self.synced_at = doc.revision();
        Ok(())
    }

    /// Remove the children whose ids are in `ids`, together with the node
    /// right before each of them. Unknown ids are ignored.
    ///
    /// Returns how many entities matched.
    pub fn remove_children<I, S>(&mut self, doc: &mut Document, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.remove_children_with(doc, ids, RemoveOptions::default())
    }

    /// [`remove_children`](Self::remove_children) with explicit options.
    pub fn remove_children_with<I, S>(
        &mut self,
        doc: &mut Document,
        ids: I,
        options: RemoveOptions,
    ) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ensure_fresh(doc);

        let wanted: FxHashSet<SmolStr> = ids.into_iter().map(|s| SmolStr::new(s.as_ref())).collect();
        let attr = self.id_attribute();

        // Collect first: a comment can be both an entity's predecessor and
        // something else we were asked to drop.
        let mut doomed: IndexSet<NodeId> = IndexSet::new();
        let mut matched = 0;
        for child in doc.children_by_tag(self.node, E::SCHEME.tag) {
            let Some(id) = doc.attr(child, attr) else {
                continue;
            };
            if !wanted.contains(id) {
                continue;
            }
            matched += 1;
            doomed.insert(child);
            if options.remove_preceding_sibling {
                if let Some(prev) = doc.previous_sibling(child) {
                    doomed.insert(prev);
                }
            }
        }

        for node in &doomed {
            doc.remove_child(self.node, *node);
        }
        self.index.retain(|_, node| !doomed.contains(&*node));
        self.synced_at = doc.revision();

        debug!(
            kind = E::SCHEME.tag,
            matched,
            removed_nodes = doomed.len(),
            "removed children"
        );
        matched
    }

    /// Rename every child's id attribute to its KAF spelling.
    ///
    /// No-op when the layer is already KAF.
    pub fn to_kaf(&mut self, doc: &mut Document) {
        self.convert(doc, Dialect::Kaf);
    }

    /// Rename every child's id attribute to its NAF spelling.
    ///
    /// No-op when the layer is already NAF.
    pub fn to_naf(&mut self, doc: &mut Document) {
        self.convert(doc, Dialect::Naf);
    }

    fn convert(&mut self, doc: &mut Document, target: Dialect) {
        if self.dialect == target {
            return;
        }
        self.ensure_fresh(doc);

        let from = E::SCHEME.id_attribute(self.dialect);
        let to = E::SCHEME.id_attribute(target);
        if E::SCHEME.differs_by_dialect() {
            let children: Vec<NodeId> = doc.children_by_tag(self.node, E::SCHEME.tag).collect();
            for child in children {
                doc.rename_attr(child, from, to);
            }
        }

        // Children skipped under the old dialect may carry the new attribute.
        self.dialect = target;
        self.refresh(doc);
        debug!(kind = E::SCHEME.tag, %target, "converted layer dialect");
    }
}
