//! `<span>` and its `<target>` children.

use crate::base::Dialect;
use crate::element::Entity;
use crate::element::macros::entity;
use crate::error::Result;
use crate::tree::Document;

entity! {
    /// An ordered sequence of token references.
    Span, "span", "id", "id"
}

entity! {
    /// One `<target id="w1"/>` inside a span.
    Target, "target", "id", "id"
}

impl Span {
    /// Build a detached span holding one target per id, in order.
    pub fn create_from_ids<I, S>(doc: &mut Document, dialect: Dialect, ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let span = Self::new_detached(doc, dialect);
        for id in ids {
            span.add_target_id(doc, id.as_ref())?;
        }
        Ok(span)
    }

    /// Append a target referencing `id`.
    pub fn add_target_id(&self, doc: &mut Document, id: &str) -> Result<Target> {
        let target = Target::new_detached(doc, self.dialect);
        target.set_id(doc, id);
        doc.append_child(self.node, target.node())?;
        Ok(target)
    }

    pub fn targets(&self, doc: &Document) -> Vec<Target> {
        doc.children_by_tag(self.node, Target::SCHEME.tag)
            .map(|n| Target::from_node(n, self.dialect))
            .collect()
    }

    /// Referenced token ids, in order. Targets without an id are skipped.
    pub fn ids(&self, doc: &Document) -> Vec<String> {
        self.targets(doc)
            .into_iter()
            .filter_map(|t| t.id(doc).map(str::to_string))
            .collect()
    }

    pub fn len(&self, doc: &Document) -> usize {
        doc.children_by_tag(self.node, Target::SCHEME.tag).count()
    }

    pub fn is_empty(&self, doc: &Document) -> bool {
        self.len(doc) == 0
    }
}

impl Target {
    /// Whether this target is marked as the span's head (`head="yes"`).
    pub fn is_head(&self, doc: &Document) -> bool {
        doc.attr(self.node, "head") == Some("yes")
    }

    pub fn set_head(&self, doc: &mut Document, head: bool) {
        if head {
            doc.set_attr(self.node, "head", "yes");
        } else {
            doc.remove_attr(self.node, "head");
        }
    }
}
