//! `<externalReferences>` wrappers and their `<externalRef>` entries.

use crate::element::Entity;
use crate::element::macros::{attribute_accessors, entity};
use crate::error::Result;
use crate::tree::Document;

entity! {
    /// Grouping node for a term's external references.
    ExternalReferences, "externalReferences", "id", "id"
}

entity! {
    /// A link from an annotation to an external resource (WordNet synset,
    /// DBpedia entry, ...). References can nest.
    ExternalReference, "externalRef", "id", "id"
}

impl ExternalReferences {
    /// Append a detached reference.
    pub fn add_external_reference(&self, doc: &mut Document, reference: ExternalReference) -> Result<()> {
        doc.append_child(self.node, reference.node())?;
        Ok(())
    }

    pub fn iter<'a>(&'a self, doc: &'a Document) -> impl Iterator<Item = ExternalReference> + 'a {
        doc.children_by_tag(self.node, ExternalReference::SCHEME.tag)
            .map(move |n| ExternalReference::from_node(n, self.dialect))
    }
}

impl ExternalReference {
    attribute_accessors! {
        resource, set_resource => "resource";
        reference, set_reference => "reference";
        reftype, set_reftype => "reftype";
        status, set_status => "status";
        source, set_source => "source";
        confidence, set_confidence => "confidence";
        timestamp, set_timestamp => "timestamp";
    }

    /// Nest another reference under this one.
    pub fn add_external_reference(&self, doc: &mut Document, reference: ExternalReference) -> Result<()> {
        doc.append_child(self.node, reference.node())?;
        Ok(())
    }

    /// Directly nested references.
    pub fn external_references(&self, doc: &Document) -> Vec<ExternalReference> {
        doc.children_by_tag(self.node, Self::SCHEME.tag)
            .map(|n| Self::from_node(n, self.dialect))
            .collect()
    }
}
