//! The term layer: `<terms>` holding `<term>` elements.

use tracing::warn;

use super::{ExternalReference, ExternalReferences, Sentiment, Span};
use crate::element::macros::{attribute_accessors, entity};
use crate::element::{Entity, Layer, RemoveOptions};
use crate::error::Result;
use crate::tree::Document;

/// Tag of the container element holding the terms.
pub const TERM_LAYER_TAG: &str = "terms";

entity! {
    /// A `<term>`: lemma, part of speech and morphology of a token span.
    ///
    /// Identified by `id` in NAF and `tid` in KAF.
    Term, "term", "id", "tid"
}

/// The term layer.
pub type TermLayer = Layer<Term>;

impl Term {
    attribute_accessors! {
        lemma, set_lemma => "lemma";
        pos, set_pos => "pos";
        term_type, set_term_type => "type";
        case, set_case => "case";
        head, set_head => "head";
        morphofeat, set_morphofeat => "morphofeat";
    }

    // ── Span ────────────────────────────────────────────────────────

    /// The first `<span>` child.
    pub fn span(&self, doc: &Document) -> Option<Span> {
        doc.find_child(self.node, Span::SCHEME.tag)
            .map(|n| Span::from_node(n, self.dialect))
    }

    /// Append `span` to the term. An existing span is not replaced.
    pub fn set_span(&self, doc: &mut Document, span: Span) -> Result<()> {
        doc.append_child(self.node, span.node())?;
        Ok(())
    }

    /// Token ids of the span; empty when there is none.
    pub fn span_ids(&self, doc: &Document) -> Vec<String> {
        self.span(doc).map(|s| s.ids(doc)).unwrap_or_default()
    }

    /// Build a span from token ids and append it.
    ///
    /// Appends unconditionally: calling this on a term that already has a
    /// span leaves two spans, and [`span`](Self::span) keeps returning the
    /// first one.
    pub fn set_span_from_ids<I, S>(&self, doc: &mut Document, ids: I) -> Result<Span>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let span = Span::create_from_ids(doc, self.dialect, ids)?;
        self.set_span(doc, span)?;
        Ok(span)
    }

    // ── Sentiment ───────────────────────────────────────────────────

    /// The first `<sentiment>` child in document order.
    pub fn sentiment(&self, doc: &Document) -> Option<Sentiment> {
        doc.find_child(self.node, Sentiment::SCHEME.tag)
            .map(|n| Sentiment::from_node(n, self.dialect))
    }

    /// Append a sentiment. No uniqueness check.
    pub fn add_sentiment(&self, doc: &mut Document, sentiment: Sentiment) -> Result<()> {
        doc.append_child(self.node, sentiment.node())?;
        Ok(())
    }

    // ── External references ─────────────────────────────────────────

    /// Add a reference, creating the `<externalReferences>` wrapper on first use.
    pub fn add_external_reference(&self, doc: &mut Document, reference: ExternalReference) -> Result<()> {
        let wrapper = match doc.find_child(self.node, ExternalReferences::SCHEME.tag) {
            Some(node) => ExternalReferences::from_node(node, self.dialect),
            None => {
                let wrapper = ExternalReferences::new_detached(doc, self.dialect);
                doc.append_child(self.node, wrapper.node())?;
                wrapper
            }
        };
        wrapper.add_external_reference(doc, reference)
    }

    /// All references across every wrapper, in document order.
    pub fn external_references(&self, doc: &Document) -> Vec<ExternalReference> {
        doc.children_by_tag(self.node, ExternalReferences::SCHEME.tag)
            .flat_map(|n| {
                let wrapper = ExternalReferences::from_node(n, self.dialect);
                wrapper.iter(doc).collect::<Vec<_>>()
            })
            .collect()
    }

    /// Drop every `<externalReferences>` wrapper. Returns how many were removed.
    pub fn remove_external_references(&self, doc: &mut Document) -> usize {
        let wrappers: Vec<_> = doc
            .children_by_tag(self.node, ExternalReferences::SCHEME.tag)
            .collect();
        for wrapper in &wrappers {
            doc.remove_child(self.node, *wrapper);
        }
        wrappers.len()
    }
}

impl Layer<Term> {
    pub fn get_term(&self, doc: &Document, term_id: &str) -> Option<Term> {
        self.get_child(doc, term_id)
    }

    /// Append a term. Fails on a duplicate or missing id.
    pub fn add_term(&mut self, doc: &mut Document, term: Term) -> Result<()> {
        self.add_child(doc, term)
    }

    /// Remove terms (and the comment before each) by id.
    pub fn remove_terms<I, S>(&mut self, doc: &mut Document, term_ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.remove_children_with(doc, term_ids, RemoveOptions::default())
    }

    pub fn terms<'a>(&'a self, doc: &'a Document) -> impl Iterator<Item = Term> + 'a {
        self.iter(doc)
    }

    /// Attach `reference` to the term `term_id`.
    ///
    /// An unknown term is not an error: a warning is logged, nothing changes,
    /// and `Ok(false)` is returned.
    pub fn add_external_reference(
        &self,
        doc: &mut Document,
        term_id: &str,
        reference: ExternalReference,
    ) -> Result<bool> {
        match self.get_term(doc, term_id) {
            Some(term) => {
                term.add_external_reference(doc, reference)?;
                Ok(true)
            }
            None => {
                warn!(term_id, "external reference targets a term that is not in the layer");
                Ok(false)
            }
        }
    }
}
