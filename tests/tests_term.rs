//! End-to-end term scenarios.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use kafnaf::{Dialect, Entity, ExternalReference, KafNafDocument, Sentiment, Term};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

// ── Event capture ───────────────────────────────────────────────────

/// A recorded event with its level and fields.
#[derive(Debug, Clone)]
struct CapturedEvent {
    level: Level,
    fields: HashMap<String, String>,
}

#[derive(Debug, Clone, Default)]
struct EventStore(Arc<Mutex<Vec<CapturedEvent>>>);

impl EventStore {
    fn at_level(&self, level: Level) -> Vec<CapturedEvent> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.level == level)
            .cloned()
            .collect()
    }
}

struct EventCaptureLayer {
    store: EventStore,
}

struct FieldVisitor(HashMap<String, String>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

impl<S: Subscriber> Layer<S> for EventCaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldVisitor(HashMap::new());
        event.record(&mut fields);
        self.store.0.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: fields.0,
        });
    }
}

/// Run `f` with every event it emits recorded into the returned store.
fn capture_events<T>(f: impl FnOnce() -> T) -> (T, EventStore) {
    let store = EventStore::default();
    let subscriber = tracing_subscriber::registry().with(EventCaptureLayer {
        store: store.clone(),
    });
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, store)
}

// ── Scenarios ───────────────────────────────────────────────────────

#[test]
fn test_term_layer_scenario() {
    let mut naf = KafNafDocument::new(Dialect::Naf);
    let mut terms = naf.ensure_term_layer().unwrap();

    let doc = naf.document_mut();
    let term = Term::new_detached(doc, Dialect::Naf);
    term.set_id(doc, "t1");
    term.set_lemma(doc, "run");
    term.set_pos(doc, "V");
    terms.add_term(doc, term).unwrap();

    let doc = naf.document();
    assert_eq!(terms.get_term(doc, "t1").and_then(|t| t.lemma(doc)), Some("run"));
    assert!(terms.get_term(doc, "t2").is_none());

    let doc = naf.document_mut();
    terms.to_kaf(doc);
    assert_eq!(doc.attr(term.node(), "tid"), Some("t1"));
    assert_eq!(doc.attr(term.node(), "id"), None);

    let found = terms.get_term(doc, "t1").unwrap();
    assert_eq!(found.id(doc), Some("t1"));
    assert_eq!(found.pos(doc), Some("V"));
}

#[test]
fn test_external_reference_scenario() {
    let mut naf = KafNafDocument::new(Dialect::Naf);
    let mut terms = naf.ensure_term_layer().unwrap();
    let doc = naf.document_mut();

    let term = Term::new_detached(doc, Dialect::Naf);
    term.set_id(doc, "t1");
    terms.add_term(doc, term).unwrap();

    let ref1 = ExternalReference::new_detached(doc, Dialect::Naf);
    ref1.set_resource(doc, "WordNet-3.0");
    ref1.set_reference(doc, "ref1");
    assert!(terms.add_external_reference(doc, "t1", ref1).unwrap());

    let refs = term.external_references(doc);
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].reference(doc), Some("ref1"));

    let children_before = doc.children(terms.node()).to_vec();
    let revision_before = doc.revision();
    let orphan = ExternalReference::new_detached(doc, Dialect::Naf);
    let revision_after_create = doc.revision();
    assert!(!terms.add_external_reference(doc, "t2", orphan).unwrap());
    assert_eq!(doc.children(terms.node()), children_before.as_slice());
    assert!(revision_after_create > revision_before);
    assert_eq!(doc.revision(), revision_after_create);
}

#[test]
fn test_term_sub_structures() {
    let mut naf = KafNafDocument::new(Dialect::Naf);
    let doc = naf.document_mut();
    let term = Term::new_detached(doc, Dialect::Naf);
    term.set_id(doc, "t1");

    assert!(term.span(doc).is_none());
    assert!(term.sentiment(doc).is_none());
    assert!(term.external_references(doc).is_empty());

    term.set_span_from_ids(doc, ["w1", "w2"]).unwrap();
    let sentiment = Sentiment::new_detached(doc, Dialect::Naf);
    sentiment.set_polarity(doc, "negative");
    term.add_sentiment(doc, sentiment).unwrap();

    assert_eq!(term.span_ids(doc), vec!["w1", "w2"]);
    assert_eq!(term.sentiment(doc).and_then(|s| s.polarity(doc)), Some("negative"));

    let r = ExternalReference::new_detached(doc, Dialect::Naf);
    term.add_external_reference(doc, r).unwrap();
    assert_eq!(term.remove_external_references(doc), 1);
    assert!(term.external_references(doc).is_empty());
    // Span and sentiment are untouched.
    assert_eq!(term.span_ids(doc).len(), 2);
    assert!(term.sentiment(doc).is_some());
}

#[test]
fn test_external_reference_to_unknown_term_logs_warning() {
    let mut naf = KafNafDocument::new(Dialect::Naf);
    let mut terms = naf.ensure_term_layer().unwrap();
    let doc = naf.document_mut();
    let term = Term::new_detached(doc, Dialect::Naf);
    term.set_id(doc, "t1");
    terms.add_term(doc, term).unwrap();

    let orphan = ExternalReference::new_detached(doc, Dialect::Naf);
    let (added, events) = capture_events(|| terms.add_external_reference(doc, "t2", orphan));
    assert!(!added.unwrap());

    let warnings = events.at_level(Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].fields.get("term_id").map(String::as_str), Some("t2"));

    let (added, events) = capture_events(|| terms.add_external_reference(doc, "t1", orphan));
    assert!(added.unwrap());
    assert!(events.at_level(Level::WARN).is_empty());
    assert_eq!(term.external_references(doc).len(), 1);
}
