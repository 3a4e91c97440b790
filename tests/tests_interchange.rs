//! Reading, editing and writing whole documents.

#![allow(clippy::unwrap_used)]

#[cfg(feature = "interchange")]
mod interchange {
    use kafnaf::xml::WriteOptions;
    use kafnaf::{Dialect, Entity, ExternalReference, KafNafDocument, Term};

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<NAF xml:lang="en" version="v3">
  <terms>
    <!--dogs-->
    <term id="t1" type="open" lemma="dog" pos="N" morphofeat="NNS">
      <span>
        <target id="w1"/>
      </span>
    </term>
    <!--bark-->
    <term id="t2" type="open" lemma="bark" pos="V" morphofeat="VBP">
      <span>
        <target id="w2"/>
      </span>
      <externalReferences>
        <externalRef resource="WordNet-3.0" reference="ili-30-01047745-v" confidence="0.9"/>
      </externalReferences>
    </term>
  </terms>
</NAF>
"#;

    fn compact(naf: &KafNafDocument) -> String {
        String::from_utf8(naf.to_bytes(&WriteOptions::compact()).unwrap()).unwrap()
    }

    #[test]
    fn read_sample_terms() {
        let naf = KafNafDocument::from_bytes(SAMPLE.as_bytes()).unwrap();
        assert_eq!(naf.dialect(), Dialect::Naf);

        let doc = naf.document();
        let terms = naf.term_layer().unwrap();
        assert_eq!(terms.ids(doc), vec!["t1", "t2"]);

        let bark = terms.get_term(doc, "t2").unwrap();
        assert_eq!(bark.lemma(doc), Some("bark"));
        assert_eq!(bark.morphofeat(doc), Some("VBP"));
        assert_eq!(bark.span_ids(doc), vec!["w2"]);
        let refs = bark.external_references(doc);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].confidence(doc), Some("0.9"));
    }

    #[test]
    fn remove_term_drops_its_comment_in_output() {
        let mut naf = KafNafDocument::from_bytes(SAMPLE.as_bytes()).unwrap();
        let mut terms = naf.term_layer().unwrap();
        terms.remove_terms(naf.document_mut(), ["t1"]);

        let out = compact(&naf);
        assert!(!out.contains("<!--dogs-->"), "comment should be removed:\n{out}");
        assert!(!out.contains(r#"lemma="dog""#), "term should be removed:\n{out}");
        assert!(out.contains("<!--bark-->"), "other comment stays:\n{out}");
    }

    #[test]
    fn convert_to_kaf_and_back() {
        let mut naf = KafNafDocument::from_bytes(SAMPLE.as_bytes()).unwrap();
        naf.to_kaf();

        let kaf_text = compact(&naf);
        assert!(kaf_text.starts_with("<KAF"), "root should be renamed:\n{kaf_text}");
        assert!(kaf_text.contains(r#"<term tid="t1" type="open""#), "{kaf_text}");
        // Span targets keep their id attribute in both dialects.
        assert!(kaf_text.contains(r#"<target id="w1"/>"#), "{kaf_text}");

        let reread = KafNafDocument::from_bytes(kaf_text.as_bytes()).unwrap();
        assert_eq!(reread.dialect(), Dialect::Kaf);
        let terms = reread.term_layer().unwrap();
        assert_eq!(
            terms.get_term(reread.document(), "t1").and_then(|t| t.lemma(reread.document())),
            Some("dog")
        );

        naf.to_naf();
        let original = KafNafDocument::from_bytes(SAMPLE.as_bytes()).unwrap();
        assert_eq!(compact(&naf), compact(&original));
    }

    #[test]
    fn edits_survive_a_write_read_cycle() {
        let mut naf = KafNafDocument::new(Dialect::Naf);
        let mut terms = naf.ensure_term_layer().unwrap();
        let doc = naf.document_mut();

        let term = Term::new_detached(doc, Dialect::Naf);
        term.set_id(doc, "t1");
        term.set_lemma(doc, "cat & mouse");
        term.set_span_from_ids(doc, ["w1"]).unwrap();
        terms.add_term(doc, term).unwrap();
        let r = ExternalReference::new_detached(doc, Dialect::Naf);
        r.set_reference(doc, "ref1");
        terms.add_external_reference(doc, "t1", r).unwrap();

        let bytes = naf.to_bytes(&WriteOptions::default()).unwrap();
        let reread = KafNafDocument::from_bytes(&bytes).unwrap();
        let doc = reread.document();
        let t1 = reread.term_layer().unwrap().get_term(doc, "t1").unwrap();
        assert_eq!(t1.lemma(doc), Some("cat & mouse"));
        assert_eq!(t1.span_ids(doc), vec!["w1"]);
        assert_eq!(t1.external_references(doc)[0].reference(doc), Some("ref1"));
    }
}
