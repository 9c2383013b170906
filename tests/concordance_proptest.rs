//! Property-based tests for marker handling and lookup-strategy equivalence
//!
//! The two lookup strategies must be result-equivalent for any marked
//! corpus, and display cleanup must never leave a bracketed token behind.

use proptest::prelude::*;

use concord::concordance::{strip_markers, LookupStrategy, Resolver};
use concord::store::{VerseRecord, VerseStore};

/// Identifiers drawn from a small pool so collisions between verses are common.
fn identifier() -> impl Strategy<Value = String> {
    (prop::sample::select(vec!['G', 'H']), 1u32..40)
        .prop_map(|(tag, number)| format!("{}{}", tag, number))
}

/// One token of marked verse text: a plain word or a marker in one of the
/// three bracket styles.
fn token() -> BoxedStrategy<String> {
    prop_oneof![
        "[a-z]{1,8}".boxed(),
        (identifier(), 0u8..3)
            .prop_map(|(id, style)| match style {
                0 => format!("<{}>", id),
                1 => format!("{{{}}}", id),
                _ => format!("({})", id),
            })
            .boxed(),
    ]
    .boxed()
}

fn verse_text() -> impl Strategy<Value = String> {
    prop::collection::vec(token(), 1..12).prop_map(|tokens| tokens.join(" "))
}

/// A marked corpus with unique ascending coordinates, plus a plain
/// counterpart that covers only some of them.
fn corpus() -> impl Strategy<Value = (Vec<VerseRecord>, Vec<VerseRecord>)> {
    prop::collection::vec((verse_text(), any::<bool>()), 0..25).prop_map(|verses| {
        let mut marked = Vec::new();
        let mut plain = Vec::new();
        for (i, (text, aligned)) in verses.into_iter().enumerate() {
            let chapter = (i / 10) as u32 + 1;
            let verse = (i % 10) as u32 + 1;
            marked.push(VerseRecord {
                translation_id: "marked".to_string(),
                book_abbrev: "jo".to_string(),
                chapter,
                verse,
                text,
            });
            if aligned {
                plain.push(VerseRecord {
                    translation_id: "plain".to_string(),
                    book_abbrev: "jo".to_string(),
                    chapter,
                    verse,
                    text: format!("plain {}:{}", chapter, verse),
                });
            }
        }
        (marked, plain)
    })
}

proptest! {
    #[test]
    fn stripping_leaves_no_bracketed_tokens(text in verse_text()) {
        let stripped = strip_markers(&text);
        prop_assert!(!stripped.contains('<'));
        prop_assert!(!stripped.contains('{'), "stripped text contains '{{'");
        prop_assert!(!stripped.contains('('));
    }

    #[test]
    fn scan_and_inverted_lookups_are_result_equivalent(
        (marked, plain) in corpus(),
        queried in identifier(),
    ) {
        let mut store = VerseStore::new();
        store.load("marked", marked);
        store.load("plain", plain);

        let scan = Resolver::new(&store, "marked", "plain", LookupStrategy::FullScan);
        let indexed = Resolver::new(&store, "marked", "plain", LookupStrategy::Inverted);
        prop_assert_eq!(scan.resolve(&queried), indexed.resolve(&queried));
    }

    #[test]
    fn every_resolved_citation_is_fully_cleaned(
        (marked, plain) in corpus(),
        queried in identifier(),
    ) {
        let mut store = VerseStore::new();
        store.load("marked", marked);
        store.load("plain", plain);

        let resolver = Resolver::new(&store, "marked", "plain", LookupStrategy::Inverted);
        for citation in resolver.resolve(&queried) {
            prop_assert!(!citation.marked_text.contains('<'));
            prop_assert!(!citation.marked_text.contains('{'), "marked_text contains '{{'");
            prop_assert!(!citation.marked_text.contains('('));
        }
    }
}
