//! Integration tests for concordance resolution
//!
//! Covers the marked/plain pairing behavior end to end: marker matching,
//! display cleanup, alignment sentinels and the equivalence of the two
//! lookup strategies.

use concord::concordance::{strip_markers, LookupStrategy, Resolver, PLAIN_NOT_AVAILABLE};
use concord::store::{VerseRecord, VerseStore};

fn verse(translation: &str, book: &str, chapter: u32, verse: u32, text: &str) -> VerseRecord {
    VerseRecord {
        translation_id: translation.to_string(),
        book_abbrev: book.to_string(),
        chapter,
        verse,
        text: text.to_string(),
    }
}

fn fixture_store() -> VerseStore {
    let mut store = VerseStore::new();
    store.load(
        "kjv_strongs",
        vec![
            verse("kjv_strongs", "jo", 3, 16, "For G2316 so loved <G26> the world <G2889>"),
            verse("kjv_strongs", "jo", 3, 17, "For God sent not his Son"),
            verse("kjv_strongs", "1jo", 4, 8, "God is love {G26}"),
        ],
    );
    store.load(
        "almeida_rc",
        vec![verse("almeida_rc", "jo", 3, 16, "Porque Deus amou o mundo")],
    );
    store
}

#[test]
fn resolves_the_marked_verse_and_strips_every_token() {
    let store = fixture_store();
    let resolver = Resolver::new(&store, "kjv_strongs", "almeida_rc", LookupStrategy::FullScan);

    let citations = resolver.resolve("G26");
    assert_eq!(citations.len(), 2);

    let first = &citations[0];
    insta::assert_snapshot!(first.reference, @"João 3:16");
    // All bracket styles are stripped for display; the bare G2316 (no
    // brackets) is ordinary text and stays.
    assert_eq!(first.marked_text, "For G2316 so loved  the world ");
    assert!(!first.marked_text.contains('<'));
    assert!(!first.marked_text.contains('{'));
    assert!(!first.marked_text.contains('('));
    assert_eq!(first.plain_text, "Porque Deus amou o mundo");
}

#[test]
fn missing_alignment_attaches_the_sentinel_without_dropping_the_citation() {
    let store = fixture_store();
    let resolver = Resolver::new(&store, "kjv_strongs", "almeida_rc", LookupStrategy::Inverted);

    let citations = resolver.resolve("G26");
    assert_eq!(citations.len(), 2);
    // 1 João 4:8 has no counterpart in the plain translation
    assert_eq!(citations[1].reference, "1 João 4:8");
    assert_eq!(citations[1].plain_text, PLAIN_NOT_AVAILABLE);
}

#[test]
fn identifier_with_zero_citations_yields_an_empty_sequence() {
    let store = fixture_store();
    for strategy in [LookupStrategy::FullScan, LookupStrategy::Inverted] {
        let resolver = Resolver::new(&store, "kjv_strongs", "almeida_rc", strategy);
        assert!(resolver.resolve("G9999").is_empty());
        assert!(resolver.resolve("H1").is_empty());
    }
}

#[test]
fn matching_is_identifier_exact_under_both_strategies() {
    let store = fixture_store();
    for strategy in [LookupStrategy::FullScan, LookupStrategy::Inverted] {
        let resolver = Resolver::new(&store, "kjv_strongs", "almeida_rc", strategy);
        // <G2889> must not answer queries for prefixes or extensions
        assert_eq!(resolver.resolve("G2889").len(), 1);
        assert!(resolver.resolve("G288").is_empty());
        assert!(resolver.resolve("G28899").is_empty());
    }
}

#[test]
fn strategies_agree_on_the_fixture() {
    let store = fixture_store();
    let scan = Resolver::new(&store, "kjv_strongs", "almeida_rc", LookupStrategy::FullScan);
    let indexed = Resolver::new(&store, "kjv_strongs", "almeida_rc", LookupStrategy::Inverted);
    for id in ["G26", "G2316", "G2889", "H1", "G9999"] {
        assert_eq!(scan.resolve(id), indexed.resolve(id), "strategies diverged for {}", id);
    }
}

#[test]
fn unknown_marked_translation_yields_empty_results() {
    let store = fixture_store();
    for strategy in [LookupStrategy::FullScan, LookupStrategy::Inverted] {
        let resolver = Resolver::new(&store, "nope", "almeida_rc", strategy);
        assert!(resolver.resolve("G26").is_empty());
    }
}

#[test]
fn round_trip_stripping_leaves_no_bracketed_tokens() {
    let text = "a <G26> b {H430} c (G26) d";
    let stripped = strip_markers(text);
    assert_eq!(stripped, "a  b  c  d");
}
