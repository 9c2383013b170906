//! Marker extraction and concordance resolution
//!
//! A marked translation embeds lexicon citations as bracketed tokens
//! following the word they annotate: `<G26>` and `{H430}` are citation
//! markers. Parenthesized tokens like `(G26)` carry alternate or explanatory
//! text and are never citations, but all three styles are stripped when
//! preparing text for display.
//!
//! Two lookup strategies sit behind the same interface and produce identical
//! results: a per-query full scan with memoized per-identifier patterns, and
//! an inverted index built in a single pass over the marked translation.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::books;
use crate::store::{VerseRecord, VerseStore};

/// Matches a marker token of any identifier in any of the three bracket styles.
static MARKER_STRIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[GH]\d+>|\{[GH]\d+\}|\([GH]\d+\)").unwrap());

/// Matches a citation marker (angle or brace style) and captures its identifier.
static CITATION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[<{]([GH]\d+)[>}]").unwrap());

/// Sentinel text attached when the plain translation lacks the aligned verse.
pub const PLAIN_NOT_AVAILABLE: &str = "Versículo não encontrado nesta tradução.";

/// Remove every marker token, all three bracket styles, from verse text.
pub fn strip_markers(text: &str) -> String {
    MARKER_STRIP_REGEX.replace_all(text, "").into_owned()
}

/// One concordance result: a citing verse of the marked translation paired
/// with its coordinate-aligned counterpart from the plain translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    /// Formatted as "<local book name> <chapter>:<verse>"
    pub reference: String,
    /// The citing verse with all marker tokens stripped
    pub marked_text: String,
    /// The aligned verse, or [`PLAIN_NOT_AVAILABLE`]
    pub plain_text: String,
}

/// How citing verses are located in the marked translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    /// Scan every verse per query with an identifier-specific pattern.
    /// Acceptable for small corpora only.
    FullScan,
    /// One-time inverted index (identifier -> verse positions), sub-linear
    /// per query.
    Inverted,
}

/// Resolves a lexicon identifier into its full concordance.
///
/// Holds references into the verse store; the store is write-once at
/// bootstrap, so no lookup ever observes mutation.
pub struct Resolver<'a> {
    store: &'a VerseStore,
    marked_id: &'a str,
    plain_id: &'a str,
    strategy: LookupStrategy,
    /// Lazily built per-identifier citation patterns (FullScan only)
    patterns: Mutex<HashMap<String, Regex>>,
    /// Identifier -> positions into the marked translation (Inverted only)
    inverted: Option<HashMap<String, Vec<usize>>>,
}

impl<'a> Resolver<'a> {
    pub fn new(
        store: &'a VerseStore,
        marked_id: &'a str,
        plain_id: &'a str,
        strategy: LookupStrategy,
    ) -> Self {
        let inverted = match strategy {
            LookupStrategy::Inverted => Some(build_inverted(store.translation(marked_id))),
            LookupStrategy::FullScan => None,
        };
        Self {
            store,
            marked_id,
            plain_id,
            strategy,
            patterns: Mutex::new(HashMap::new()),
            inverted,
        }
    }

    pub fn strategy(&self) -> LookupStrategy {
        self.strategy
    }

    /// Every verse citing `id`, in the marked translation's natural order,
    /// paired with its aligned plain-translation text. An identifier with no
    /// citations yields an empty vec; a missing alignment yields the
    /// [`PLAIN_NOT_AVAILABLE`] sentinel, never a dropped result.
    pub fn resolve(&self, id: &str) -> Vec<Citation> {
        let records = self.store.translation(self.marked_id);
        let hits: Vec<&VerseRecord> = match &self.inverted {
            Some(index) => index
                .get(id)
                .map(|positions| positions.iter().map(|&i| &records[i]).collect())
                .unwrap_or_default(),
            None => {
                let pattern = self.citation_pattern(id);
                records.iter().filter(|v| pattern.is_match(&v.text)).collect()
            }
        };
        hits.into_iter().map(|v| self.pair(v)).collect()
    }

    /// The memoized pattern matching exactly `id` wrapped in `<...>` or
    /// `{...}`. The closing bracket keeps matching identifier-exact: a query
    /// for G12 never matches a verse tagged `<G123>`.
    fn citation_pattern(&self, id: &str) -> Regex {
        let mut patterns = self
            .patterns
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        patterns
            .entry(id.to_string())
            .or_insert_with(|| {
                Regex::new(&format!(r"[<{{]{}[>}}]", regex::escape(id))).unwrap()
            })
            .clone()
    }

    fn pair(&self, marked: &VerseRecord) -> Citation {
        let reference = match books::find_by_abbrev(&marked.book_abbrev) {
            Some(book) => format!("{} {}:{}", book.name_local, marked.chapter, marked.verse),
            None => format!("{} {}:{}", marked.book_abbrev, marked.chapter, marked.verse),
        };
        let plain_text = self
            .store
            .verse(self.plain_id, &marked.book_abbrev, marked.chapter, marked.verse)
            .map(|v| v.text.clone())
            .unwrap_or_else(|| PLAIN_NOT_AVAILABLE.to_string());

        Citation {
            reference,
            marked_text: strip_markers(&marked.text),
            plain_text,
        }
    }
}

/// Single pass over the marked translation collecting, per identifier, the
/// positions of every citing verse. Positions stay in record order; a verse
/// citing the same identifier twice is recorded once.
fn build_inverted(records: &[VerseRecord]) -> HashMap<String, Vec<usize>> {
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (position, verse) in records.iter().enumerate() {
        for capture in CITATION_REGEX.captures_iter(&verse.text) {
            let positions = index.entry(capture[1].to_string()).or_default();
            if positions.last() != Some(&position) {
                positions.push(position);
            }
        }
    }
    index
}
