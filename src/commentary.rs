//! Patristic commentary data and chapter windowing
//!
//! Commentary sources locate their text with encoded coordinates packing
//! chapter and verse into one integer: `chapter * 1_000_000 + verse`. An
//! entry spans the inclusive encoded range [range_start, range_end] and may
//! cross chapter boundaries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Factor separating the chapter and verse components of an encoded coordinate.
pub const COORDINATE_BASE: u64 = 1_000_000;

/// Pack a chapter/verse pair into one encoded coordinate.
pub fn encode(chapter: u32, verse: u32) -> u64 {
    u64::from(chapter) * COORDINATE_BASE + u64::from(verse)
}

pub fn decode_chapter(encoded: u64) -> u32 {
    (encoded / COORDINATE_BASE) as u32
}

pub fn decode_verse(encoded: u64) -> u32 {
    (encoded % COORDINATE_BASE) as u32
}

/// One commentary entry as found in the JSON source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommentaryEntry {
    pub id: u64,
    #[serde(rename = "father_name")]
    pub author_name: String,
    /// Canonical book name, lowercased, spaces removed (see [`crate::books::canonical_key`])
    #[serde(rename = "book")]
    pub book_key: String,
    #[serde(rename = "location_start")]
    pub range_start: u64,
    #[serde(rename = "location_end")]
    pub range_end: u64,
    #[serde(rename = "txt")]
    pub text: String,
}

impl CommentaryEntry {
    /// True when the entry's chapter span touches the given chapter.
    ///
    /// Compares the decoded chapter components of the range endpoints
    /// directly, so a chapter of any verse count matches exactly.
    pub fn covers_chapter(&self, chapter: u32) -> bool {
        decode_chapter(self.range_start) <= chapter && chapter <= decode_chapter(self.range_end)
    }

    /// True when the exact verse coordinate lies inside the entry's range.
    pub fn covers_verse(&self, chapter: u32, verse: u32) -> bool {
        let coordinate = encode(chapter, verse);
        self.range_start <= coordinate && coordinate <= self.range_end
    }
}

impl fmt::Display for CommentaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} {}:{}-{}:{}",
            self.author_name,
            self.book_key,
            decode_chapter(self.range_start),
            decode_verse(self.range_start),
            decode_chapter(self.range_end),
            decode_verse(self.range_end),
        )
    }
}

/// Read-only collection of commentary entries, windowed by book and chapter.
#[derive(Debug, Default)]
pub struct CommentarySet {
    entries: Vec<CommentaryEntry>,
}

impl CommentarySet {
    pub fn new(entries: Vec<CommentaryEntry>) -> Self {
        Self { entries }
    }

    /// Parse the JSON source: a sequence of commentary objects.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let entries = serde_json::from_str(raw)?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted, deduplicated author names across all entries.
    pub fn authors(&self) -> Vec<&str> {
        let mut authors: Vec<&str> = self.entries.iter().map(|e| e.author_name.as_str()).collect();
        authors.sort();
        authors.dedup();
        authors
    }

    /// Every entry whose range touches the given chapter of the given book.
    /// `book_key` is the canonical key form (lowercase, spaces removed).
    pub fn for_chapter(&self, book_key: &str, chapter: u32) -> Vec<&CommentaryEntry> {
        self.entries
            .iter()
            .filter(|e| e.book_key == book_key && e.covers_chapter(chapter))
            .collect()
    }

    /// Chapter window narrowed to one author.
    pub fn for_chapter_by(
        &self,
        book_key: &str,
        chapter: u32,
        author: &str,
    ) -> Vec<&CommentaryEntry> {
        self.for_chapter(book_key, chapter)
            .into_iter()
            .filter(|e| e.author_name == author)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(book: &str, start: u64, end: u64) -> CommentaryEntry {
        CommentaryEntry {
            id: 1,
            author_name: "Chrysostom".to_string(),
            book_key: book.to_string(),
            range_start: start,
            range_end: end,
            text: "…".to_string(),
        }
    }

    #[test]
    fn coordinates_round_trip() {
        let encoded = encode(3, 16);
        assert_eq!(encoded, 3_000_016);
        assert_eq!(decode_chapter(encoded), 3);
        assert_eq!(decode_verse(encoded), 16);
    }

    #[test]
    fn chapter_coverage_follows_the_decoded_span() {
        let single = entry("genesis", encode(1, 1), encode(1, 3));
        assert!(single.covers_chapter(1));
        assert!(!single.covers_chapter(2));

        let spanning = entry("genesis", encode(1, 28), encode(3, 5));
        assert!(spanning.covers_chapter(1));
        assert!(spanning.covers_chapter(2));
        assert!(spanning.covers_chapter(3));
        assert!(!spanning.covers_chapter(4));
    }

    #[test]
    fn verse_coverage_uses_the_full_coordinate() {
        // A span crossing chapters covers every verse in between, even ones
        // whose verse number is outside the endpoint verse numbers.
        let spanning = entry("genesis", encode(1, 28), encode(3, 5));
        assert!(spanning.covers_verse(2, 400));
        assert!(spanning.covers_verse(1, 28));
        assert!(spanning.covers_verse(3, 5));
        assert!(!spanning.covers_verse(1, 27));
        assert!(!spanning.covers_verse(3, 6));
    }

    #[test]
    fn windows_filter_by_book_key() {
        let set = CommentarySet::new(vec![
            entry("genesis", encode(1, 1), encode(1, 3)),
            entry("exodus", encode(1, 1), encode(1, 3)),
        ]);
        assert_eq!(set.for_chapter("genesis", 1).len(), 1);
        assert_eq!(set.for_chapter("john", 1).len(), 0);
    }
}
