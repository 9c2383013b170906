//! In-memory verse store
//!
//! Owns every ingested verse record, partitioned by translation. Built once
//! per translation during bootstrap and read-only afterwards; there is no
//! update or delete API, corrections require a full reload of a translation.

use std::collections::HashMap;

use serde::Serialize;

/// One verse of one translation. Immutable once ingested.
///
/// Within a translation, (book_abbrev, chapter, verse) is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseRecord {
    pub translation_id: String,
    pub book_abbrev: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// Queryable index of verse records, keyed by translation.
#[derive(Debug, Default)]
pub struct VerseStore {
    translations: HashMap<String, Vec<VerseRecord>>,
}

impl VerseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load one translation's records, replacing any prior data for it.
    pub fn load(&mut self, translation_id: &str, records: Vec<VerseRecord>) {
        self.translations.insert(translation_id.to_string(), records);
    }

    /// All records of one translation in source order; empty for unknown ids.
    pub fn translation(&self, translation_id: &str) -> &[VerseRecord] {
        self.translations
            .get(translation_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ids of all loaded translations, sorted.
    pub fn translation_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.translations.keys().map(String::as_str).collect();
        ids.sort();
        ids
    }

    /// One chapter window, sorted ascending by verse number.
    ///
    /// Source order is expected but not guaranteed to be canonical, so the
    /// store sorts rather than trusting ingestion order. Unknown translation,
    /// book or chapter yields an empty result, never an error.
    pub fn chapter(&self, translation_id: &str, book_abbrev: &str, chapter: u32) -> Vec<&VerseRecord> {
        let mut verses: Vec<&VerseRecord> = self
            .translation(translation_id)
            .iter()
            .filter(|v| v.book_abbrev == book_abbrev && v.chapter == chapter)
            .collect();
        verses.sort_by_key(|v| v.verse);
        verses
    }

    /// Single coordinate lookup; concordance alignment goes through this.
    pub fn verse(
        &self,
        translation_id: &str,
        book_abbrev: &str,
        chapter: u32,
        verse: u32,
    ) -> Option<&VerseRecord> {
        self.translation(translation_id)
            .iter()
            .find(|v| v.book_abbrev == book_abbrev && v.chapter == chapter && v.verse == verse)
    }

    /// Case-insensitive substring search over one translation's verse texts,
    /// in store order.
    pub fn search(&self, translation_id: &str, term: &str) -> Vec<&VerseRecord> {
        let needle = term.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.translation(translation_id)
            .iter()
            .filter(|v| v.text.to_lowercase().contains(&needle))
            .collect()
    }
}
