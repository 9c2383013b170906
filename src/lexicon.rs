//! Strong's lexicon index
//!
//! One index per source language, built once at bootstrap from a JSON object
//! mapping identifiers ("G26", "H430") to entries. The JSON is produced
//! offline from the structured-markup dictionary document (one entry
//! container per lexical item: a language-tagged span for the headword, an
//! italic element for the transliteration, a paragraph for the gloss).

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Source language of a lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Greek,
    Hebrew,
}

impl Language {
    /// The one-letter tag prefixing identifiers of this language.
    pub fn tag(self) -> char {
        match self {
            Language::Greek => 'G',
            Language::Hebrew => 'H',
        }
    }

    /// Infer the language from an identifier's tag letter.
    pub fn of_identifier(id: &str) -> Option<Language> {
        match id.chars().next() {
            Some('G') | Some('g') => Some(Language::Greek),
            Some('H') | Some('h') => Some(Language::Hebrew),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Greek => write!(f, "greek"),
            Language::Hebrew => write!(f, "hebrew"),
        }
    }
}

/// One lexicon entry. Immutable; id is unique within its language's index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconEntry {
    pub id: String,
    pub lemma: String,
    pub transliteration: String,
    pub gloss: String,
}

/// Entry shape as found in the JSON sources. Field spellings vary between
/// extraction runs, so the older names are accepted as aliases.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    lemma: String,
    #[serde(default, alias = "translit")]
    transliteration: String,
    #[serde(default, alias = "strongs_def", alias = "definition")]
    gloss: String,
}

/// Glosses are English while queries arrive in the interface language; these
/// query terms gain an extra OR-condition against the gloss field.
static QUERY_SYNONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("amor", "love"),
        ("fé", "faith"),
        ("deus", "god"),
        ("senhor", "lord"),
        ("espírito", "spirit"),
        ("salvação", "salvation"),
        ("graça", "grace"),
        ("pecado", "sin"),
        ("justiça", "righteousness"),
        ("coração", "heart"),
        ("palavra", "word"),
        ("luz", "light"),
        ("vida", "life"),
        ("morte", "death"),
    ])
});

/// Read-only index over one language's lexicon entries.
#[derive(Debug)]
pub struct LexiconIndex {
    language: Language,
    /// Sorted by numeric identifier
    entries: Vec<LexiconEntry>,
    by_id: HashMap<String, usize>,
}

impl LexiconIndex {
    /// Build the index from a JSON object mapping id to entry.
    pub fn from_json(language: Language, raw: &str) -> Result<Self, serde_json::Error> {
        let parsed: HashMap<String, RawEntry> = serde_json::from_str(raw)?;
        let entries = parsed.into_iter().map(|(id, raw)| LexiconEntry {
            id,
            lemma: raw.lemma,
            transliteration: raw.transliteration,
            gloss: raw.gloss,
        });
        Ok(Self::from_entries(language, entries))
    }

    /// Build the index from already-shaped entries.
    ///
    /// Duplicate identifiers keep the last occurrence, matching the source
    /// data's overwrite behavior; overwrites are logged, not rejected.
    pub fn from_entries(
        language: Language,
        entries: impl IntoIterator<Item = LexiconEntry>,
    ) -> Self {
        let mut deduped: HashMap<String, LexiconEntry> = HashMap::new();
        let mut overwritten = 0usize;
        for entry in entries {
            if deduped.insert(entry.id.clone(), entry).is_some() {
                overwritten += 1;
            }
        }
        if overwritten > 0 {
            tracing::warn!(
                %language,
                overwritten,
                "duplicate lexicon identifiers, keeping last occurrence"
            );
        }

        let mut entries: Vec<LexiconEntry> = deduped.into_values().collect();
        entries.sort_by_key(|e| numeric_id(&e.id));
        let by_id = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();

        Self {
            language,
            entries,
            by_id,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, sorted by numeric identifier.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&LexiconEntry> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    /// Case-insensitive substring search over id, lemma, transliteration and
    /// gloss. An empty query returns every entry.
    pub fn search(&self, query: &str) -> Vec<&LexiconEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }
        let synonym = QUERY_SYNONYMS.get(needle.as_str());

        self.entries
            .iter()
            .filter(|entry| {
                let gloss = entry.gloss.to_lowercase();
                let gloss_match = gloss.contains(&needle)
                    || synonym.is_some_and(|s| gloss.contains(s));
                entry.id.to_lowercase().contains(&needle)
                    || entry.lemma.to_lowercase().contains(&needle)
                    || entry.transliteration.to_lowercase().contains(&needle)
                    || gloss_match
            })
            .collect()
    }
}

/// Numeric part of an identifier, for ordering; entries with a malformed
/// identifier sort first.
fn numeric_id(id: &str) -> u32 {
    id.get(1..).and_then(|n| n.parse().ok()).unwrap_or(0)
}
