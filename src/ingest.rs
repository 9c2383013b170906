//! Tabular ingestion parser
//!
//! Parses one translation's delimited export into verse records. Each
//! invocation is fully independent; the bootstrap phase runs one parse per
//! translation concurrently with no shared state.
//!
//! Tolerance policy: structural problems (no header, missing columns) abort
//! the parse, while row-level anomalies (unmatched book number, non-numeric
//! chapter or verse) silently drop the row. Real-world exports carry
//! malformed trailing rows and those must not abort ingestion.

pub mod columns;

use std::fmt;

use crate::books;
use crate::store::VerseRecord;

/// Errors aborting the ingestion of one translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// No row whose first cell contains "id" was found
    HeaderNotFound { translation_id: String },
    /// The header row lacks one or more required columns
    RequiredColumnMissing {
        translation_id: String,
        missing: Vec<String>,
    },
    /// The delimited text itself could not be read
    Malformed {
        translation_id: String,
        message: String,
    },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::HeaderNotFound { translation_id } => {
                write!(f, "No header row containing 'id' found in '{}'", translation_id)
            }
            IngestError::RequiredColumnMissing {
                translation_id,
                missing,
            } => write!(
                f,
                "Required column(s) {} not found in '{}'",
                missing.join(", "),
                translation_id
            ),
            IngestError::Malformed {
                translation_id,
                message,
            } => write!(f, "Malformed tabular data in '{}': {}", translation_id, message),
        }
    }
}

impl std::error::Error for IngestError {}

/// Output of one translation's parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTranslation {
    pub translation_id: String,
    pub records: Vec<VerseRecord>,
}

/// Parse one translation's raw comma-separated export.
pub fn parse_translation(translation_id: &str, raw: &str) -> Result<ParsedTranslation, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::Malformed {
            translation_id: translation_id.to_string(),
            message: e.to_string(),
        })?;
        let cells: Vec<String> = record.iter().map(str::to_string).collect();
        // Skip fully empty lines
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        rows.push(cells);
    }

    let header_index = columns::find_header(&rows).ok_or_else(|| IngestError::HeaderNotFound {
        translation_id: translation_id.to_string(),
    })?;
    let map = columns::resolve(&rows[header_index]).map_err(|missing| {
        IngestError::RequiredColumnMissing {
            translation_id: translation_id.to_string(),
            missing,
        }
    })?;

    let records = rows[header_index + 1..]
        .iter()
        .filter_map(|row| convert_row(translation_id, row, map))
        .collect();

    Ok(ParsedTranslation {
        translation_id: translation_id.to_string(),
        records,
    })
}

/// Convert one data row, or drop it when its book number does not resolve or
/// its chapter/verse cells are not numeric.
fn convert_row(
    translation_id: &str,
    row: &[String],
    map: columns::ColumnMap,
) -> Option<VerseRecord> {
    let book_number: u32 = cell(row, map.book_number)?.trim().parse().ok()?;
    let book = books::find_by_number(book_number)?;
    let chapter: u32 = cell(row, map.chapter)?.trim().parse().ok()?;
    let verse: u32 = cell(row, map.verse)?.trim().parse().ok()?;
    let text = cell(row, map.text)?.to_string();

    Some(VerseRecord {
        translation_id: translation_id.to_string(),
        book_abbrev: book.abbrev.to_string(),
        chapter,
        verse,
        text,
    })
}

fn cell(row: &[String], index: usize) -> Option<&str> {
    row.get(index).map(String::as_str)
}
