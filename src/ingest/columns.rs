//! Header detection and column resolution for tabular exports
//!
//! Exports arrive with an arbitrary preamble before the real header row.
//! The header is located by content, not by offset: the first row whose
//! first cell contains "id" (case-insensitive). Column positions are then
//! resolved once into a typed map; row conversion never re-resolves them.

/// Logical columns every export must provide, addressable case-insensitively.
pub const BOOK_NUMBER: &str = "book number";
pub const CHAPTER: &str = "chapter";
pub const VERSE: &str = "verse";
pub const TEXT: &str = "text";

/// Resolved positions of the required columns within a data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub book_number: usize,
    pub chapter: usize,
    pub verse: usize,
    pub text: usize,
}

/// Find the header row: the first row whose first cell contains "id",
/// case-insensitively. Returns its index into `rows`.
pub fn find_header(rows: &[Vec<String>]) -> Option<usize> {
    rows.iter().position(|row| {
        row.first()
            .map(|cell| cell.to_lowercase().contains("id"))
            .unwrap_or(false)
    })
}

/// Resolve the required column positions from a header row.
///
/// Header cells are matched trimmed and case-insensitively, in any order.
/// On failure returns the names of every column that could not be resolved.
pub fn resolve(header: &[String]) -> Result<ColumnMap, Vec<String>> {
    let normalized: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();
    let position = |name: &str| normalized.iter().position(|h| h == name);

    let book_number = position(BOOK_NUMBER);
    let chapter = position(CHAPTER);
    let verse = position(VERSE);
    let text = position(TEXT);

    match (book_number, chapter, verse, text) {
        (Some(book_number), Some(chapter), Some(verse), Some(text)) => Ok(ColumnMap {
            book_number,
            chapter,
            verse,
            text,
        }),
        _ => {
            let missing = [
                (BOOK_NUMBER, book_number),
                (CHAPTER, chapter),
                (VERSE, verse),
                (TEXT, text),
            ]
            .iter()
            .filter(|(_, found)| found.is_none())
            .map(|(name, _)| name.to_string())
            .collect();
            Err(missing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn header_is_found_by_content_not_offset() {
        let rows = vec![
            row(&["export metadata", ""]),
            row(&["generated 2024-01-01"]),
            row(&["ID", "Book Number", "Chapter", "Verse", "Text"]),
            row(&["1", "1", "1", "1", "In the beginning"]),
        ];
        assert_eq!(find_header(&rows), Some(2));
    }

    #[test]
    fn missing_header_is_reported() {
        let rows = vec![row(&["no marker here"]), row(&["still nothing"])];
        assert_eq!(find_header(&rows), None);
    }

    #[test]
    fn columns_resolve_in_any_order() {
        let header = row(&["id", "Text", "Verse", "Chapter", "Book Number"]);
        let map = resolve(&header).unwrap();
        assert_eq!(map.text, 1);
        assert_eq!(map.verse, 2);
        assert_eq!(map.chapter, 3);
        assert_eq!(map.book_number, 4);
    }

    #[test]
    fn missing_columns_are_all_named() {
        let header = row(&["id", "chapter"]);
        let missing = resolve(&header).unwrap_err();
        assert_eq!(missing, vec!["book number", "verse", "text"]);
    }
}
