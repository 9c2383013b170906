//! Static book reference data
//!
//! Tabular exports identify books by number, the verse store and every query
//! surface use abbreviations, and commentary sources key books by a
//! lowercased canonical name. This table translates between the three.

/// Reference data for one canonical book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookInfo {
    /// Numeric identifier as used by tabular exports (1-based, canonical order)
    pub number: u32,
    /// Short key used by the verse store
    pub abbrev: &'static str,
    /// Display name in the interface language
    pub name_local: &'static str,
    /// Canonical (English) name, the basis for commentary keys
    pub name_canonical: &'static str,
    /// Number of chapters in the book
    pub chapter_count: u32,
}

impl BookInfo {
    /// Key used by commentary sources: canonical name, lowercased, spaces removed.
    pub fn canonical_key(&self) -> String {
        canonical_key(self.name_canonical)
    }
}

/// Lowercase a book name and remove all spaces, e.g. "1 Kings" -> "1kings".
pub fn canonical_key(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}

/// Look up a book by its numeric identifier.
pub fn find_by_number(number: u32) -> Option<&'static BookInfo> {
    BOOKS.iter().find(|b| b.number == number)
}

/// Look up a book by its abbreviation.
pub fn find_by_abbrev(abbrev: &str) -> Option<&'static BookInfo> {
    BOOKS.iter().find(|b| b.abbrev == abbrev)
}

/// The 66 canonical books, in canonical order.
#[rustfmt::skip]
pub const BOOKS: &[BookInfo] = &[
    BookInfo { number: 1, abbrev: "gn", name_local: "Gênesis", name_canonical: "Genesis", chapter_count: 50 },
    BookInfo { number: 2, abbrev: "ex", name_local: "Êxodo", name_canonical: "Exodus", chapter_count: 40 },
    BookInfo { number: 3, abbrev: "lv", name_local: "Levítico", name_canonical: "Leviticus", chapter_count: 27 },
    BookInfo { number: 4, abbrev: "nm", name_local: "Números", name_canonical: "Numbers", chapter_count: 36 },
    BookInfo { number: 5, abbrev: "dt", name_local: "Deuteronômio", name_canonical: "Deuteronomy", chapter_count: 34 },
    BookInfo { number: 6, abbrev: "js", name_local: "Josué", name_canonical: "Joshua", chapter_count: 24 },
    BookInfo { number: 7, abbrev: "jz", name_local: "Juízes", name_canonical: "Judges", chapter_count: 21 },
    BookInfo { number: 8, abbrev: "rt", name_local: "Rute", name_canonical: "Ruth", chapter_count: 4 },
    BookInfo { number: 9, abbrev: "1sm", name_local: "1 Samuel", name_canonical: "1 Samuel", chapter_count: 31 },
    BookInfo { number: 10, abbrev: "2sm", name_local: "2 Samuel", name_canonical: "2 Samuel", chapter_count: 24 },
    BookInfo { number: 11, abbrev: "1rs", name_local: "1 Reis", name_canonical: "1 Kings", chapter_count: 22 },
    BookInfo { number: 12, abbrev: "2rs", name_local: "2 Reis", name_canonical: "2 Kings", chapter_count: 25 },
    BookInfo { number: 13, abbrev: "1cr", name_local: "1 Crônicas", name_canonical: "1 Chronicles", chapter_count: 29 },
    BookInfo { number: 14, abbrev: "2cr", name_local: "2 Crônicas", name_canonical: "2 Chronicles", chapter_count: 36 },
    BookInfo { number: 15, abbrev: "ed", name_local: "Esdras", name_canonical: "Ezra", chapter_count: 10 },
    BookInfo { number: 16, abbrev: "ne", name_local: "Neemias", name_canonical: "Nehemiah", chapter_count: 13 },
    BookInfo { number: 17, abbrev: "et", name_local: "Ester", name_canonical: "Esther", chapter_count: 10 },
    BookInfo { number: 18, abbrev: "jó", name_local: "Jó", name_canonical: "Job", chapter_count: 42 },
    BookInfo { number: 19, abbrev: "sl", name_local: "Salmos", name_canonical: "Psalms", chapter_count: 150 },
    BookInfo { number: 20, abbrev: "pv", name_local: "Provérbios", name_canonical: "Proverbs", chapter_count: 31 },
    BookInfo { number: 21, abbrev: "ec", name_local: "Eclesiastes", name_canonical: "Ecclesiastes", chapter_count: 12 },
    BookInfo { number: 22, abbrev: "ct", name_local: "Cantares", name_canonical: "Song of Solomon", chapter_count: 8 },
    BookInfo { number: 23, abbrev: "is", name_local: "Isaías", name_canonical: "Isaiah", chapter_count: 66 },
    BookInfo { number: 24, abbrev: "jr", name_local: "Jeremias", name_canonical: "Jeremiah", chapter_count: 52 },
    BookInfo { number: 25, abbrev: "lm", name_local: "Lamentações", name_canonical: "Lamentations", chapter_count: 5 },
    BookInfo { number: 26, abbrev: "ez", name_local: "Ezequiel", name_canonical: "Ezekiel", chapter_count: 48 },
    BookInfo { number: 27, abbrev: "dn", name_local: "Daniel", name_canonical: "Daniel", chapter_count: 12 },
    BookInfo { number: 28, abbrev: "os", name_local: "Oséias", name_canonical: "Hosea", chapter_count: 14 },
    BookInfo { number: 29, abbrev: "jl", name_local: "Joel", name_canonical: "Joel", chapter_count: 3 },
    BookInfo { number: 30, abbrev: "am", name_local: "Amós", name_canonical: "Amos", chapter_count: 9 },
    BookInfo { number: 31, abbrev: "ob", name_local: "Obadias", name_canonical: "Obadiah", chapter_count: 1 },
    BookInfo { number: 32, abbrev: "jn", name_local: "Jonas", name_canonical: "Jonah", chapter_count: 4 },
    BookInfo { number: 33, abbrev: "mq", name_local: "Miquéias", name_canonical: "Micah", chapter_count: 7 },
    BookInfo { number: 34, abbrev: "na", name_local: "Naum", name_canonical: "Nahum", chapter_count: 3 },
    BookInfo { number: 35, abbrev: "hc", name_local: "Habacuque", name_canonical: "Habakkuk", chapter_count: 3 },
    BookInfo { number: 36, abbrev: "sf", name_local: "Sofonias", name_canonical: "Zephaniah", chapter_count: 3 },
    BookInfo { number: 37, abbrev: "ag", name_local: "Ageu", name_canonical: "Haggai", chapter_count: 2 },
    BookInfo { number: 38, abbrev: "zc", name_local: "Zacarias", name_canonical: "Zechariah", chapter_count: 14 },
    BookInfo { number: 39, abbrev: "ml", name_local: "Malaquias", name_canonical: "Malachi", chapter_count: 4 },
    BookInfo { number: 40, abbrev: "mt", name_local: "Mateus", name_canonical: "Matthew", chapter_count: 28 },
    BookInfo { number: 41, abbrev: "mc", name_local: "Marcos", name_canonical: "Mark", chapter_count: 16 },
    BookInfo { number: 42, abbrev: "lc", name_local: "Lucas", name_canonical: "Luke", chapter_count: 24 },
    BookInfo { number: 43, abbrev: "jo", name_local: "João", name_canonical: "John", chapter_count: 21 },
    BookInfo { number: 44, abbrev: "at", name_local: "Atos", name_canonical: "Acts", chapter_count: 28 },
    BookInfo { number: 45, abbrev: "rm", name_local: "Romanos", name_canonical: "Romans", chapter_count: 16 },
    BookInfo { number: 46, abbrev: "1co", name_local: "1 Coríntios", name_canonical: "1 Corinthians", chapter_count: 16 },
    BookInfo { number: 47, abbrev: "2co", name_local: "2 Coríntios", name_canonical: "2 Corinthians", chapter_count: 13 },
    BookInfo { number: 48, abbrev: "gl", name_local: "Gálatas", name_canonical: "Galatians", chapter_count: 6 },
    BookInfo { number: 49, abbrev: "ef", name_local: "Efésios", name_canonical: "Ephesians", chapter_count: 6 },
    BookInfo { number: 50, abbrev: "fp", name_local: "Filipenses", name_canonical: "Philippians", chapter_count: 4 },
    BookInfo { number: 51, abbrev: "cl", name_local: "Colossenses", name_canonical: "Colossians", chapter_count: 4 },
    BookInfo { number: 52, abbrev: "1ts", name_local: "1 Tessalonicenses", name_canonical: "1 Thessalonians", chapter_count: 5 },
    BookInfo { number: 53, abbrev: "2ts", name_local: "2 Tessalonicenses", name_canonical: "2 Thessalonians", chapter_count: 3 },
    BookInfo { number: 54, abbrev: "1tm", name_local: "1 Timóteo", name_canonical: "1 Timothy", chapter_count: 6 },
    BookInfo { number: 55, abbrev: "2tm", name_local: "2 Timóteo", name_canonical: "2 Timothy", chapter_count: 4 },
    BookInfo { number: 56, abbrev: "tt", name_local: "Tito", name_canonical: "Titus", chapter_count: 3 },
    BookInfo { number: 57, abbrev: "fm", name_local: "Filemom", name_canonical: "Philemon", chapter_count: 1 },
    BookInfo { number: 58, abbrev: "hb", name_local: "Hebreus", name_canonical: "Hebrews", chapter_count: 13 },
    BookInfo { number: 59, abbrev: "tg", name_local: "Tiago", name_canonical: "James", chapter_count: 5 },
    BookInfo { number: 60, abbrev: "1pe", name_local: "1 Pedro", name_canonical: "1 Peter", chapter_count: 5 },
    BookInfo { number: 61, abbrev: "2pe", name_local: "2 Pedro", name_canonical: "2 Peter", chapter_count: 3 },
    BookInfo { number: 62, abbrev: "1jo", name_local: "1 João", name_canonical: "1 John", chapter_count: 5 },
    BookInfo { number: 63, abbrev: "2jo", name_local: "2 João", name_canonical: "2 John", chapter_count: 1 },
    BookInfo { number: 64, abbrev: "3jo", name_local: "3 João", name_canonical: "3 John", chapter_count: 1 },
    BookInfo { number: 65, abbrev: "jd", name_local: "Judas", name_canonical: "Jude", chapter_count: 1 },
    BookInfo { number: 66, abbrev: "ap", name_local: "Apocalipse", name_canonical: "Revelation", chapter_count: 22 },
];
