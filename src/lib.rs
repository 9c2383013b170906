//! # concord
//!
//! A study engine for Bible texts: tabular ingestion of translation exports
//! into a normalized verse store, Strong's lexicon indexes for Greek and
//! Hebrew, patristic commentary windowing, and a concordance resolver that
//! pairs every citation of a lexicon identifier across a marked and a plain
//! translation.
//!
//! All core structures are built once during [`bootstrap`] and read-only for
//! the rest of the session; every query past bootstrap is a non-throwing
//! lookup over immutable data.

pub mod books;
pub mod bootstrap;
pub mod commentary;
pub mod concordance;
pub mod ingest;
pub mod lexicon;
pub mod store;

pub use bootstrap::{bootstrap, BootstrapError, Catalog, StudyData};
pub use concordance::{Citation, LookupStrategy, Resolver};
pub use store::{VerseRecord, VerseStore};
