//! Application bootstrap
//!
//! Loads every core data source from a local data directory. Translation
//! parses fan out as concurrent tasks and fail fast: the first failure
//! aborts the remaining tasks and propagates, and no later result is
//! surfaced. Dictionary and commentary loads follow in any order; nothing
//! interacts with both the store and the lexicon before the resolver runs.
//!
//! A failed bootstrap is terminal for the session; there is no partial-data
//! degraded mode for the core sources.

use std::fmt;
use std::path::{Path, PathBuf};

use tokio::task::JoinSet;

use crate::commentary::CommentarySet;
use crate::concordance::{LookupStrategy, Resolver};
use crate::ingest::{self, IngestError};
use crate::lexicon::{Language, LexiconIndex};
use crate::store::VerseStore;

/// One translation named by the catalog.
#[derive(Debug, Clone)]
pub struct TranslationSpec {
    pub id: String,
    pub name: String,
}

impl TranslationSpec {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Names the data sources of one data directory and designates which
/// translation carries inline markers and which is the reading counterpart.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub translations: Vec<TranslationSpec>,
    /// Translation whose verse text embeds citation markers
    pub marked_id: String,
    /// Unmarked translation used as the human-readable counterpart
    pub plain_id: String,
    pub greek_file: String,
    pub hebrew_file: String,
    pub commentary_file: String,
}

impl Catalog {
    /// The stock catalog: a Strong's-annotated King James as the marked
    /// translation and Almeida Revista e Corrigida as the reading text.
    pub fn with_defaults() -> Self {
        Self {
            translations: vec![
                TranslationSpec::new("kjv_strongs", "King James (Strong)"),
                TranslationSpec::new("almeida_rc", "Almeida Revista e Corrigida"),
            ],
            marked_id: "kjv_strongs".to_string(),
            plain_id: "almeida_rc".to_string(),
            greek_file: "strongs-greek-dictionary.json".to_string(),
            hebrew_file: "strongs-hebrew-dictionary.json".to_string(),
            commentary_file: "commentaries.json".to_string(),
        }
    }

    fn translation_path(&self, data_dir: &Path, id: &str) -> PathBuf {
        data_dir.join(format!("{}.csv", id))
    }
}

/// Which kind of data source failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Translation,
    Dictionary,
    Commentary,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Translation => write!(f, "bible translation"),
            SourceKind::Dictionary => write!(f, "dictionary"),
            SourceKind::Commentary => write!(f, "commentary"),
        }
    }
}

/// A bootstrap failure, naming the source that caused it.
#[derive(Debug)]
pub enum BootstrapError {
    /// Reading a source from disk failed
    Fetch {
        kind: SourceKind,
        name: String,
        message: String,
    },
    /// A translation's tabular data was structurally unusable
    Ingest(IngestError),
    /// A JSON source was malformed
    Parse {
        kind: SourceKind,
        name: String,
        message: String,
    },
    /// A loading task itself failed
    TaskFailed(String),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Fetch { kind, name, message } => {
                write!(f, "Failed to load {} '{}': {}", kind, name, message)
            }
            BootstrapError::Ingest(err) => write!(f, "Failed to load bible translation: {}", err),
            BootstrapError::Parse { kind, name, message } => {
                write!(f, "Failed to parse {} '{}': {}", kind, name, message)
            }
            BootstrapError::TaskFailed(message) => {
                write!(f, "A data loading task failed: {}", message)
            }
        }
    }
}

impl std::error::Error for BootstrapError {}

impl From<IngestError> for BootstrapError {
    fn from(err: IngestError) -> Self {
        BootstrapError::Ingest(err)
    }
}

/// Everything the session works against. Write-once at bootstrap, read-only
/// thereafter; consumers receive references rather than reaching for globals.
#[derive(Debug)]
pub struct StudyData {
    pub store: VerseStore,
    pub greek: LexiconIndex,
    pub hebrew: LexiconIndex,
    pub commentaries: CommentarySet,
    pub catalog: Catalog,
}

impl StudyData {
    /// A concordance resolver wired to the catalog's marked and plain
    /// translations.
    pub fn resolver(&self, strategy: LookupStrategy) -> Resolver<'_> {
        Resolver::new(
            &self.store,
            &self.catalog.marked_id,
            &self.catalog.plain_id,
            strategy,
        )
    }

    /// The lexicon index for the given language.
    pub fn lexicon(&self, language: Language) -> &LexiconIndex {
        match language {
            Language::Greek => &self.greek,
            Language::Hebrew => &self.hebrew,
        }
    }
}

/// Load every source the catalog names from `data_dir`.
pub async fn bootstrap(data_dir: &Path, catalog: Catalog) -> Result<StudyData, BootstrapError> {
    tracing::info!(dir = %data_dir.display(), "loading bible translations");
    let mut tasks = JoinSet::new();
    for spec in &catalog.translations {
        let path = catalog.translation_path(data_dir, &spec.id);
        let id = spec.id.clone();
        tasks.spawn(async move {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| BootstrapError::Fetch {
                    kind: SourceKind::Translation,
                    name: id.clone(),
                    message: e.to_string(),
                })?;
            ingest::parse_translation(&id, &raw).map_err(BootstrapError::from)
        });
    }

    let mut store = VerseStore::new();
    while let Some(joined) = tasks.join_next().await {
        let parsed = match joined {
            Ok(Ok(parsed)) => parsed,
            Ok(Err(err)) => {
                tasks.abort_all();
                return Err(err);
            }
            Err(join_err) => {
                tasks.abort_all();
                return Err(BootstrapError::TaskFailed(join_err.to_string()));
            }
        };
        tracing::debug!(
            translation = %parsed.translation_id,
            verses = parsed.records.len(),
            "translation ingested"
        );
        let ingest::ParsedTranslation {
            translation_id,
            records,
        } = parsed;
        store.load(&translation_id, records);
    }

    tracing::info!("loading dictionaries");
    let greek = load_lexicon(data_dir, &catalog.greek_file, Language::Greek).await?;
    let hebrew = load_lexicon(data_dir, &catalog.hebrew_file, Language::Hebrew).await?;

    tracing::info!("loading commentaries");
    let commentaries = load_commentaries(data_dir, &catalog.commentary_file).await?;

    Ok(StudyData {
        store,
        greek,
        hebrew,
        commentaries,
        catalog,
    })
}

async fn load_lexicon(
    data_dir: &Path,
    file: &str,
    language: Language,
) -> Result<LexiconIndex, BootstrapError> {
    let raw = tokio::fs::read_to_string(data_dir.join(file))
        .await
        .map_err(|e| BootstrapError::Fetch {
            kind: SourceKind::Dictionary,
            name: file.to_string(),
            message: e.to_string(),
        })?;
    let index = LexiconIndex::from_json(language, &raw).map_err(|e| BootstrapError::Parse {
        kind: SourceKind::Dictionary,
        name: file.to_string(),
        message: e.to_string(),
    })?;
    tracing::debug!(%language, entries = index.len(), "lexicon indexed");
    Ok(index)
}

async fn load_commentaries(data_dir: &Path, file: &str) -> Result<CommentarySet, BootstrapError> {
    let raw = tokio::fs::read_to_string(data_dir.join(file))
        .await
        .map_err(|e| BootstrapError::Fetch {
            kind: SourceKind::Commentary,
            name: file.to_string(),
            message: e.to_string(),
        })?;
    let set = CommentarySet::from_json(&raw).map_err(|e| BootstrapError::Parse {
        kind: SourceKind::Commentary,
        name: file.to_string(),
        message: e.to_string(),
    })?;
    tracing::debug!(entries = set.len(), "commentaries loaded");
    Ok(set)
}
