// ============================================================
// Layer 2 - IngestUseCase
// ============================================================
// Turns one document into a stored note:
//
//   Step 1: Check a file was given
//   Step 2: Load + clean the text        (Layer 4 - data)
//   Step 3: Extractive summary           (Layer 5 - summary)
//   Step 4: Rank keywords                (KeywordRanker)
//   Step 5: Keep a copy of the upload    (uploads directory)
//   Step 6: Append the note              (NoteStore)
//
// `preview` runs steps 1-4 only and stores nothing.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};

use crate::data::loader::FileLoader;
use crate::domain::note::Note;
use crate::domain::traits::{DocumentSource, KeywordRanker, NoteStore};
use crate::infra::note_store::JsonNoteStore;
use crate::infra::yake_ranker::YakeKeywordRanker;
use crate::summary::keywords::FrequencyKeywordRanker;
use crate::summary::selector::DEFAULT_MAX_SENTENCES;
use crate::summary::summarizer::{SummaryConfig, Summarizer, DEFAULT_MAX_INPUT_BYTES};

/// Default number of keywords kept per note
pub const DEFAULT_TOP_KEYWORDS: usize = 12;

/// Which KeywordRanker builds the note's keyword list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMethod {
    /// Statistical keyphrases of up to three words
    #[default]
    Yake,
    /// Single words by occurrence count
    Frequency,
}

impl KeywordMethod {
    fn ranker(self) -> Box<dyn KeywordRanker> {
        match self {
            KeywordMethod::Yake      => Box::new(YakeKeywordRanker::new()),
            KeywordMethod::Frequency => Box::new(FrequencyKeywordRanker::new()),
        }
    }
}

// ─── Ingest Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    pub store_path:      String,
    /// Where uploaded files are copied; None keeps no copy
    pub uploads_dir:     Option<String>,
    pub max_sentences:   usize,
    pub top_keywords:    usize,
    pub max_input_bytes: usize,
    pub keyword_method:  KeywordMethod,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            store_path:      "notes.json".to_string(),
            uploads_dir:     Some("uploads".to_string()),
            max_sentences:   DEFAULT_MAX_SENTENCES,
            top_keywords:    DEFAULT_TOP_KEYWORDS,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            keyword_method:  KeywordMethod::default(),
        }
    }
}

impl IngestConfig {
    fn summary_config(&self) -> SummaryConfig {
        SummaryConfig {
            max_sentences:   self.max_sentences,
            max_input_bytes: self.max_input_bytes,
        }
    }
}

/// Summary and keywords for a document, without a stored note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub source:    String,
    /// Normalised document text
    pub text:      String,
    /// Every sentence of the text, in document order
    pub sentences: Vec<String>,
    pub summary:   String,
    pub keywords:  Vec<String>,
}

/// The note that was stored and its index in the store
#[derive(Debug, Clone)]
pub struct IngestOutcome {
    pub index: usize,
    pub note:  Note,
}

// ─── IngestUseCase ────────────────────────────────────────────────────────────
pub struct IngestUseCase {
    config:     IngestConfig,
    summarizer: Summarizer,
    source:     Box<dyn DocumentSource>,
    store:      Box<dyn NoteStore>,
    ranker:     Box<dyn KeywordRanker>,
}

impl IngestUseCase {
    /// Wire up the default collaborators: file loader, JSON store and
    /// the configured keyword ranker
    pub fn new(config: IngestConfig) -> Self {
        let store  = JsonNoteStore::new(&config.store_path);
        let ranker = config.keyword_method.ranker();
        Self::with_parts(config, Box::new(FileLoader::new()), Box::new(store), ranker)
    }

    pub fn with_parts(
        config: IngestConfig,
        source: Box<dyn DocumentSource>,
        store:  Box<dyn NoteStore>,
        ranker: Box<dyn KeywordRanker>,
    ) -> Self {
        let summarizer = Summarizer::new(config.summary_config());
        Self { config, summarizer, source, store, ranker }
    }

    /// Summarise a document and rank its keywords without storing anything
    pub fn preview(&self, path: &Path) -> Result<Preview> {
        if path.as_os_str().is_empty() {
            bail!("No file selected");
        }

        tracing::info!("Loading '{}'", path.display());
        let doc = self.source.load(path)?;
        if doc.is_empty() {
            tracing::warn!("No text could be extracted from '{}'", doc.source);
        }

        let sentences = self.summarizer.sentences(&doc.text);
        let summary   = self.summarizer.summarize(&doc.text);
        let keywords  = self.ranker.extract_keywords(&doc.text, self.config.top_keywords);
        tracing::info!(
            "Summarised '{}' into {} chars with {} keywords",
            doc.source,
            summary.len(),
            keywords.len()
        );

        Ok(Preview { source: doc.source, text: doc.text, sentences, summary, keywords })
    }

    /// Load, summarise, rank, copy and store one document
    pub fn execute(&self, path: &Path) -> Result<IngestOutcome> {
        if path.as_os_str().is_empty() {
            bail!("No file selected");
        }

        let doc      = self.source.load(path)?;
        let summary  = self.summarizer.summarize(&doc.text);
        let keywords = self.ranker.extract_keywords(&doc.text, self.config.top_keywords);

        if let Some(dir) = &self.config.uploads_dir {
            let copied = keep_upload(path, Path::new(dir))?;
            tracing::debug!("Kept upload at '{}'", copied.display());
        }

        let note  = Note::new(&doc.source, doc.text, summary, keywords, &doc.source);
        let index = self.store.append(note.clone())?;

        tracing::info!("Stored note {} for '{}'", index, note.title);
        Ok(IngestOutcome { index, note })
    }
}

/// Copy `path` into `dir` under its own file name.
fn keep_upload(path: &Path, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create uploads directory '{}'", dir.display()))?;

    let name = path
        .file_name()
        .with_context(|| format!("'{}' has no file name", path.display()))?;
    let target = dir.join(name);

    // Copying a file onto itself would truncate it
    let same_file = match (fs::canonicalize(path), fs::canonicalize(&target)) {
        (Ok(a), Ok(b)) => a == b,
        _              => false,
    };
    if !same_file {
        fs::copy(path, &target).with_context(|| {
            format!("Cannot copy '{}' to '{}'", path.display(), target.display())
        })?;
    }

    Ok(target)
}
