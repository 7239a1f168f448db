// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The seams between the pure summarisation core and the
// collaborators that touch files or third-party libraries.
//
// The application layer only sees these traits:
//   - FileLoader        implements DocumentSource
//   - JsonNoteStore     implements NoteStore
//   - YakeKeywordRanker and FrequencyKeywordRanker
//                       implement KeywordRanker
//
// so tests can swap in an in-memory store or a deterministic
// keyword ranker without changing the use cases.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::path::Path;

use crate::domain::document::Document;
use crate::domain::note::Note;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can turn a file into a Document.
pub trait DocumentSource {
    /// Load one document. Fails on unreadable or unsupported files.
    fn load(&self, path: &Path) -> Result<Document>;
}

// ─── NoteStore ────────────────────────────────────────────────────────────────
/// Ordered collection of notes. Indices are 0-based list positions,
/// so removing a note shifts every later note down by one.
pub trait NoteStore {
    /// All notes in insertion order
    fn list(&self) -> Result<Vec<Note>>;

    /// Append a note and return its index
    fn append(&self, note: Note) -> Result<usize>;

    /// Remove the note at `index`. Returns None when out of range.
    fn remove_at(&self, index: usize) -> Result<Option<Note>>;

    /// The note at `index`, if any
    fn get(&self, index: usize) -> Result<Option<Note>> {
        Ok(self.list()?.into_iter().nth(index))
    }
}

// ─── KeywordRanker ────────────────────────────────────────────────────────────
/// Any component that can rank the keywords of a text.
pub trait KeywordRanker {
    /// At most `top_k` keywords, best first. Empty text gives an empty list.
    fn extract_keywords(&self, text: &str, top_k: usize) -> Vec<String>;
}
