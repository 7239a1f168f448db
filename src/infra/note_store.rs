// ============================================================
// Layer 6 - JSON Note Store
// ============================================================
// Keeps every note in a single pretty-printed JSON array:
//
//   notes.json
//     [
//       { "title": ..., "text": ..., "summary": ...,
//         "keywords": [...], "filename": ... },
//       ...
//     ]
//
// Reads are forgiving: a missing file is an empty store, and
// a file that no longer parses is logged and treated as empty
// so one bad write cannot lock the user out of the tool.
// Writes replace the whole file.
//
// There is no locking; two processes writing at once can lose
// a note.
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::note::Note;
use crate::domain::traits::NoteStore;

pub struct JsonNoteStore {
    /// Full path to the JSON file
    path: PathBuf,
}

impl JsonNoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and decode the whole file.
    fn load(&self) -> Result<Vec<Note>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read notes from '{}'", self.path.display()))?;

        match serde_json::from_str::<Vec<Note>>(&json) {
            Ok(notes) => Ok(notes),
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable note store '{}': {}",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Encode and write the whole list, creating parent directories.
    fn save(&self, notes: &[Note]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Cannot create directory '{}'", parent.display())
                })?;
            }
        }

        // to_string_pretty keeps non-ASCII text as-is
        let json = serde_json::to_string_pretty(notes)?;

        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write notes to '{}'", self.path.display()))?;

        tracing::debug!("Saved {} notes to '{}'", notes.len(), self.path.display());
        Ok(())
    }
}

impl NoteStore for JsonNoteStore {
    fn list(&self) -> Result<Vec<Note>> {
        self.load()
    }

    fn append(&self, note: Note) -> Result<usize> {
        let mut notes = self.load()?;
        notes.push(note);
        self.save(&notes)?;
        Ok(notes.len() - 1)
    }

    fn remove_at(&self, index: usize) -> Result<Option<Note>> {
        let mut notes = self.load()?;
        if index >= notes.len() {
            return Ok(None);
        }

        let removed = notes.remove(index);
        self.save(&notes)?;
        Ok(Some(removed))
    }
}
