// ============================================================
// Layer 2 - NotesUseCase
// ============================================================
// Everything the user can do with notes that already exist:
//
//   list    → every note, in insertion order
//   view    → one note by index
//   delete  → remove one note by index (out of range: no-op)
//   export  → write one note as TXT or PDF into a directory
//
// Indices are 0-based positions in the store; deleting a note
// shifts later notes down by one.

use anyhow::{bail, Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::domain::note::Note;
use crate::domain::traits::NoteStore;
use crate::infra::exporter::{self, safe_filename, ExportFormat};
use crate::infra::note_store::JsonNoteStore;

pub struct NotesUseCase {
    store: Box<dyn NoteStore>,
}

impl NotesUseCase {
    /// Notes kept in the JSON file at `store_path`
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self::with_store(Box::new(JsonNoteStore::new(store_path)))
    }

    pub fn with_store(store: Box<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<Note>> {
        self.store.list()
    }

    pub fn view(&self, index: usize) -> Result<Note> {
        match self.store.get(index)? {
            Some(note) => Ok(note),
            None       => bail!("Note not found: {index}"),
        }
    }

    /// Returns the removed note, or None when `index` was out of range.
    pub fn delete(&self, index: usize) -> Result<Option<Note>> {
        let removed = self.store.remove_at(index)?;
        match &removed {
            Some(note) => tracing::info!("Deleted note {} ('{}')", index, note.title),
            None       => tracing::warn!("No note at index {}, nothing deleted", index),
        }
        Ok(removed)
    }

    /// Render note `index` and write it to `out_dir`. Returns the file path.
    pub fn export(&self, index: usize, format: ExportFormat, out_dir: &Path) -> Result<PathBuf> {
        let note  = self.view(index)?;
        let bytes = exporter::export(&note, format)?;

        fs::create_dir_all(out_dir)
            .with_context(|| format!("Cannot create output directory '{}'", out_dir.display()))?;

        let path = out_dir.join(safe_filename(&note.title, format.extension()));
        fs::write(&path, &bytes)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::info!("Exported note {} to '{}' ({} bytes)", index, path.display(), bytes.len());
        Ok(path)
    }
}
