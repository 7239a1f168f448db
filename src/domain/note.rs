// ============================================================
// Layer 3 - Note Domain Type
// ============================================================
// A note is what the system keeps for every ingested document:
//
//   title     → shown in listings, used to name export files
//   text      → the full normalised document text
//   summary   → extractive summary (top sentences, in order)
//   keywords  → ranked keyword list, best first
//   filename  → the uploaded source file name
//
// Field names match the JSON written to the note store, so
// existing notes.json files load without migration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    pub filename: String,
}

impl Note {
    pub fn new(
        title:    impl Into<String>,
        text:     impl Into<String>,
        summary:  impl Into<String>,
        keywords: Vec<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            title:    title.into(),
            text:     text.into(),
            summary:  summary.into(),
            keywords,
            filename: filename.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"title": "a.pdf", "filename": "a.pdf"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.title, "a.pdf");
        assert!(note.summary.is_empty());
        assert!(note.keywords.is_empty());
    }

    #[test]
    fn test_field_names_are_stable() {
        let note  = Note::new("t", "x", "s", vec!["k".into()], "f.pdf");
        let value = serde_json::to_value(&note).unwrap();
        for key in ["title", "text", "summary", "keywords", "filename"] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }
    }
}
