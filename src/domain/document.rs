// ============================================================
// Layer 3 - Document Domain Type
// ============================================================
// A single document loaded from disk: a source name and the
// text extracted from it. Plain data, no behaviour.

use serde::{Deserialize, Serialize};

/// A document whose text has already been extracted from its
/// container format (PDF, DOCX, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The filename, kept so the note can name where it came from
    pub source: String,

    /// The extracted, normalised text content
    pub text: String,
}

impl Document {
    /// Create a new Document with a source name and text content.
    ///
    /// Example:
    ///   let doc = Document::new("report.pdf", "Quarterly results...");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// True when extraction produced no usable text
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
