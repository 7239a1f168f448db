// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything between a file on disk and a list of sentences.
//
// The pipeline flows in this order:
//
//   .pdf / .docx / .txt
//       │
//       ▼
//   FileLoader         → reads the file, extracts raw text
//       │
//       ▼
//   TextNormalizer     → strips markup, cid noise, NULs, whitespace
//       │
//       ▼
//   SentenceSegmenter  → splits clean text into sentences
//
// Sentences then flow into Layer 5 (summary) for scoring.

/// Reads PDF, DOCX and plain-text files
pub mod loader;

/// Cleans and normalises raw extracted text
pub mod normalizer;

/// Splits normalised text into sentences
pub mod segmenter;
