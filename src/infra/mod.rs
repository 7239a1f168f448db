// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Adapters around files and third-party libraries:
//
//   note_store.rs  - JSON-file NoteStore
//                    The whole note list lives in one
//                    pretty-printed JSON array on disk.
//
//   yake_ranker.rs - YAKE KeywordRanker
//                    Statistical keyword extraction from the
//                    keyword_extraction crate.
//
//   exporter.rs    - TXT and PDF export
//                    Fixed plain-text layout, and an A4 PDF
//                    written with lopdf.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// JSON file note persistence
pub mod note_store;

/// YAKE keyword ranking
pub mod yake_ranker;

/// TXT / PDF note export
pub mod exporter;
