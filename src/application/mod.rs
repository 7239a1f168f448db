// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// user goal (ingest a document, or manage stored notes).
//
// Rules for this layer:
//   - No summarisation math here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - File formats live in Layer 4 (loading) and Layer 6 (storage, export)
//   - Only workflow coordination
//
// Collaborators arrive as trait objects, so tests can run the
// workflows against an in-memory store.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Load → summarise → rank keywords → store
pub mod ingest_use_case;

// List / view / delete / export stored notes
pub mod notes_use_case;
