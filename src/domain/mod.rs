// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust structs and traits that define the core concepts
// of the system.
//
// Rules for this layer:
//   - NO file I/O
//   - NO third-party document or keyword libraries
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A loaded document from disk
pub mod document;

// A persisted note (summary + keywords + full text)
pub mod note;

// Core abstractions (traits) that other layers implement
pub mod traits;
