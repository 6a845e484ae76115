// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-system adapters around the pure core:
//
//   store.rs  — JSON question-set file
//               Implements QuestionSource and QuestionSink so
//               the session can load a set and save it back.
//
//   output.rs — Writes rendered results to a file or stdout.
//
// The application layer only sees the domain traits, so an
// in-memory store can stand in for the file during tests.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Rust Book §12 (I/O and File Handling)

/// JSON question-set file store
pub mod store;

/// Result writer (stdout or file)
pub mod output;
