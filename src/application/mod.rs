// ============================================================
// Layer 2 — Application / QuestionSet Operations
// ============================================================
// The pure operations over question sets, grouped by what they do:
//
//   queries.rs    — read-only filters, lookups, and sums
//   transforms.rs — produce a new question or answer set
//   export.rs     — CSV serialisation
//
// session.rs wires one operation to a question store for the CLI.
//
// Reference: Rust Book §7 (Module System)

pub mod queries;

pub mod transforms;

pub mod export;

// Load → apply → save workflow used by the CLI
pub mod session;

#[cfg(test)]
mod fixtures;
