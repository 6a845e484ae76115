// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// The records every other layer passes around:
//   - Question and its closed QuestionType tag
//   - Answer, one response slot per question
//   - QuestionSetError for the one operation that can fail
//   - QuestionSource / QuestionSink for anything that stores sets
//
// Rules for this layer:
//   - NO file I/O
//   - NO clap or tracing-subscriber types
//   - Only plain structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// A quiz question and its type tag
pub mod question;

// A response record tied to a question id
pub mod answer;

// Typed failures raised by the pure operations
pub mod error;

// Storage abstractions implemented by the infra layer
pub mod traits;
