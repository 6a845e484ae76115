// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer loads and saves question sets through
// these traits, so it never knows whether the set lives in a
// JSON file, in memory, or somewhere else.
//
// Implementations:
//   - JsonQuestionStore (infra) → a JSON array on disk
//   - (tests) MemoryStore        → a Vec behind a RefCell
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::question::Question;

// ─── QuestionSource ───────────────────────────────────────────────────────────
/// Anything that can produce an ordered question set.
pub trait QuestionSource {
    fn load_all(&self) -> Result<Vec<Question>>;
}

// ─── QuestionSink ─────────────────────────────────────────────────────────────
/// Anything that can persist an ordered question set,
/// replacing whatever was stored before.
pub trait QuestionSink {
    fn save_all(&self, questions: &[Question]) -> Result<()>;
}
