// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// Lookups that miss are never errors (they are no-ops or None).
// The only failure is addressing an option slot that does not exist.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionSetError {
    #[error("option index {index} out of range for question {question_id} ({len} options)")]
    OptionIndexOutOfRange {
        question_id: u32,
        index:       usize,
        len:         usize,
    },

    #[error("invalid option index {0}: use -1 to append or a position >= 0")]
    InvalidOptionIndex(i64),
}
