// ============================================================
// Layer 2 — Read-only Queries
// ============================================================
// Filters, lookups, and aggregates over a question set.
//
// Every function borrows the input slice and returns owned data,
// so the caller's set is untouched no matter what happens here.
//
// Reference: Rust Book §13 (Iterators and Closures)

use crate::domain::question::Question;

/// Questions with `published == true`, in their original order.
pub fn published(questions: &[Question]) -> Vec<Question> {
    questions.iter().filter(|q| q.published).cloned().collect()
}

/// Every question except the empty ones
/// (empty body, empty expected answer, and no options).
pub fn non_empty(questions: &[Question]) -> Vec<Question> {
    questions.iter().filter(|q| !q.is_empty()).cloned().collect()
}

/// The first question with the given id, or `None`.
pub fn find_by_id(questions: &[Question], id: u32) -> Option<Question> {
    questions.iter().find(|q| q.id == id).cloned()
}

/// The set without any question carrying `id`.
/// All matches are dropped, not just the first.
pub fn remove_by_id(questions: &[Question], id: u32) -> Vec<Question> {
    questions.iter().filter(|q| q.id != id).cloned().collect()
}

/// Question names, same order and length as the input.
pub fn names(questions: &[Question]) -> Vec<String> {
    questions.iter().map(|q| q.name.clone()).collect()
}

/// Sum of all points. Widened to u64 so no set of u32 weights can overflow.
pub fn total_points(questions: &[Question]) -> u64 {
    questions.iter().map(|q| u64::from(q.points)).sum()
}

/// Sum of points over published questions only.
pub fn total_published_points(questions: &[Question]) -> u64 {
    questions
        .iter()
        .filter(|q| q.published)
        .map(|q| u64::from(q.points))
        .sum()
}

/// Whether every question shares one type. Vacuously true when empty.
///
/// Compares each element against the first rather than probing for
/// specific variants, so it stays correct as `QuestionType` grows.
pub fn same_type(questions: &[Question]) -> bool {
    match questions.split_first() {
        None                => true,
        Some((first, rest)) => rest.iter().all(|q| q.kind == first.kind),
    }
}
