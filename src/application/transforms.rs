// ============================================================
// Layer 2 — Transformations
// ============================================================
// Operations that produce a new question set (or answer set)
// from an existing one.
//
// Nothing here mutates the caller's slice. Where a single record
// changes, the whole record is rebuilt in the output Vec, and an
// edited options list is a fresh Vec, so no nested data is shared
// with the input.
//
// Target ids that match nothing are not errors: the result is an
// unchanged copy of the input.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Rust Book §9  (Recoverable Errors with Result)

use crate::domain::answer::Answer;
use crate::domain::error::QuestionSetError;
use crate::domain::question::{Question, QuestionType};

/// Where `edit_option` writes the new option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSlot {
    /// Add to the end of the options list
    Append,
    /// Replace the option at this position, which must already exist
    At(usize),
}

/// `-1` means append; any non-negative number is a position.
impl TryFrom<i64> for OptionSlot {
    type Error = QuestionSetError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        match index {
            -1 => Ok(OptionSlot::Append),
            n if n >= 0 => usize::try_from(n)
                .map(OptionSlot::At)
                .map_err(|_| QuestionSetError::InvalidOptionIndex(n)),
            n => Err(QuestionSetError::InvalidOptionIndex(n)),
        }
    }
}

/// One blank answer per question, in the same order.
pub fn to_answers(questions: &[Question]) -> Vec<Answer> {
    questions.iter().map(|q| Answer::blank(q.id)).collect()
}

/// Every question with `published` forced to true.
pub fn publish_all(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .map(|q| Question { published: true, ..q.clone() })
        .collect()
}

/// The set with a blank question appended at the end.
pub fn add_new(
    questions: &[Question],
    id:        u32,
    name:      impl Into<String>,
    kind:      QuestionType,
) -> Vec<Question> {
    let mut out = questions.to_vec();
    out.push(Question::blank(id, name, kind));
    out
}

pub fn rename_by_id(
    questions: &[Question],
    target_id: u32,
    new_name:  impl Into<String>,
) -> Vec<Question> {
    warn_if_missing(questions, target_id, "rename");
    let new_name = new_name.into();
    questions
        .iter()
        .map(|q| {
            if q.id == target_id {
                Question { name: new_name.clone(), ..q.clone() }
            } else {
                q.clone()
            }
        })
        .collect()
}

/// Change the type of the matching question.
/// Its options are cleared unless the new type keeps options.
pub fn change_type_by_id(
    questions: &[Question],
    target_id: u32,
    new_kind:  QuestionType,
) -> Vec<Question> {
    warn_if_missing(questions, target_id, "change type");
    questions
        .iter()
        .map(|q| {
            if q.id != target_id {
                return q.clone();
            }
            let options = if new_kind.allows_options() {
                q.options.clone()
            } else {
                Vec::new()
            };
            Question { kind: new_kind, options, ..q.clone() }
        })
        .collect()
}

/// Append or replace one option on the matching question.
///
/// Fails with `OptionIndexOutOfRange` when `slot` is `At(i)` and the
/// matched question has no option at `i`; the input is untouched
/// either way. A target id that matches nothing returns an unchanged
/// copy.
pub fn edit_option(
    questions:  &[Question],
    target_id:  u32,
    slot:       OptionSlot,
    new_option: &str,
) -> Result<Vec<Question>, QuestionSetError> {
    warn_if_missing(questions, target_id, "edit option");
    questions
        .iter()
        .map(|q| {
            if q.id != target_id {
                return Ok(q.clone());
            }
            let options = with_option(q, slot, new_option)?;
            Ok(Question { options, ..q.clone() })
        })
        .collect()
}

/// A new options list for `q` with `new_option` written into `slot`.
fn with_option(q: &Question, slot: OptionSlot, new_option: &str) -> Result<Vec<String>, QuestionSetError> {
    let mut options = q.options.clone();
    match slot {
        OptionSlot::Append => options.push(new_option.to_string()),
        OptionSlot::At(index) => {
            let len = options.len();
            let existing = options
                .get_mut(index)
                .ok_or(QuestionSetError::OptionIndexOutOfRange {
                    question_id: q.id,
                    index,
                    len,
                })?;
            *existing = new_option.to_string();
        }
    }
    Ok(options)
}

/// Insert a copy of the first question with `target_id`, under `new_id`,
/// directly after it. Later questions shift back by one.
pub fn duplicate_in_array(questions: &[Question], target_id: u32, new_id: u32) -> Vec<Question> {
    let mut out = questions.to_vec();
    match questions.iter().position(|q| q.id == target_id) {
        Some(index) => {
            out.insert(index + 1, questions[index].duplicate(new_id));
            tracing::debug!("Duplicated question {} as {} at position {}", target_id, new_id, index + 1);
        }
        None => warn_if_missing(questions, target_id, "duplicate"),
    }
    out
}

fn warn_if_missing(questions: &[Question], target_id: u32, action: &str) {
    if !questions.iter().any(|q| q.id == target_id) {
        tracing::warn!("No question with id {} to {}; set left unchanged", target_id, action);
    }
}
