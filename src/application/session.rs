// ============================================================
// Layer 2 — QuestionSession Use Case
// ============================================================
// Runs one question-set operation end to end:
//
//   Step 1: Load the set            (QuestionSource, Layer 6)
//   Step 2: Apply the operation     (queries / transforms / export)
//   Step 3: Optionally save the new set back to the source
//
// The caller (Layer 1) decides how the Outcome is written out.
//
// Reference: Clean Architecture pattern
//            Rust Book §6 (Enums and Pattern Matching)

use anyhow::Result;

use crate::application::{export, queries, transforms};
use crate::application::transforms::OptionSlot;
use crate::domain::answer::Answer;
use crate::domain::question::{Question, QuestionType};
use crate::domain::traits::{QuestionSink, QuestionSource};

// ─── Session Configuration ───────────────────────────────────────────────────
/// Where a session reads its set and where its output goes.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Path of the JSON question-set file
    pub input:    String,
    /// Write rendered output here instead of stdout
    pub output:   Option<String>,
    /// Save a transformed set back over `input`
    pub in_place: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            input:    "questions.json".to_string(),
            output:   None,
            in_place: false,
        }
    }
}

// ─── Operation ───────────────────────────────────────────────────────────────
/// One call into the question-set operations, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Published,
    NonEmpty,
    Find { id: u32 },
    Remove { id: u32 },
    Names,
    Points { published_only: bool },
    Csv,
    Answers,
    PublishAll,
    SameType,
    Add { id: u32, name: String, kind: QuestionType },
    Rename { id: u32, name: String },
    ChangeType { id: u32, kind: QuestionType },
    EditOption { id: u32, slot: OptionSlot, option: String },
    Duplicate { id: u32, new_id: u32 },
}

// ─── Outcome ─────────────────────────────────────────────────────────────────
/// Whatever an operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Questions(Vec<Question>),
    Question(Option<Question>),
    Answers(Vec<Answer>),
    Names(Vec<String>),
    Points(u64),
    SameType(bool),
    Csv(String),
}

impl Outcome {
    /// Text form for printing: JSON for record sequences,
    /// plain text for scalars and CSV.
    pub fn render(&self) -> Result<String> {
        Ok(match self {
            Outcome::Questions(qs)       => serde_json::to_string_pretty(qs)?,
            Outcome::Question(Some(q))   => serde_json::to_string_pretty(q)?,
            Outcome::Question(None)      => "not found".to_string(),
            Outcome::Answers(answers)    => serde_json::to_string_pretty(answers)?,
            Outcome::Names(names)        => names.join("\n"),
            Outcome::Points(points)      => points.to_string(),
            Outcome::SameType(same)      => same.to_string(),
            Outcome::Csv(csv)            => csv.clone(),
        })
    }
}

/// Apply `op` to `questions`. Pure: no I/O and the input is not modified.
pub fn apply(questions: &[Question], op: &Operation) -> Result<Outcome> {
    let outcome = match op {
        Operation::Published  => Outcome::Questions(queries::published(questions)),
        Operation::NonEmpty   => Outcome::Questions(queries::non_empty(questions)),
        Operation::Find { id } => Outcome::Question(queries::find_by_id(questions, *id)),
        Operation::Remove { id } => Outcome::Questions(queries::remove_by_id(questions, *id)),
        Operation::Names      => Outcome::Names(queries::names(questions)),
        Operation::Points { published_only: true }  => {
            Outcome::Points(queries::total_published_points(questions))
        }
        Operation::Points { published_only: false } => {
            Outcome::Points(queries::total_points(questions))
        }
        Operation::Csv        => Outcome::Csv(export::to_csv(questions)),
        Operation::Answers    => Outcome::Answers(transforms::to_answers(questions)),
        Operation::PublishAll => Outcome::Questions(transforms::publish_all(questions)),
        Operation::SameType   => Outcome::SameType(queries::same_type(questions)),
        Operation::Add { id, name, kind } => {
            Outcome::Questions(transforms::add_new(questions, *id, name.as_str(), *kind))
        }
        Operation::Rename { id, name } => {
            Outcome::Questions(transforms::rename_by_id(questions, *id, name.as_str()))
        }
        Operation::ChangeType { id, kind } => {
            Outcome::Questions(transforms::change_type_by_id(questions, *id, *kind))
        }
        Operation::EditOption { id, slot, option } => {
            Outcome::Questions(transforms::edit_option(questions, *id, *slot, option)?)
        }
        Operation::Duplicate { id, new_id } => {
            Outcome::Questions(transforms::duplicate_in_array(questions, *id, *new_id))
        }
    };
    Ok(outcome)
}

// ─── QuestionSession ─────────────────────────────────────────────────────────
/// Loads a set from a store, applies one operation, and can
/// write a transformed set back to the same store.
pub struct QuestionSession<S> {
    store:    S,
    in_place: bool,
}

impl<S: QuestionSource + QuestionSink> QuestionSession<S> {
    pub fn new(store: S, in_place: bool) -> Self {
        Self { store, in_place }
    }

    /// Run `op` against the stored set and return its outcome.
    ///
    /// With `in_place` set, an outcome that is a question set is saved
    /// back to the store; every other outcome leaves the store alone.
    pub fn execute(&self, op: &Operation) -> Result<Outcome> {
        // ── Step 1: Load ─────────────────────────────────────────────────────
        let questions = self.store.load_all()?;
        tracing::debug!("Loaded {} questions", questions.len());

        // ── Step 2: Apply ────────────────────────────────────────────────────
        let outcome = apply(&questions, op)?;

        // ── Step 3: Save ─────────────────────────────────────────────────────
        if self.in_place {
            match &outcome {
                Outcome::Questions(updated) => {
                    self.store.save_all(updated)?;
                    tracing::info!("Saved {} questions back to the store", updated.len());
                }
                _ => tracing::warn!("{:?} does not produce a question set; nothing saved", op),
            }
        }

        Ok(outcome)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use crate::application::fixtures::sample_questions;

    /// In-memory store that records every save.
    struct MemoryStore {
        questions: RefCell<Vec<Question>>,
        saves:     RefCell<usize>,
    }

    impl MemoryStore {
        fn new(questions: Vec<Question>) -> Self {
            Self { questions: RefCell::new(questions), saves: RefCell::new(0) }
        }
    }

    impl QuestionSource for MemoryStore {
        fn load_all(&self) -> Result<Vec<Question>> {
            Ok(self.questions.borrow().clone())
        }
    }

    impl QuestionSink for MemoryStore {
        fn save_all(&self, questions: &[Question]) -> Result<()> {
            *self.questions.borrow_mut() = questions.to_vec();
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }

    #[test]
    fn test_apply_scalars() {
        let qs = sample_questions();
        assert_eq!(apply(&qs, &Operation::Points { published_only: false }).unwrap(), Outcome::Points(5));
        assert_eq!(apply(&qs, &Operation::Points { published_only: true }).unwrap(), Outcome::Points(2));
        assert_eq!(apply(&qs, &Operation::SameType).unwrap(), Outcome::SameType(false));
    }

    #[test]
    fn test_apply_edit_option_error_propagates() {
        let qs = sample_questions();
        let op = Operation::EditOption { id: 5, slot: OptionSlot::At(9), option: "x".into() };
        assert!(apply(&qs, &op).is_err());
    }

    #[test]
    fn test_render() {
        assert_eq!(Outcome::Points(5).render().unwrap(), "5");
        assert_eq!(
            Outcome::Points(u64::from(u32::MAX) + 1).render().unwrap(),
            "4294967296"
        );
        assert_eq!(Outcome::SameType(true).render().unwrap(), "true");
        assert_eq!(Outcome::Question(None).render().unwrap(), "not found");
        assert_eq!(
            Outcome::Names(vec!["a".into(), "b".into()]).render().unwrap(),
            "a\nb"
        );

        let rendered = Outcome::Answers(vec![Answer::blank(1)]).render().unwrap();
        let parsed: Vec<Answer> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, vec![Answer::blank(1)]);
    }

    #[test]
    fn test_execute_without_in_place_does_not_save() {
        let store   = MemoryStore::new(sample_questions());
        let session = QuestionSession::new(store, false);

        let outcome = session.execute(&Operation::PublishAll).unwrap();
        assert!(matches!(outcome, Outcome::Questions(ref qs) if qs.iter().all(|q| q.published)));
        assert_eq!(*session.store.saves.borrow(), 0);
        assert_eq!(*session.store.questions.borrow(), sample_questions());
    }

    #[test]
    fn test_execute_in_place_saves_transformed_set() {
        let store   = MemoryStore::new(sample_questions());
        let session = QuestionSession::new(store, true);

        session.execute(&Operation::Duplicate { id: 1, new_id: 100 }).unwrap();
        assert_eq!(*session.store.saves.borrow(), 1);
        assert_eq!(session.store.questions.borrow().len(), 5);
        assert_eq!(session.store.questions.borrow()[1].id, 100);
    }

    #[test]
    fn test_execute_in_place_skips_scalar_outcomes() {
        let store   = MemoryStore::new(sample_questions());
        let session = QuestionSession::new(store, true);

        session.execute(&Operation::Csv).unwrap();
        assert_eq!(*session.store.saves.borrow(), 0);
    }
}
