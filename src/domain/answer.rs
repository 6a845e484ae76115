// ============================================================
// Layer 3 — Answer Domain Type
// ============================================================
// A student's response to one question.
// `question_id` refers to a Question's id; it does not own it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Id of the question this answers
    pub question_id: u32,

    /// The response text typed by the student
    pub text: String,

    /// Whether the student has handed it in
    pub submitted: bool,

    /// Whether it was marked correct
    pub correct: bool,
}

impl Answer {
    /// An unsubmitted, empty answer for the given question.
    pub fn blank(question_id: u32) -> Self {
        Self {
            question_id,
            text:      String::new(),
            submitted: false,
            correct:   false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_answer() {
        let a = Answer::blank(3);
        assert_eq!(a.question_id, 3);
        assert_eq!(a.text, "");
        assert!(!a.submitted);
        assert!(!a.correct);
    }

    #[test]
    fn test_serialises_question_id_in_camel_case() {
        let json = serde_json::to_value(Answer::blank(3)).unwrap();
        assert_eq!(json["questionId"], 3);
    }
}
