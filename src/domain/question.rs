// ============================================================
// Layer 3 — Question Domain Type
// ============================================================
// One quiz question as written by a quiz author.
//
// Only multiple choice questions carry options. Any operation
// that changes a question's type away from multiple choice must
// leave `options` empty.
//
// Serialised field names follow the question-set file format:
//   { "id": 1, "name": "Addition", "type": "short_answer_question",
//     "body": "What is 2+2?", "expected": "4", "options": [],
//     "points": 1, "published": true }
//
// Reference: Rust Book §5 (Structs), §6 (Enums and Pattern Matching)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of question kinds.
///
/// Adding a variant here forces every exhaustive `match` over
/// `QuestionType` (for example `allows_options`) to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoiceQuestion,
    ShortAnswerQuestion,
}

impl QuestionType {
    /// Whether questions of this kind keep an options list.
    pub fn allows_options(self) -> bool {
        match self {
            QuestionType::MultipleChoiceQuestion => true,
            QuestionType::ShortAnswerQuestion    => false,
        }
    }

    /// The wire tag, as written in question-set files.
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::MultipleChoiceQuestion => "multiple_choice_question",
            QuestionType::ShortAnswerQuestion    => "short_answer_question",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multiple_choice_question" => Ok(QuestionType::MultipleChoiceQuestion),
            "short_answer_question"    => Ok(QuestionType::ShortAnswerQuestion),
            other => Err(format!(
                "unknown question type '{other}' \
                 (expected multiple_choice_question or short_answer_question)"
            )),
        }
    }
}

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, assumed unique within a set
    pub id: u32,

    /// Display name shown in question lists
    pub name: String,

    /// Which kind of question this is
    #[serde(rename = "type")]
    pub kind: QuestionType,

    /// The prompt shown to the student
    pub body: String,

    /// The expected answer text
    pub expected: String,

    /// Choices, meaningful only for multiple choice questions
    pub options: Vec<String>,

    /// Scoring weight
    pub points: u32,

    /// Whether students can see this question
    pub published: bool,
}

impl Question {
    /// Build a blank question: caller picks `id`, `name` and `kind`,
    /// everything else starts at its default.
    ///
    /// Defaults: empty body, empty expected answer, no options,
    /// 1 point, unpublished.
    pub fn blank(id: u32, name: impl Into<String>, kind: QuestionType) -> Self {
        Self {
            id,
            name:      name.into(),
            kind,
            body:      String::new(),
            expected:  String::new(),
            options:   Vec::new(),
            points:    1,
            published: false,
        }
    }

    /// A copy of this question under a new id. Every other field is kept.
    pub fn duplicate(&self, new_id: u32) -> Self {
        Self {
            id: new_id,
            ..self.clone()
        }
    }

    /// True when body, expected answer and options are all empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.expected.is_empty() && self.options.is_empty()
    }
}
