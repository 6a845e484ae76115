// ============================================================
// Layer 6 — JSON Question Store
// ============================================================
// Reads and writes a question set as a JSON array:
//
//   [
//     { "id": 1, "name": "Addition", "type": "short_answer_question",
//       "body": "What is 2+2?", "expected": "4", "options": [],
//       "points": 1, "published": true },
//     ...
//   ]
//
// A missing file is an error, not an empty set, so a typo in
// --input never looks like an empty quiz.
//
// Saving writes to a sibling temp file and renames it over the
// target so a failed write leaves the old set intact.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::question::Question;
use crate::domain::traits::{QuestionSink, QuestionSource};

/// A question set stored as one JSON file.
pub struct JsonQuestionStore {
    path: PathBuf,
}

impl JsonQuestionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuestionSource for JsonQuestionStore {
    fn load_all(&self) -> Result<Vec<Question>> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read question set '{}'", self.path.display()))?;

        let questions: Vec<Question> = serde_json::from_str(&json)
            .with_context(|| format!("Invalid question set JSON in '{}'", self.path.display()))?;

        tracing::info!("Loaded {} questions from '{}'", questions.len(), self.path.display());
        Ok(questions)
    }
}

impl QuestionSink for JsonQuestionStore {
    fn save_all(&self, questions: &[Question]) -> Result<()> {
        let json = serde_json::to_string_pretty(questions)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .with_context(|| format!("Cannot write '{}'", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Cannot replace question set '{}'", self.path.display()))?;

        tracing::info!("Saved {} questions to '{}'", questions.len(), self.path.display());
        Ok(())
    }
}
