// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, hands the operation to the
// application layer, and writes the rendered result.
// No question-set logic lives here.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, SessionArgs};

use crate::application::session::{Operation, QuestionSession, SessionConfig};
use crate::infra::{output::OutputWriter, store::JsonQuestionStore};

#[derive(Parser, Debug)]
#[command(
    name = "question-set",
    version,
    about = "Query, transform, and export quiz question sets stored as JSON."
)]
pub struct Cli {
    #[command(flatten)]
    pub session: SessionArgs,

    /// The operation to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Build the session from the global flags and run the subcommand.
    pub fn run(self) -> Result<()> {
        let config: SessionConfig = self.session.into();
        let op = Operation::try_from(self.command)?;

        tracing::debug!("Running {:?} on '{}'", op, config.input);

        let store   = JsonQuestionStore::new(&config.input);
        let session = QuestionSession::new(store, config.in_place);
        let outcome = session.execute(&op)?;

        OutputWriter::new(config.output.as_deref()).write(&outcome.render()?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::transforms::OptionSlot;
    use crate::domain::question::QuestionType;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("question-set").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let cli = parse(&["csv"]);
        assert_eq!(cli.session.input, "questions.json");
        assert!(cli.session.output.is_none());
        assert!(!cli.session.in_place);
        assert_eq!(Operation::try_from(cli.command).unwrap(), Operation::Csv);
    }

    #[test]
    fn test_parse_add_with_type() {
        let cli = parse(&["add", "--id", "3", "--name", "Fractions", "--type", "short_answer_question"]);
        assert_eq!(
            Operation::try_from(cli.command).unwrap(),
            Operation::Add { id: 3, name: "Fractions".into(), kind: QuestionType::ShortAnswerQuestion }
        );
    }

    #[test]
    fn test_unknown_type_rejected() {
        let res = Cli::try_parse_from(["question-set", "change-type", "--id", "1", "--type", "essay"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_edit_option_negative_one_appends() {
        let cli = parse(&["edit-option", "--id", "5", "--index", "-1", "--option", "blue"]);
        assert_eq!(
            Operation::try_from(cli.command).unwrap(),
            Operation::EditOption { id: 5, slot: OptionSlot::Append, option: "blue".into() }
        );
    }

    #[test]
    fn test_edit_option_below_negative_one_fails() {
        let cli = parse(&["edit-option", "--id", "5", "--index", "-3", "--option", "blue"]);
        assert!(Operation::try_from(cli.command).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["publish-all", "--input", "quiz.json", "--in-place"]);
        assert_eq!(cli.session.input, "quiz.json");
        assert!(cli.session.in_place);
    }

    #[test]
    fn test_run_writes_csv_file() {
        let dir    = tempfile::tempdir().unwrap();
        let input  = dir.path().join("quiz.json");
        let output = dir.path().join("quiz.csv");
        std::fs::write(
            &input,
            r#"[{"id": 1, "name": "Addition", "type": "short_answer_question",
                 "body": "2+2?", "expected": "4", "options": [],
                 "points": 1, "published": true}]"#,
        )
        .unwrap();

        let cli = parse(&[
            "csv",
            "--input",  input.to_str().unwrap(),
            "--output", output.to_str().unwrap(),
        ]);
        cli.run().unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "id,name,options,points,published\n1,Addition,0,1,true\n"
        );
    }
}
