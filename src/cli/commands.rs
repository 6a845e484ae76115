// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// One subcommand per question-set operation.
//
// clap's derive macros generate help text, missing-argument
// errors, and string → number / QuestionType conversion.
// QuestionType is parsed through its FromStr impl, so the
// accepted spellings match the question-set file format.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::session::{Operation, SessionConfig};
use crate::application::transforms::OptionSlot;
use crate::domain::error::QuestionSetError;
use crate::domain::question::QuestionType;

/// Options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// JSON file holding the question set
    #[arg(long, global = true, default_value = "questions.json")]
    pub input: String,

    /// Write the result to this file instead of stdout
    #[arg(long, global = true)]
    pub output: Option<String>,

    /// Save a transformed question set back over --input
    #[arg(long, global = true, default_value_t = false)]
    pub in_place: bool,
}

/// Convert CLI SessionArgs into the application-layer SessionConfig
impl From<SessionArgs> for SessionConfig {
    fn from(a: SessionArgs) -> Self {
        SessionConfig {
            input:    a.input,
            output:   a.output,
            in_place: a.in_place,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List published questions
    Published,

    /// List questions that have a body, expected answer, or options
    NonEmpty,

    /// Show the question with the given id
    Find(IdArgs),

    /// Drop the question with the given id
    Remove(IdArgs),

    /// List question names
    Names,

    /// Sum question points
    Points {
        /// Only count published questions
        #[arg(long, default_value_t = false)]
        published_only: bool,
    },

    /// Export the set as CSV
    Csv,

    /// Make one blank answer per question
    Answers,

    /// Mark every question as published
    PublishAll,

    /// Check whether all questions share one type
    SameType,

    /// Append a blank question
    Add(AddArgs),

    /// Rename a question
    Rename(RenameArgs),

    /// Change a question's type (clears options unless multiple choice)
    ChangeType(ChangeTypeArgs),

    /// Append or replace one option on a question
    EditOption(EditOptionArgs),

    /// Copy a question in place under a new id
    Duplicate(DuplicateArgs),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Question id
    #[arg(long)]
    pub id: u32,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Id for the new question
    #[arg(long)]
    pub id: u32,

    #[arg(long)]
    pub name: String,

    /// multiple_choice_question or short_answer_question
    #[arg(long = "type")]
    pub kind: QuestionType,
}

#[derive(Args, Debug)]
pub struct RenameArgs {
    #[arg(long)]
    pub id: u32,

    /// The new display name
    #[arg(long)]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct ChangeTypeArgs {
    #[arg(long)]
    pub id: u32,

    /// multiple_choice_question or short_answer_question
    #[arg(long = "type")]
    pub kind: QuestionType,
}

#[derive(Args, Debug)]
pub struct EditOptionArgs {
    #[arg(long)]
    pub id: u32,

    /// Option position to replace, or -1 to append
    #[arg(long, allow_negative_numbers = true)]
    pub index: i64,

    /// The option text to write
    #[arg(long)]
    pub option: String,
}

#[derive(Args, Debug)]
pub struct DuplicateArgs {
    /// Id of the question to copy
    #[arg(long)]
    pub id: u32,

    /// Id given to the copy
    #[arg(long)]
    pub new_id: u32,
}

/// Turn a parsed subcommand into an application-layer Operation.
/// Fails only for an --index below -1.
impl TryFrom<Commands> for Operation {
    type Error = QuestionSetError;

    fn try_from(c: Commands) -> Result<Self, Self::Error> {
        Ok(match c {
            Commands::Published   => Operation::Published,
            Commands::NonEmpty    => Operation::NonEmpty,
            Commands::Find(a)     => Operation::Find { id: a.id },
            Commands::Remove(a)   => Operation::Remove { id: a.id },
            Commands::Names       => Operation::Names,
            Commands::Points { published_only } => Operation::Points { published_only },
            Commands::Csv         => Operation::Csv,
            Commands::Answers     => Operation::Answers,
            Commands::PublishAll  => Operation::PublishAll,
            Commands::SameType    => Operation::SameType,
            Commands::Add(a)      => Operation::Add { id: a.id, name: a.name, kind: a.kind },
            Commands::Rename(a)   => Operation::Rename { id: a.id, name: a.name },
            Commands::ChangeType(a) => Operation::ChangeType { id: a.id, kind: a.kind },
            Commands::EditOption(a) => Operation::EditOption {
                id:     a.id,
                slot:   OptionSlot::try_from(a.index)?,
                option: a.option,
            },
            Commands::Duplicate(a) => Operation::Duplicate { id: a.id, new_id: a.new_id },
        })
    }
}
