//! Pure, side-effect-free operations over quiz question sets.
//!
//! The crate is laid out in layers:
//!   - [`domain`]      — Question, Answer, QuestionType, errors, store traits
//!   - [`application`] — queries, transforms, CSV export, and the session use case
//!   - [`infra`]       — JSON file store and output writer
//!   - [`cli`]         — clap front end used by the `question-set` binary

pub mod application;
pub mod cli;
pub mod domain;
pub mod infra;

pub use application::export::to_csv;
pub use application::queries::{
    find_by_id, names, non_empty, published, remove_by_id, same_type, total_points,
    total_published_points,
};
pub use application::transforms::{
    add_new, change_type_by_id, duplicate_in_array, edit_option, publish_all, rename_by_id,
    to_answers, OptionSlot,
};
pub use domain::answer::Answer;
pub use domain::error::QuestionSetError;
pub use domain::question::{Question, QuestionType};
