// ============================================================
// Layer 2 — CSV Export
// ============================================================
// Serialises a question set to a flat CSV string.
//
// Format:
//   id,name,options,points,published
//   1,Addition,0,1,true
//   5,Colors,3,1,true
//
//   - `options` is the NUMBER of options, not their text
//   - booleans are lowercase `true` / `false`
//   - rows are separated by '\n' with no trailing newline,
//     so an empty set yields just the header line
//   - no quoting: a comma inside `name` is written as-is
//
// Reference: Rust Book §8 (Strings)

use crate::domain::question::Question;

pub const CSV_HEADER: &str = "id,name,options,points,published";

pub fn to_csv(questions: &[Question]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(questions.iter().map(csv_row))
        .collect::<Vec<_>>()
        .join("\n")
}

fn csv_row(q: &Question) -> String {
    format!(
        "{},{},{},{},{}",
        q.id,
        q.name,
        q.options.len(),
        q.points,
        q.published,
    )
}
