// Shared test data for the application-layer unit tests.

use crate::domain::question::{Question, QuestionType};

pub fn question(id: u32, name: &str, kind: QuestionType, points: u32, published: bool) -> Question {
    Question {
        points,
        published,
        body: format!("{name}?"),
        ..Question::blank(id, name, kind)
    }
}

/// Four questions: two short answer, two multiple choice,
/// ids 1 and 5 published, 5 points in total.
pub fn sample_questions() -> Vec<Question> {
    let mut colors = question(5, "Colors", QuestionType::MultipleChoiceQuestion, 1, true);
    colors.body     = "Which of these is a color?".into();
    colors.expected = "red".into();
    colors.options  = vec!["red".into(), "apple".into(), "firetruck".into()];

    let mut shapes = question(9, "Shapes", QuestionType::MultipleChoiceQuestion, 2, false);
    shapes.body     = "What shape can you make with one line?".into();
    shapes.expected = "circle".into();
    shapes.options  = vec!["square".into(), "triangle".into(), "circle".into()];

    vec![
        Question {
            body:     "What is 2+2?".into(),
            expected: "4".into(),
            ..question(1, "Addition", QuestionType::ShortAnswerQuestion, 1, true)
        },
        Question {
            body:     "What is the last letter of the English alphabet?".into(),
            expected: "Z".into(),
            ..question(2, "Letters", QuestionType::ShortAnswerQuestion, 1, false)
        },
        colors,
        shapes,
    ]
}
