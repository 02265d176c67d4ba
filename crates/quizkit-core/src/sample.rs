//! The built-in three-question sample quiz.
//!
//! Used when no quiz file is given, and written out by `quizkit init`.

use crate::model::{Correctness, Question, QuestionKind, Quiz};

/// TOML source of the sample quiz, in the format `parser` reads.
pub const SAMPLE_QUIZ_TOML: &str = r#"[quiz]
id = "sample"
name = "Sample Quiz"
description = "One question of each kind"

[[questions]]
id = "q1"
prompt = "Which planet is known as the Red Planet?"
kind = "single"
choices = ["Venus", "Mars", "Jupiter", "Saturn"]
correct = 1

[[questions]]
id = "q2"
prompt = "Which of these are primary colors of light?"
kind = "multi"
choices = ["Yellow", "Green", "Magenta", "Blue"]
correct = [1, 3]

[[questions]]
id = "q3"
prompt = "The Earth orbits the Sun."
kind = "boolean"
choices = ["False", "True"]
correct = 1
"#;

/// Build the sample quiz in memory.
pub fn sample_quiz() -> Quiz {
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    // The literals below satisfy every invariant `Question::new` checks.
    let questions = vec![
        Question::new(
            "q1",
            "Which planet is known as the Red Planet?",
            QuestionKind::Single,
            strings(&["Venus", "Mars", "Jupiter", "Saturn"]),
            Correctness::SingleIndex(1),
        ),
        Question::new(
            "q2",
            "Which of these are primary colors of light?",
            QuestionKind::Multi,
            strings(&["Yellow", "Green", "Magenta", "Blue"]),
            Correctness::IndexSet([1, 3].into()),
        ),
        Question::new(
            "q3",
            "The Earth orbits the Sun.",
            QuestionKind::Boolean,
            strings(&["False", "True"]),
            Correctness::SingleIndex(1),
        ),
    ]
    .into_iter()
    .collect::<Result<Vec<_>, _>>()
    .expect("sample questions are well-formed");

    Quiz::new("sample", "Sample Quiz", "One question of each kind", questions)
        .expect("sample quiz is non-empty")
}
