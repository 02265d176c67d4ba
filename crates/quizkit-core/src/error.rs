//! Quiz error types.
//!
//! Every rule the core enforces (question invariants, selection bounds,
//! the non-empty commit precondition, the terminal graded state) has a
//! variant here, so callers can match instead of parsing messages.

use thiserror::Error;

/// Errors raised by quiz construction and session transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A toggled choice index does not exist on the current question.
    #[error("choice {index} is out of range (question has {len} choices)")]
    ChoiceOutOfRange { index: usize, len: usize },

    /// Commit was attempted with nothing selected.
    #[error("question {position} has no selection; select at least one choice")]
    EmptySelection { position: usize },

    /// An event arrived after the quiz was graded.
    #[error("quiz is already graded")]
    SessionFinished,

    /// A question has fewer than two choices.
    #[error("question '{question}' has {len} choice(s), at least 2 are required")]
    TooFewChoices { question: String, len: usize },

    /// A boolean question must have exactly two choices.
    #[error("boolean question '{question}' must have exactly 2 choices, found {len}")]
    BooleanChoiceCount { question: String, len: usize },

    /// A correct index points past the end of the choices.
    #[error("question '{question}' marks choice {index} correct but has only {len} choices")]
    CorrectIndexOutOfRange {
        question: String,
        index: usize,
        len: usize,
    },

    /// A multi-select question has no correct choices.
    #[error("multi-select question '{question}' has no correct choices")]
    EmptyCorrectSet { question: String },

    /// The shape of `correct` does not fit the question kind.
    #[error("question '{question}' is {kind} but its correct answer is {found}")]
    CorrectnessKindMismatch {
        question: String,
        kind: String,
        found: &'static str,
    },

    /// A quiz must contain at least one question.
    #[error("quiz '{0}' has no questions")]
    EmptyQuiz(String),

    /// A scripted run ran out of selections before the last question.
    #[error("script ended at question {position} of {total}")]
    ScriptExhausted { position: usize, total: usize },
}

impl QuizError {
    /// Returns `true` for errors a presentation layer should show and then
    /// keep going (the session is unchanged).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            QuizError::ChoiceOutOfRange { .. } | QuizError::EmptySelection { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_classification() {
        assert!(QuizError::EmptySelection { position: 0 }.is_recoverable());
        assert!(QuizError::ChoiceOutOfRange { index: 9, len: 2 }.is_recoverable());
        assert!(!QuizError::SessionFinished.is_recoverable());
        assert!(!QuizError::EmptyQuiz("x".into()).is_recoverable());
    }

    #[test]
    fn messages_name_the_question() {
        let err = QuizError::CorrectIndexOutOfRange {
            question: "q2".into(),
            index: 5,
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "question 'q2' marks choice 5 correct but has only 4 choices"
        );
    }
}
