//! quizkit-core — Quiz model, selection tracking, and scoring.
//!
//! This crate defines the question data model, the per-question selection
//! tracker, the one-directional session state machine, and the grading
//! function that the rest of quizkit builds on.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod sample;
pub mod scorer;
pub mod session;
pub mod tracker;
pub mod traits;

pub use error::QuizError;
pub use model::{AnswerSet, Correctness, Question, QuestionKind, Quiz, Selection};
pub use scorer::{grade, GradeReport};
pub use session::{GradedQuiz, QuestionScreen, QuizEvent, QuizState};
