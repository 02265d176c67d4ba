//! Core data model types for quizkit.
//!
//! A [`Quiz`] is an ordered, immutable list of [`Question`]s. Both
//! constructors check the question invariants, so any `Quiz` value that
//! exists is well-formed and the rest of the crate can index without
//! re-checking.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// The set of choice indices selected for one question.
pub type Selection = BTreeSet<usize>;

/// How many choices a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Exactly one choice, picked from two or more.
    Single,
    /// Any non-empty subset of the choices.
    Multi,
    /// True/false: one of exactly two choices.
    Boolean,
}

impl QuestionKind {
    /// Whether toggling adds to the selection instead of replacing it.
    pub fn is_multi(self) -> bool {
        self == QuestionKind::Multi
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Single => write!(f, "single-select"),
            QuestionKind::Multi => write!(f, "multi-select"),
            QuestionKind::Boolean => write!(f, "boolean"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "single-select" => Ok(QuestionKind::Single),
            "multi" | "multi-select" | "multiple" => Ok(QuestionKind::Multi),
            "boolean" | "bool" | "true-false" => Ok(QuestionKind::Boolean),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// Which choices make a question correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Correctness {
    /// Single-select and boolean questions: the one right choice.
    SingleIndex(usize),
    /// Multi-select questions: the exact set of right choices.
    IndexSet(BTreeSet<usize>),
}

impl Correctness {
    /// The correct indices in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Correctness::SingleIndex(i) => vec![*i],
            Correctness::IndexSet(set) => set.iter().copied().collect(),
        }
    }

    fn shape(&self) -> &'static str {
        match self {
            Correctness::SingleIndex(_) => "a single index",
            Correctness::IndexSet(_) => "a set of indices",
        }
    }
}

/// One quiz item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: String,
    prompt: String,
    kind: QuestionKind,
    choices: Vec<String>,
    correct: Correctness,
}

impl Question {
    /// Build a question, checking choice count and correct indices.
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        kind: QuestionKind,
        choices: Vec<String>,
        correct: Correctness,
    ) -> Result<Self, QuizError> {
        let id = id.into();
        let len = choices.len();

        if len < 2 {
            return Err(QuizError::TooFewChoices { question: id, len });
        }
        if kind == QuestionKind::Boolean && len != 2 {
            return Err(QuizError::BooleanChoiceCount { question: id, len });
        }

        match (&correct, kind) {
            (Correctness::SingleIndex(_), QuestionKind::Multi)
            | (Correctness::IndexSet(_), QuestionKind::Single | QuestionKind::Boolean) => {
                return Err(QuizError::CorrectnessKindMismatch {
                    question: id,
                    kind: kind.to_string(),
                    found: correct.shape(),
                });
            }
            (Correctness::IndexSet(set), QuestionKind::Multi) if set.is_empty() => {
                return Err(QuizError::EmptyCorrectSet { question: id });
            }
            _ => {}
        }

        if let Some(&index) = correct.indices().iter().find(|&&i| i >= len) {
            return Err(QuizError::CorrectIndexOutOfRange {
                question: id,
                index,
                len,
            });
        }

        Ok(Self {
            id,
            prompt: prompt.into(),
            kind,
            choices,
            correct,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn correct(&self) -> &Correctness {
        &self.correct
    }
}

/// An ordered, non-empty sequence of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    id: String,
    name: String,
    description: String,
    questions: Vec<Question>,
}

impl Quiz {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        let id = id.into();
        if questions.is_empty() {
            return Err(QuizError::EmptyQuiz(id));
        }
        Ok(Self {
            id,
            name: name.into(),
            description: description.into(),
            questions,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions; always at least 1.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the quiz has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

static NO_SELECTION: Selection = BTreeSet::new();

/// Finalized selections, indexed by question position.
///
/// Reading past the end yields an empty selection. Recording past the end
/// pads the skipped positions with empty selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(Vec<Selection>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selection at `position`, or the empty set if none was recorded.
    pub fn get(&self, position: usize) -> &Selection {
        self.0.get(position).unwrap_or(&NO_SELECTION)
    }

    /// Overwrite the entry at `position`.
    pub fn record(&mut self, position: usize, selection: Selection) {
        if position >= self.0.len() {
            self.0.resize_with(position + 1, Selection::new);
        }
        self.0[position] = selection;
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Vec<usize>>> for AnswerSet {
    fn from(entries: Vec<Vec<usize>>) -> Self {
        Self(
            entries
                .into_iter()
                .map(|e| e.into_iter().collect())
                .collect(),
        )
    }
}
