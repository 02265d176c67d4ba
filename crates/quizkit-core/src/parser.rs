//! TOML quiz parser.
//!
//! Loads quizzes from TOML files and directories, and validates them.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Correctness, Question, QuestionKind, Quiz};

/// Intermediate TOML structure for parsing quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    #[serde(default)]
    id: Option<String>,
    prompt: String,
    kind: String,
    choices: Vec<String>,
    correct: TomlCorrect,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TomlCorrect {
    One(usize),
    Many(Vec<usize>),
}

/// Parse a single TOML file into a `Quiz`.
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `Quiz` (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .enumerate()
        .map(|(i, q)| {
            let id = q.id.unwrap_or_else(|| format!("q{}", i + 1));
            let kind: QuestionKind = q
                .kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!("question '{id}': {e}"))?;

            let correct = match q.correct {
                TomlCorrect::One(index) => Correctness::SingleIndex(index),
                TomlCorrect::Many(indices) => {
                    if indices.len() != indices.iter().collect::<HashSet<_>>().len() {
                        anyhow::bail!("question '{id}': correct indices contain duplicates");
                    }
                    Correctness::IndexSet(indices.into_iter().collect::<BTreeSet<_>>())
                }
            };

            Question::new(id, q.prompt, kind, q.choices, correct).map_err(anyhow::Error::from)
        })
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("invalid quiz: {}", source_path.display()))?;

    let quiz = Quiz::new(
        parsed.quiz.id,
        parsed.quiz.name,
        parsed.quiz.description,
        questions,
    )?;
    Ok(quiz)
}

/// Recursively load all `.toml` quiz files from a directory.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<Quiz>> {
    let mut quizzes = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            quizzes.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz(&path) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(quizzes)
}

/// Load a quiz file, or every quiz in a directory.
pub fn load_quizzes(path: &Path) -> Result<Vec<Quiz>> {
    if path.is_dir() {
        load_quiz_directory(path)
    } else {
        Ok(vec![parse_quiz(path)?])
    }
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz for issues that do not break grading.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = HashSet::new();
    for q in quiz.questions() {
        if !seen_ids.insert(q.id()) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id().to_string()),
                message: format!("duplicate question ID: {}", q.id()),
            });
        }
    }

    for q in quiz.questions() {
        if q.prompt().trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id().to_string()),
                message: "prompt is empty".into(),
            });
        }

        let mut seen_choices = HashSet::new();
        for choice in q.choices() {
            if !seen_choices.insert(choice.trim()) {
                warnings.push(ValidationWarning {
                    question_id: Some(q.id().to_string()),
                    message: format!("duplicate choice: {choice}"),
                });
            }
        }

        if let Correctness::IndexSet(set) = q.correct() {
            if set.len() == q.choices().len() {
                warnings.push(ValidationWarning {
                    question_id: Some(q.id().to_string()),
                    message: "every choice is marked correct".into(),
                });
            }
        }
    }

    warnings
}
