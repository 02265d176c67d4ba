//! The `quizkit grade` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use quizkit_core::{AnswerSet, GradedQuiz};

use super::summary::write_summary;
use super::{load, resolve_options, resolve_quiz};

pub fn execute(
    answers_path: PathBuf,
    quiz_path: Option<PathBuf>,
    format: Option<String>,
    hide_answers: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load(config_path)?;
    let options = resolve_options(&config, format, hide_answers)?;
    let quiz = resolve_quiz(quiz_path.as_deref(), &config)?;
    let answers = load_answers(&answers_path)?;

    if answers.len() != quiz.len() {
        tracing::warn!(
            "answer set has {} entries for {} questions; missing entries count as unanswered",
            answers.len(),
            quiz.len()
        );
    }

    let graded = GradedQuiz::from_answers(quiz, answers);
    write_summary(&graded, &options, &mut std::io::stdout().lock())
}

/// Read an answer set: a JSON array of arrays of choice indices.
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers from {}", path.display()))?;
    let answers: AnswerSet = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse answers JSON: {}", path.display()))?;
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_answers_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, "[[1], [3, 1], []]").unwrap();

        let answers = load_answers(&path).unwrap();
        assert_eq!(answers.len(), 3);
        assert_eq!(answers.get(1).iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert!(answers.get(2).is_empty());
    }

    #[test]
    fn load_answers_rejects_bad_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, r#"{"q1": 1}"#).unwrap();

        let err = load_answers(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse answers JSON"));
    }
}
