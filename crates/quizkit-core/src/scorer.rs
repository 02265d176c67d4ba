//! Grading of a completed answer set.

use serde::{Deserialize, Serialize};

use crate::model::{AnswerSet, Correctness, Question, Selection};

/// Result of grading a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeReport {
    /// Number of questions answered correctly.
    pub score: usize,
    /// Number of questions in the quiz.
    pub total: usize,
    /// Correctness of each question, in quiz order.
    pub per_question: Vec<bool>,
}

impl GradeReport {
    /// Score as a percentage of total, 0.0 when there are no questions.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 / self.total as f64 * 100.0
    }
}

/// Whether `selection` satisfies `correct`.
///
/// A set of correct indices needs an exact match. A single correct index
/// only needs to be present in the selection.
pub fn is_correct(correct: &Correctness, selection: &Selection) -> bool {
    match correct {
        Correctness::IndexSet(expected) => expected == selection,
        Correctness::SingleIndex(index) => selection.contains(index),
    }
}

/// Grade `answers` against `questions`.
///
/// Missing entries count as empty selections; extra entries are ignored.
pub fn grade(questions: &[Question], answers: &AnswerSet) -> GradeReport {
    if answers.len() > questions.len() {
        tracing::debug!(
            "ignoring {} answer(s) past the last question",
            answers.len() - questions.len()
        );
    }

    let per_question: Vec<bool> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| is_correct(q.correct(), answers.get(i)))
        .collect();

    GradeReport {
        score: per_question.iter().filter(|&&ok| ok).count(),
        total: questions.len(),
        per_question,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_quiz;

    fn sel(indices: &[usize]) -> Selection {
        indices.iter().copied().collect()
    }

    #[test]
    fn index_set_needs_exact_match() {
        let correct = Correctness::IndexSet([1, 3].into());
        assert!(is_correct(&correct, &sel(&[1, 3])));
        assert!(!is_correct(&correct, &sel(&[1, 3, 2])));
        assert!(!is_correct(&correct, &sel(&[1])));
        assert!(!is_correct(&correct, &sel(&[])));
    }

    #[test]
    fn single_index_is_membership() {
        let correct = Correctness::SingleIndex(1);
        assert!(is_correct(&correct, &sel(&[1])));
        assert!(is_correct(&correct, &sel(&[0, 1])));
        assert!(!is_correct(&correct, &sel(&[0])));
        assert!(!is_correct(&correct, &sel(&[])));
    }

    #[test]
    fn sample_all_right() {
        let quiz = sample_quiz();
        let answers = AnswerSet::from(vec![vec![1], vec![1, 3], vec![1]]);
        let report = grade(quiz.questions(), &answers);
        assert_eq!(report.score, 3);
        assert_eq!(report.total, 3);
        assert_eq!(report.per_question, vec![true, true, true]);
        assert!((report.percentage() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sample_all_wrong() {
        let quiz = sample_quiz();
        let answers = AnswerSet::from(vec![vec![0], vec![1], vec![0]]);
        let report = grade(quiz.questions(), &answers);
        assert_eq!(report.score, 0);
        assert_eq!(report.total, 3);
        assert_eq!(report.per_question, vec![false, false, false]);
        assert_eq!(report.percentage(), 0.0);
    }

    #[test]
    fn short_answer_set_grades_missing_as_wrong() {
        let quiz = sample_quiz();
        let answers = AnswerSet::from(vec![vec![1]]);
        let report = grade(quiz.questions(), &answers);
        assert_eq!(report.score, 1);
        assert_eq!(report.per_question, vec![true, false, false]);
    }

    #[test]
    fn extra_entries_are_ignored() {
        let quiz = sample_quiz();
        let answers = AnswerSet::from(vec![vec![1], vec![1, 3], vec![1], vec![0, 1]]);
        let report = grade(quiz.questions(), &answers);
        assert_eq!(report.score, 3);
        assert_eq!(report.per_question.len(), 3);
    }

    #[test]
    fn empty_question_list() {
        let report = grade(&[], &AnswerSet::new());
        assert_eq!(report.score, 0);
        assert_eq!(report.total, 0);
        assert_eq!(report.percentage(), 0.0);
    }
}
