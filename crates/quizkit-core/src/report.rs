//! End-of-quiz summary report.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::QuestionKind;
use crate::session::GradedQuiz;

/// How a summary is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
    Html,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Summary of a graded quiz, ready to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// When grading finished.
    pub completed_at: DateTime<Utc>,
    /// Which quiz was taken.
    pub quiz: QuizSummary,
    /// One entry per question, in quiz order.
    pub outcomes: Vec<QuestionOutcome>,
    /// Number of questions answered correctly.
    pub score: usize,
    /// Number of questions.
    pub total: usize,
    /// `score / total` as a percentage.
    pub percentage: f64,
}

/// Summary of a quiz (without the questions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

/// How one question was answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub id: String,
    pub prompt: String,
    pub kind: QuestionKind,
    pub choices: Vec<String>,
    pub selected: Vec<usize>,
    pub correct: Vec<usize>,
    pub is_correct: bool,
}

impl QuestionOutcome {
    /// Selected choice labels, joined for display.
    pub fn selected_labels(&self) -> String {
        self.labels(&self.selected)
    }

    /// Correct choice labels, joined for display.
    pub fn correct_labels(&self) -> String {
        self.labels(&self.correct)
    }

    fn labels(&self, indices: &[usize]) -> String {
        if indices.is_empty() {
            return "-".to_string();
        }
        indices
            .iter()
            .map(|&i| {
                self.choices
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| format!("#{i}"))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl QuizReport {
    /// Build the report for a graded quiz.
    pub fn from_graded(graded: &GradedQuiz) -> Self {
        Self::from_graded_at(graded, Utc::now())
    }

    /// Build the report with an explicit completion time.
    pub fn from_graded_at(graded: &GradedQuiz, completed_at: DateTime<Utc>) -> Self {
        let quiz = graded.quiz();
        let grade = graded.report();

        let outcomes = quiz
            .questions()
            .iter()
            .zip(&grade.per_question)
            .enumerate()
            .map(|(i, (q, &is_correct))| QuestionOutcome {
                id: q.id().to_string(),
                prompt: q.prompt().to_string(),
                kind: q.kind(),
                choices: q.choices().to_vec(),
                selected: graded.answers().get(i).iter().copied().collect(),
                correct: q.correct().indices(),
                is_correct,
            })
            .collect();

        Self {
            completed_at,
            quiz: QuizSummary {
                id: quiz.id().to_string(),
                name: quiz.name().to_string(),
                question_count: quiz.len(),
            },
            outcomes,
            score: grade.score,
            total: grade.total,
            percentage: grade.percentage(),
        }
    }

    /// Drop the correct answers, e.g. when the quiz will be retaken.
    pub fn without_answers(mut self) -> Self {
        for outcome in &mut self.outcomes {
            outcome.correct.clear();
        }
        self
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.quiz.name));
        md.push_str(&format!(
            "**Score:** {}/{} ({:.1}%)\n\n",
            self.score, self.total, self.percentage
        ));

        md.push_str("| # | Question | Your answer | Correct answer | Result |\n");
        md.push_str("|---|----------|-------------|----------------|--------|\n");
        for (i, o) in self.outcomes.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                i + 1,
                o.prompt.replace('|', "\\|"),
                o.selected_labels().replace('|', "\\|"),
                o.correct_labels().replace('|', "\\|"),
                if o.is_correct { "correct" } else { "wrong" }
            ));
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerSet;
    use crate::sample::sample_quiz;
    use chrono::TimeZone;

    fn graded(answers: Vec<Vec<usize>>) -> GradedQuiz {
        GradedQuiz::from_answers(sample_quiz(), AnswerSet::from(answers))
    }

    #[test]
    fn format_display_and_parse() {
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert!("sarif".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn report_captures_outcomes() {
        let report = QuizReport::from_graded(&graded(vec![vec![1], vec![1], vec![1]]));
        assert_eq!(report.quiz.id, "sample");
        assert_eq!(report.score, 2);
        assert_eq!(report.total, 3);
        assert_eq!(report.outcomes.len(), 3);

        let q2 = &report.outcomes[1];
        assert!(!q2.is_correct);
        assert_eq!(q2.selected, vec![1]);
        assert_eq!(q2.correct, vec![1, 3]);
        assert_eq!(q2.selected_labels(), "Green");
        assert_eq!(q2.correct_labels(), "Green, Blue");
    }

    #[test]
    fn missing_answers_show_as_dash() {
        let report = QuizReport::from_graded(&graded(vec![vec![1]]));
        assert_eq!(report.outcomes[2].selected_labels(), "-");
        assert!(!report.outcomes[2].is_correct);
    }

    #[test]
    fn without_answers_clears_correct() {
        let report = QuizReport::from_graded(&graded(vec![vec![1], vec![1, 3], vec![1]]))
            .without_answers();
        assert!(report.outcomes.iter().all(|o| o.correct.is_empty()));
        assert_eq!(report.score, 3);
    }

    #[test]
    fn markdown_output() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let report =
            QuizReport::from_graded_at(&graded(vec![vec![0], vec![1, 3], vec![1]]), at);
        let md = report.to_markdown();
        assert!(md.contains("## Sample Quiz"));
        assert!(md.contains("**Score:** 2/3 (66.7%)"));
        assert!(md.contains("| 1 | Which planet is known as the Red Planet? | Venus | Mars | wrong |"));
        assert!(md.contains("| 3 | The Earth orbits the Sun. | True | True | correct |"));
    }

    #[test]
    fn json_shape() {
        let report = QuizReport::from_graded(&graded(vec![vec![1], vec![1, 3], vec![1]]));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["score"], 3);
        assert_eq!(value["outcomes"][1]["kind"], "multi");
        assert_eq!(value["outcomes"][1]["is_correct"], true);
    }
}
