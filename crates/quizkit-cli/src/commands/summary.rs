//! Final summary rendering shared by `run` and `grade`.

use std::io::Write;

use anyhow::Result;
use comfy_table::{Cell, Color, Table};

use quizkit_core::report::{OutputFormat, QuizReport};
use quizkit_core::GradedQuiz;
use quizkit_report::generate_html;

use super::SummaryOptions;

/// Build the report for `graded` and write it to `out`.
pub fn write_summary(
    graded: &GradedQuiz,
    options: &SummaryOptions,
    out: &mut dyn Write,
) -> Result<()> {
    let mut report = QuizReport::from_graded(graded);
    if !options.reveal_answers {
        report = report.without_answers();
    }

    match options.format {
        OutputFormat::Text => writeln!(out, "{}", text_summary(&report, options.reveal_answers))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        OutputFormat::Markdown => write!(out, "{}", report.to_markdown())?,
        OutputFormat::Html => writeln!(out, "{}", generate_html(&report))?,
    }
    Ok(())
}

fn text_summary(report: &QuizReport, reveal_answers: bool) -> String {
    let mut table = Table::new();
    let mut header = vec!["#", "Question", "Your answer"];
    if reveal_answers {
        header.push("Correct answer");
    }
    header.push("Result");
    table.set_header(header);

    for (i, o) in report.outcomes.iter().enumerate() {
        let mut row = vec![
            Cell::new(i + 1),
            Cell::new(&o.prompt),
            Cell::new(o.selected_labels()),
        ];
        if reveal_answers {
            row.push(Cell::new(o.correct_labels()));
        }
        row.push(if o.is_correct {
            Cell::new("correct").fg(Color::Green)
        } else {
            Cell::new("wrong").fg(Color::Red)
        });
        table.add_row(row);
    }

    format!(
        "{}\n{table}\nScore: {}/{} ({:.1}%)",
        report.quiz.name, report.score, report.total, report.percentage
    )
}
