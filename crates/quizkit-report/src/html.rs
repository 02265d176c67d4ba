//! HTML summary generator.
//!
//! Produces a self-contained HTML page with all CSS inlined.

use quizkit_core::report::{QuestionOutcome, QuizReport};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML summary page from a quiz report.
pub fn generate_html(report: &QuizReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>quizkit summary: {}</title>\n",
        html_escape(&report.quiz.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&report.quiz.name)));
    html.push_str(&format!(
        "<p class=\"meta\">{} questions | completed {}</p>\n",
        report.quiz.question_count,
        report.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Score
    html.push_str("<section class=\"score\">\n");
    html.push_str(&format!(
        "<p class=\"total\"><strong>{}/{}</strong> ({:.1}%)</p>\n",
        report.score, report.total, report.percentage
    ));
    html.push_str(&score_bar(report.percentage));
    html.push_str("</section>\n");

    // Per-question annotations
    html.push_str("<section class=\"questions\">\n");
    html.push_str("<ol>\n");
    for outcome in &report.outcomes {
        html.push_str(&question_item(outcome));
    }
    html.push_str("</ol>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

fn question_item(outcome: &QuestionOutcome) -> String {
    let class = if outcome.is_correct { "pass" } else { "fail" };
    let mark = if outcome.is_correct { "correct" } else { "wrong" };

    let mut item = format!(
        "<li class=\"{class}\">\n<p class=\"prompt\">{} <span class=\"kind\">{}</span> <span class=\"mark\">{mark}</span></p>\n<ul class=\"choices\">\n",
        html_escape(&outcome.prompt),
        outcome.kind,
    );

    for (i, choice) in outcome.choices.iter().enumerate() {
        let mut classes = Vec::new();
        if outcome.selected.contains(&i) {
            classes.push("selected");
        }
        if outcome.correct.contains(&i) {
            classes.push("answer");
        }
        item.push_str(&format!(
            "<li class=\"{}\">{}</li>\n",
            classes.join(" "),
            html_escape(choice)
        ));
    }

    item.push_str("</ul>\n</li>\n");
    item
}

fn score_bar(percentage: f64) -> String {
    let width = 300.0;
    let filled = (percentage.clamp(0.0, 100.0) / 100.0 * width).round();
    format!(
        "<svg width=\"{width}\" height=\"16\" role=\"img\">\
<rect width=\"{width}\" height=\"16\" fill=\"#e5e7eb\"/>\
<rect width=\"{filled}\" height=\"16\" fill=\"#22c55e\"/></svg>\n"
    )
}

const CSS: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; max-width: 860px; margin: 0 auto; padding: 20px; color: #1f2937; }
header { border-bottom: 2px solid #e5e7eb; margin-bottom: 20px; }
h1 { margin-bottom: 4px; }
.meta { color: #6b7280; }
.total { font-size: 1.5em; }
.questions > ol > li { margin-bottom: 16px; padding: 8px 12px; border-left: 4px solid #e5e7eb; }
.questions > ol > li.pass { border-left-color: #22c55e; }
.questions > ol > li.fail { border-left-color: #ef4444; }
.kind { font-size: 0.8em; color: #6b7280; }
.mark { font-weight: bold; }
li.pass .mark { color: #16a34a; }
li.fail .mark { color: #dc2626; }
.choices li.selected { font-weight: bold; }
.choices li.selected::before { content: "\2713  "; }
.choices li.answer { text-decoration: underline; text-decoration-color: #22c55e; }
pre { background: #f3f4f6; padding: 12px; overflow-x: auto; }
"#;
