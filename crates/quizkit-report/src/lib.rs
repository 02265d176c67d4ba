//! quizkit-report — renders quiz summaries as self-contained HTML.

pub mod html;

pub use html::generate_html;
