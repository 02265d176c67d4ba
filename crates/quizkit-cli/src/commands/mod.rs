pub mod grade;
pub mod init;
pub mod run;
pub mod summary;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use quizkit_core::config::{load_config_from, QuizkitConfig};
use quizkit_core::parser;
use quizkit_core::report::OutputFormat;
use quizkit_core::sample::sample_quiz;
use quizkit_core::Quiz;

/// Settings shared by the commands that end in a summary.
pub struct SummaryOptions {
    pub format: OutputFormat,
    pub reveal_answers: bool,
}

/// Merge CLI flags over the loaded config.
pub fn resolve_options(
    config: &QuizkitConfig,
    format: Option<String>,
    hide_answers: bool,
) -> Result<SummaryOptions> {
    let format = match format {
        Some(f) => f.parse().map_err(|e: String| anyhow::anyhow!("{e}"))?,
        None => config.format,
    };
    Ok(SummaryOptions {
        format,
        reveal_answers: config.reveal_answers && !hide_answers,
    })
}

/// Pick the quiz: explicit path, then config default, then the sample.
pub fn resolve_quiz(explicit: Option<&Path>, config: &QuizkitConfig) -> Result<Quiz> {
    if let Some(path) = explicit {
        return parser::parse_quiz(path);
    }
    if let Some(path) = &config.default_quiz {
        tracing::debug!("using default quiz {}", path.display());
        return parser::parse_quiz(path);
    }
    tracing::debug!("no quiz given, using the built-in sample");
    Ok(sample_quiz())
}

pub fn load(config_path: Option<PathBuf>) -> Result<QuizkitConfig> {
    load_config_from(config_path.as_deref())
}
