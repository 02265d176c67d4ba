//! quizkit configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::report::OutputFormat;

/// Top-level quizkit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizkitConfig {
    /// Quiz file used when `--quiz` is not given.
    #[serde(default)]
    pub default_quiz: Option<PathBuf>,
    /// Summary format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Show the correct choices in the summary.
    #[serde(default = "default_true")]
    pub reveal_answers: bool,
}

fn default_true() -> bool {
    true
}

impl Default for QuizkitConfig {
    fn default() -> Self {
        Self {
            default_quiz: None,
            format: OutputFormat::default(),
            reveal_answers: true,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let mut cursor = 0;
    while let Some(offset) = result[cursor..].find("${") {
        let start = cursor + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result.replace_range(start..start + end + 1, &value);
        cursor = start + value.len();
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `quizkit.toml` in the current directory
/// 2. `~/.config/quizkit/config.toml`
///
/// Environment variable override: `QUIZKIT_FORMAT`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizkitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizkit.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizkitConfig::default(),
    };

    if let Ok(format) = std::env::var("QUIZKIT_FORMAT") {
        apply_format_override(&mut config, &format);
    }

    Ok(config)
}

/// Apply a `QUIZKIT_FORMAT` value; an unknown format is logged and ignored.
fn apply_format_override(config: &mut QuizkitConfig, value: &str) {
    match value.parse() {
        Ok(format) => config.format = format,
        Err(e) => tracing::warn!("ignoring QUIZKIT_FORMAT: {e}"),
    }
}

/// Parse a config string and expand `${VAR}` references in path values.
pub fn parse_config_str(content: &str) -> Result<QuizkitConfig> {
    let mut config: QuizkitConfig = toml::from_str(content)?;
    config.default_quiz = config
        .default_quiz
        .map(|p| PathBuf::from(resolve_env_vars(&p.to_string_lossy())));
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizkit"))
}

/// Starter config written by `quizkit init`.
pub const SAMPLE_CONFIG: &str = r#"# quizkit configuration

# Quiz used when --quiz is not given. ${VAR} references are expanded.
default_quiz = "quizzes/sample.toml"

# Summary format: text, json, markdown, html
format = "text"

# Show the correct choices in the summary
reveal_answers = true
"#;
