//! quizkit CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizkit", version, about = "Terminal quiz runner and grader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a quiz interactively
    Run {
        /// Path to a .toml quiz (default: config `default_quiz`, else the built-in sample)
        #[arg(long)]
        quiz: Option<PathBuf>,

        /// Summary format: text, json, markdown, html
        #[arg(long)]
        format: Option<String>,

        /// Do not show correct answers in the summary
        #[arg(long)]
        hide_answers: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade a JSON answer set, e.g. [[1],[1,3],[1]]
    Grade {
        /// Path to the answer set JSON
        #[arg(long)]
        answers: PathBuf,

        /// Path to a .toml quiz (default: config `default_quiz`, else the built-in sample)
        #[arg(long)]
        quiz: Option<PathBuf>,

        /// Summary format: text, json, markdown, html
        #[arg(long)]
        format: Option<String>,

        /// Do not show correct answers in the summary
        #[arg(long)]
        hide_answers: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate quiz TOML files
    Validate {
        /// Path to quiz file or directory
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Create starter config and sample quiz
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizkit=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            quiz,
            format,
            hide_answers,
            config,
        } => commands::run::execute(quiz, format, hide_answers, config),
        Commands::Grade {
            answers,
            quiz,
            format,
            hide_answers,
            config,
        } => commands::grade::execute(answers, quiz, format, hide_answers, config),
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
