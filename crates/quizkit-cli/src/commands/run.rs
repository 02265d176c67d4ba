//! The `quizkit run` command.
//!
//! A line-oriented presentation layer over the session state machine.
//! Prompts go to stderr so stdout carries only the summary.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use quizkit_core::session::{QuestionScreen, QuizEvent, QuizState};
use quizkit_core::traits::{SessionObserver, TracingObserver};
use quizkit_core::{GradedQuiz, Quiz, QuizError};

use super::summary::write_summary;
use super::{load, resolve_options, resolve_quiz};

pub fn execute(
    quiz_path: Option<PathBuf>,
    format: Option<String>,
    hide_answers: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load(config_path)?;
    let options = resolve_options(&config, format, hide_answers)?;
    let quiz = resolve_quiz(quiz_path.as_deref(), &config)?;

    let stdin = std::io::stdin();
    let mut stderr = std::io::stderr();
    let graded = play_interactive(quiz, stdin.lock(), &mut stderr, &TracingObserver)?;

    write_summary(&graded, &options, &mut std::io::stdout().lock())
}

/// One parsed line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Zero-based choice indices to toggle, in order.
    Toggle(Vec<usize>),
    Next,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" | "n" | "next" => return Ok(Command::Next),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n - 1),
            _ => Err(format!("'{s}' is not a choice number")),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Command::Toggle)
}

fn render_screen(screen: &QuestionScreen, out: &mut dyn Write) -> std::io::Result<()> {
    let question = screen.question();
    writeln!(out)?;
    writeln!(
        out,
        "Question {}/{} ({})",
        screen.position() + 1,
        screen.total(),
        question.kind()
    )?;
    writeln!(out, "{}", question.prompt())?;
    for (i, choice) in question.choices().iter().enumerate() {
        let mark = if screen.selection().contains(&i) { "x" } else { " " };
        writeln!(out, "  [{mark}] {}) {choice}", i + 1)?;
    }
    let hint = if question.kind().is_multi() {
        "Toggle choices by number, Enter to continue"
    } else {
        "Pick a choice by number, Enter to continue"
    };
    write!(out, "{hint}> ")?;
    out.flush()
}

/// Drive a session from line input until it is graded.
pub fn play_interactive<R: BufRead>(
    quiz: Quiz,
    mut input: R,
    out: &mut dyn Write,
    observer: &dyn SessionObserver,
) -> Result<GradedQuiz> {
    writeln!(out, "{} ({} questions)", quiz.name(), quiz.len())?;
    if !quiz.description().is_empty() {
        writeln!(out, "{}", quiz.description())?;
    }

    let mut state = QuizState::start(quiz);
    let mut announced = None;
    let mut line = String::new();

    loop {
        let screen = match state {
            QuizState::Graded(graded) => {
                observer.on_graded(graded.report());
                writeln!(out)?;
                return Ok(graded);
            }
            QuizState::AwaitingSelection(ref screen) => screen,
        };
        let position = screen.position();
        if announced != Some(position) {
            observer.on_question(position, screen.total(), screen.question());
            announced = Some(position);
        }
        render_screen(screen, out)?;

        line.clear();
        let read = input.read_line(&mut line).context("failed to read input")?;
        if read == 0 {
            anyhow::bail!(
                "input ended at question {} of {}",
                position + 1,
                screen.total()
            );
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        match command {
            Command::Quit => anyhow::bail!("quiz aborted at question {}", position + 1),
            Command::Toggle(choices) => {
                for choice in choices {
                    let (next, rejected) = state.apply(QuizEvent::Toggle(choice));
                    state = next;
                    match rejected {
                        Some(error) if error.is_recoverable() => {
                            report_rejection(position, &error, out, observer)?;
                        }
                        Some(error) => return Err(error.into()),
                        None => {
                            if let QuizState::AwaitingSelection(screen) = &state {
                                observer.on_toggle(position, screen.selection());
                            }
                        }
                    }
                }
            }
            Command::Next => {
                let committed = screen.selection().clone();
                let (next, rejected) = state.apply(QuizEvent::Commit);
                state = next;
                match rejected {
                    Some(error) if error.is_recoverable() => {
                        report_rejection(position, &error, out, observer)?;
                    }
                    Some(error) => return Err(error.into()),
                    None => observer.on_commit(position, &committed),
                }
            }
        }
    }
}

/// Tell the observer and the player about an event the session refused.
fn report_rejection(
    position: usize,
    error: &QuizError,
    out: &mut dyn Write,
    observer: &dyn SessionObserver,
) -> Result<()> {
    observer.on_rejected(position, error);
    match error {
        QuizError::ChoiceOutOfRange { index, len } => {
            writeln!(out, "No choice {}; pick 1 to {len}.", index + 1)?
        }
        QuizError::EmptySelection { .. } => {
            writeln!(out, "Select at least one choice before continuing.")?
        }
        other => writeln!(out, "{other}")?,
    }
    Ok(())
}
