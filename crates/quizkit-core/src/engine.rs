//! Scripted session driver.
//!
//! Plays a fixed list of selections through the session state machine,
//! one question at a time, exactly as a presentation layer would.

use crate::error::QuizError;
use crate::model::{Quiz, Selection};
use crate::session::{GradedQuiz, QuizEvent, QuizState};
use crate::traits::SessionObserver;

/// Toggle each scripted selection on its question, commit, and return the
/// graded quiz.
///
/// Entries past the last question are never reached. A script with fewer
/// entries than questions fails with [`QuizError::ScriptExhausted`]; an empty
/// entry fails with [`QuizError::EmptySelection`].
pub fn play_scripted(
    quiz: Quiz,
    script: &[Selection],
    observer: &dyn SessionObserver,
) -> Result<GradedQuiz, QuizError> {
    let mut state = QuizState::start(quiz);
    let mut picks = script.iter();

    loop {
        let screen = match state {
            QuizState::Graded(graded) => {
                observer.on_graded(graded.report());
                return Ok(graded);
            }
            QuizState::AwaitingSelection(ref screen) => screen,
        };

        let position = screen.position();
        let total = screen.total();
        observer.on_question(position, total, screen.question());

        let Some(selection) = picks.next() else {
            return Err(QuizError::ScriptExhausted { position, total });
        };

        for &choice in selection {
            let (next, rejected) = state.apply(QuizEvent::Toggle(choice));
            state = next;
            if let Some(error) = rejected {
                observer.on_rejected(position, &error);
                return Err(error);
            }
            if let QuizState::AwaitingSelection(screen) = &state {
                observer.on_toggle(position, screen.selection());
            }
        }

        let committed = match &state {
            QuizState::AwaitingSelection(screen) => screen.selection().clone(),
            QuizState::Graded(_) => Selection::new(),
        };
        let (next, rejected) = state.apply(QuizEvent::Commit);
        state = next;
        if let Some(error) = rejected {
            observer.on_rejected(position, &error);
            return Err(error);
        }
        observer.on_commit(position, &committed);
    }
}
