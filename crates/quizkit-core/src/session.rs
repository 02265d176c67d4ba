//! Quiz session state machine.
//!
//! ```text
//! AwaitingSelection(p) --commit--> AwaitingSelection(p + 1)   while p + 1 < total
//! AwaitingSelection(total - 1) --commit--> Graded             terminal
//! ```
//!
//! Each state is a plain value. `commit` consumes the current
//! [`QuestionScreen`] and hands back the next state, carrying the answer set
//! forward by value, so there is no way to revisit an earlier question.

use thiserror::Error;

use crate::error::QuizError;
use crate::model::{AnswerSet, Question, Quiz, Selection};
use crate::scorer::{grade, GradeReport};
use crate::tracker::SelectionTracker;

/// Input events a presentation layer can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Toggle(usize),
    Commit,
}

/// Whole-session state.
#[derive(Debug, Clone)]
pub enum QuizState {
    AwaitingSelection(QuestionScreen),
    Graded(GradedQuiz),
}

impl QuizState {
    /// Start a session on the first question with an empty answer set.
    pub fn start(quiz: Quiz) -> Self {
        QuizState::AwaitingSelection(QuestionScreen::first(quiz))
    }

    pub fn is_graded(&self) -> bool {
        matches!(self, QuizState::Graded(_))
    }

    /// Apply one event.
    ///
    /// Always returns the next state. A rejected event leaves the state as it
    /// was and returns the reason alongside it.
    pub fn apply(self, event: QuizEvent) -> (QuizState, Option<QuizError>) {
        match self {
            QuizState::Graded(graded) => {
                (QuizState::Graded(graded), Some(QuizError::SessionFinished))
            }
            QuizState::AwaitingSelection(mut screen) => match event {
                QuizEvent::Toggle(choice) => {
                    let rejected = screen.toggle(choice).err();
                    (QuizState::AwaitingSelection(screen), rejected)
                }
                QuizEvent::Commit => match screen.commit() {
                    Ok(next) => (next, None),
                    Err(Rejected { screen, error }) => {
                        (QuizState::AwaitingSelection(screen), Some(error))
                    }
                },
            },
        }
    }
}

/// A commit that was refused; the screen comes back untouched.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct Rejected {
    pub screen: QuestionScreen,
    #[source]
    pub error: QuizError,
}

impl Rejected {
    pub fn into_screen(self) -> QuestionScreen {
        self.screen
    }
}

/// One question on display, with everything committed before it.
#[derive(Debug, Clone)]
pub struct QuestionScreen {
    quiz: Quiz,
    position: usize,
    answers: AnswerSet,
    tracker: SelectionTracker,
}

impl QuestionScreen {
    fn first(quiz: Quiz) -> Self {
        let tracker = SelectionTracker::for_question(&quiz.questions()[0]);
        Self {
            quiz,
            position: 0,
            answers: AnswerSet::new(),
            tracker,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn question(&self) -> &Question {
        &self.quiz.questions()[self.position]
    }

    /// Zero-based index of the question on display.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.quiz.len()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn selection(&self) -> &Selection {
        self.tracker.selection()
    }

    pub fn can_proceed(&self) -> bool {
        self.tracker.can_proceed()
    }

    pub fn toggle(&mut self, choice: usize) -> Result<(), QuizError> {
        self.tracker.toggle(choice)
    }

    /// Record the current selection and move on.
    ///
    /// An empty selection is refused and the screen is returned inside
    /// [`Rejected`].
    pub fn commit(self) -> Result<QuizState, Rejected> {
        if !self.tracker.can_proceed() {
            let error = QuizError::EmptySelection {
                position: self.position,
            };
            return Err(Rejected {
                screen: self,
                error,
            });
        }

        let Self {
            quiz,
            position,
            mut answers,
            tracker,
        } = self;
        answers.record(position, tracker.into_selection());

        let next = position + 1;
        if next < quiz.len() {
            tracing::debug!("committed question {}/{}", next, quiz.len());
            let tracker = SelectionTracker::for_question(&quiz.questions()[next]);
            return Ok(QuizState::AwaitingSelection(Self {
                quiz,
                position: next,
                answers,
                tracker,
            }));
        }

        let report = grade(quiz.questions(), &answers);
        tracing::debug!(
            "quiz '{}' graded: {}/{}",
            quiz.id(),
            report.score,
            report.total
        );
        Ok(QuizState::Graded(GradedQuiz {
            quiz,
            answers,
            report,
        }))
    }
}

/// Terminal state: the full answer set and its grade.
#[derive(Debug, Clone)]
pub struct GradedQuiz {
    quiz: Quiz,
    answers: AnswerSet,
    report: GradeReport,
}

impl GradedQuiz {
    /// Grade an answer set collected elsewhere.
    pub fn from_answers(quiz: Quiz, answers: AnswerSet) -> Self {
        let report = grade(quiz.questions(), &answers);
        Self {
            quiz,
            answers,
            report,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn report(&self) -> &GradeReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_quiz;

    fn expect_screen(state: QuizState) -> QuestionScreen {
        match state {
            QuizState::AwaitingSelection(screen) => screen,
            QuizState::Graded(_) => panic!("expected a question screen"),
        }
    }

    #[test]
    fn starts_on_first_question() {
        let screen = expect_screen(QuizState::start(sample_quiz()));
        assert_eq!(screen.position(), 0);
        assert_eq!(screen.total(), 3);
        assert!(screen.answers().is_empty());
        assert!(!screen.can_proceed());
    }

    #[test]
    fn empty_commit_is_rejected_for_every_kind() {
        let mut state = QuizState::start(sample_quiz());
        for (position, choice) in [(0, 1), (1, 3), (2, 1)] {
            let screen = expect_screen(state);
            let rejected = screen.commit().unwrap_err();
            assert_eq!(rejected.error, QuizError::EmptySelection { position });

            let mut screen = rejected.into_screen();
            assert_eq!(screen.position(), position);
            screen.toggle(choice).unwrap();
            state = screen.commit().unwrap();
        }
        assert!(state.is_graded());
    }

    #[test]
    fn commit_carries_answers_forward() {
        let mut screen = expect_screen(QuizState::start(sample_quiz()));
        screen.toggle(2).unwrap();
        let screen = expect_screen(screen.commit().unwrap());

        assert_eq!(screen.position(), 1);
        assert_eq!(screen.answers().get(0), &Selection::from([2]));
        assert!(screen.selection().is_empty());
    }

    #[test]
    fn full_run_grades_once() {
        let mut state = QuizState::start(sample_quiz());
        let script = [vec![1], vec![1, 3], vec![1]];
        let mut graded_transitions = 0;

        for picks in script {
            let mut screen = expect_screen(state);
            for choice in picks {
                screen.toggle(choice).unwrap();
            }
            state = screen.commit().unwrap();
            if state.is_graded() {
                graded_transitions += 1;
            }
        }

        assert_eq!(graded_transitions, 1);
        let QuizState::Graded(graded) = state else {
            panic!("expected graded state");
        };
        assert_eq!(graded.answers().len(), 3);
        assert_eq!(graded.report().score, 3);
        assert_eq!(graded.report().per_question, vec![true, true, true]);
    }

    #[test]
    fn apply_is_total() {
        let (state, err) = QuizState::start(sample_quiz()).apply(QuizEvent::Commit);
        assert_eq!(err, Some(QuizError::EmptySelection { position: 0 }));

        let (state, err) = state.apply(QuizEvent::Toggle(9));
        assert!(matches!(err, Some(QuizError::ChoiceOutOfRange { index: 9, .. })));

        let events = [
            QuizEvent::Toggle(0),
            QuizEvent::Commit,
            QuizEvent::Toggle(1),
            QuizEvent::Commit,
            QuizEvent::Toggle(0),
            QuizEvent::Commit,
        ];
        let state = events.into_iter().fold(state, |state, event| {
            let (next, err) = state.apply(event);
            assert!(err.is_none());
            next
        });
        assert!(state.is_graded());

        let (state, err) = state.apply(QuizEvent::Toggle(0));
        assert_eq!(err, Some(QuizError::SessionFinished));
        let QuizState::Graded(graded) = state else {
            panic!("graded state must be terminal");
        };
        assert_eq!(graded.report().score, 0);
    }

    #[test]
    fn graded_from_answers_matches_session() {
        let graded =
            GradedQuiz::from_answers(sample_quiz(), AnswerSet::from(vec![vec![1], vec![1, 3]]));
        assert_eq!(graded.report().score, 2);
        assert_eq!(graded.report().per_question, vec![true, true, false]);
    }
}
