//! Per-question selection state.

use crate::error::QuizError;
use crate::model::{Question, QuestionKind, Selection};

/// Choices currently toggled on for the question being displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTracker {
    kind: QuestionKind,
    choice_count: usize,
    selected: Selection,
}

impl SelectionTracker {
    /// A fresh, empty tracker for `question`.
    pub fn for_question(question: &Question) -> Self {
        Self {
            kind: question.kind(),
            choice_count: question.choices().len(),
            selected: Selection::new(),
        }
    }

    /// Toggle `choice` on or off.
    ///
    /// Multi-select questions flip membership of `choice`. Single-select and
    /// boolean questions replace the whole selection with `{choice}`.
    pub fn toggle(&mut self, choice: usize) -> Result<(), QuizError> {
        if choice >= self.choice_count {
            return Err(QuizError::ChoiceOutOfRange {
                index: choice,
                len: self.choice_count,
            });
        }

        if self.kind.is_multi() {
            if !self.selected.remove(&choice) {
                self.selected.insert(choice);
            }
        } else {
            self.selected.clear();
            self.selected.insert(choice);
        }
        Ok(())
    }

    pub fn selection(&self) -> &Selection {
        &self.selected
    }

    /// Whether a commit would be accepted.
    pub fn can_proceed(&self) -> bool {
        !self.selected.is_empty()
    }

    pub(crate) fn into_selection(self) -> Selection {
        self.selected
    }
}
