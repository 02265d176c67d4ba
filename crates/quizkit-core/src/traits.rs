//! Session observer trait.
//!
//! Presentation layers and the scripted driver report progress through this
//! trait instead of printing directly.

use crate::error::QuizError;
use crate::model::{Question, Selection};
use crate::scorer::GradeReport;

/// Receives notifications as a session moves through its questions.
pub trait SessionObserver {
    fn on_question(&self, position: usize, total: usize, question: &Question);
    fn on_toggle(&self, position: usize, selection: &Selection);
    fn on_commit(&self, position: usize, selection: &Selection);
    fn on_rejected(&self, position: usize, error: &QuizError);
    fn on_graded(&self, report: &GradeReport);
}

/// No-op observer.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn on_question(&self, _: usize, _: usize, _: &Question) {}
    fn on_toggle(&self, _: usize, _: &Selection) {}
    fn on_commit(&self, _: usize, _: &Selection) {}
    fn on_rejected(&self, _: usize, _: &QuizError) {}
    fn on_graded(&self, _: &GradeReport) {}
}

/// Observer that emits `tracing` events.
pub struct TracingObserver;

impl SessionObserver for TracingObserver {
    fn on_question(&self, position: usize, total: usize, question: &Question) {
        tracing::debug!(
            "question {}/{} [{}] {}",
            position + 1,
            total,
            question.kind(),
            question.id()
        );
    }

    fn on_toggle(&self, position: usize, selection: &Selection) {
        tracing::trace!("question {}: selection now {:?}", position + 1, selection);
    }

    fn on_commit(&self, position: usize, selection: &Selection) {
        tracing::debug!("question {}: committed {:?}", position + 1, selection);
    }

    fn on_rejected(&self, position: usize, error: &QuizError) {
        tracing::warn!("question {}: {}", position + 1, error);
    }

    fn on_graded(&self, report: &GradeReport) {
        tracing::info!(
            "graded: {}/{} ({:.1}%)",
            report.score,
            report.total,
            report.percentage()
        );
    }
}
