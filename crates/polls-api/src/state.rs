//! Shared application state.

use std::sync::Arc;

use polls_core::clock::Clock;
use polls_core::repository::QuestionRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of "now" for publication checks.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Question and choice persistence.
    pub question_repository: Arc<dyn QuestionRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        question_repository: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            clock,
            question_repository,
        }
    }
}
