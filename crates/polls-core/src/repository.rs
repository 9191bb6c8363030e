//! Question repository abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A question that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    /// Display text.
    pub question_text: String,
    /// Publication timestamp.
    pub pub_date: DateTime<Utc>,
}

/// Stored representation of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredQuestion {
    /// Identity assigned by the store.
    pub id: i64,
    /// Display text.
    pub question_text: String,
    /// Publication timestamp.
    pub pub_date: DateTime<Utc>,
}

/// Stored representation of a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredChoice {
    /// Identity assigned by the store.
    pub id: i64,
    /// The owning question.
    pub question_id: i64,
    /// Display text.
    pub choice_text: String,
    /// Number of votes cast for this choice.
    pub votes: i64,
}

/// Repository trait for persisting questions and their choices.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Persist a new question and return it with its assigned id.
    async fn create_question(&self, question: &NewQuestion)
    -> Result<StoredQuestion, DomainError>;

    /// Load a question by id, regardless of its publication date.
    async fn find_question(&self, question_id: i64)
    -> Result<Option<StoredQuestion>, DomainError>;

    /// Load questions with `pub_date <= as_of`, most recent first.
    /// `limit` truncates the result after ordering.
    async fn published_questions(
        &self,
        as_of: DateTime<Utc>,
        limit: Option<usize>,
    ) -> Result<Vec<StoredQuestion>, DomainError>;

    /// Attach a new choice with zero votes to a question.
    async fn add_choice(
        &self,
        question_id: i64,
        choice_text: &str,
    ) -> Result<StoredChoice, DomainError>;

    /// Load the choices of a question, ordered by id.
    async fn choices_for(&self, question_id: i64) -> Result<Vec<StoredChoice>, DomainError>;

    /// Increment the vote count of `choice_id` if it belongs to
    /// `question_id`. Returns `None` when no such choice exists.
    async fn record_vote(
        &self,
        question_id: i64,
        choice_id: i64,
    ) -> Result<Option<StoredChoice>, DomainError>;
}
