//! Test repositories — `QuestionRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use polls_core::error::DomainError;
use polls_core::repository::{NewQuestion, QuestionRepository, StoredChoice, StoredQuestion};

#[derive(Debug, Default)]
struct Tables {
    questions: Vec<StoredQuestion>,
    choices: Vec<StoredChoice>,
    next_question_id: i64,
    next_choice_id: i64,
}

/// A repository that keeps questions and choices in memory. Ids are assigned
/// sequentially starting at 1, like a database sequence.
#[derive(Debug, Default)]
pub struct InMemoryQuestionRepository {
    tables: Mutex<Tables>,
}

impl InMemoryQuestionRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every stored question in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn questions(&self) -> Vec<StoredQuestion> {
        self.tables.lock().unwrap().questions.clone()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn create_question(
        &self,
        question: &NewQuestion,
    ) -> Result<StoredQuestion, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_question_id += 1;
        let stored = StoredQuestion {
            id: tables.next_question_id,
            question_text: question.question_text.clone(),
            pub_date: question.pub_date,
        };
        tables.questions.push(stored.clone());
        Ok(stored)
    }

    async fn find_question(
        &self,
        question_id: i64,
    ) -> Result<Option<StoredQuestion>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .cloned())
    }

    async fn published_questions(
        &self,
        as_of: DateTime<Utc>,
        limit: Option<usize>,
    ) -> Result<Vec<StoredQuestion>, DomainError> {
        let tables = self.tables.lock().unwrap();
        let mut published: Vec<StoredQuestion> = tables
            .questions
            .iter()
            .filter(|q| q.pub_date <= as_of)
            .cloned()
            .collect();
        published.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(b.id.cmp(&a.id)));
        if let Some(limit) = limit {
            published.truncate(limit);
        }
        Ok(published)
    }

    async fn add_choice(
        &self,
        question_id: i64,
        choice_text: &str,
    ) -> Result<StoredChoice, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.questions.iter().any(|q| q.id == question_id) {
            return Err(DomainError::QuestionNotFound(question_id));
        }
        tables.next_choice_id += 1;
        let stored = StoredChoice {
            id: tables.next_choice_id,
            question_id,
            choice_text: choice_text.to_owned(),
            votes: 0,
        };
        tables.choices.push(stored.clone());
        Ok(stored)
    }

    async fn choices_for(&self, question_id: i64) -> Result<Vec<StoredChoice>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .choices
            .iter()
            .filter(|c| c.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn record_vote(
        &self,
        question_id: i64,
        choice_id: i64,
    ) -> Result<Option<StoredChoice>, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables
            .choices
            .iter_mut()
            .find(|c| c.id == choice_id && c.question_id == question_id)
            .map(|choice| {
                choice.votes += 1;
                choice.clone()
            }))
    }
}

/// A repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingQuestionRepository;

fn connection_refused() -> DomainError {
    DomainError::Infrastructure("connection refused".into())
}

#[async_trait]
impl QuestionRepository for FailingQuestionRepository {
    async fn create_question(
        &self,
        _question: &NewQuestion,
    ) -> Result<StoredQuestion, DomainError> {
        Err(connection_refused())
    }

    async fn find_question(
        &self,
        _question_id: i64,
    ) -> Result<Option<StoredQuestion>, DomainError> {
        Err(connection_refused())
    }

    async fn published_questions(
        &self,
        _as_of: DateTime<Utc>,
        _limit: Option<usize>,
    ) -> Result<Vec<StoredQuestion>, DomainError> {
        Err(connection_refused())
    }

    async fn add_choice(
        &self,
        _question_id: i64,
        _choice_text: &str,
    ) -> Result<StoredChoice, DomainError> {
        Err(connection_refused())
    }

    async fn choices_for(&self, _question_id: i64) -> Result<Vec<StoredChoice>, DomainError> {
        Err(connection_refused())
    }

    async fn record_vote(
        &self,
        _question_id: i64,
        _choice_id: i64,
    ) -> Result<Option<StoredChoice>, DomainError> {
        Err(connection_refused())
    }
}
