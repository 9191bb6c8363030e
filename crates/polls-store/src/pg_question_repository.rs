//! `PostgreSQL` implementation of the `QuestionRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::error;

use polls_core::error::DomainError;
use polls_core::repository::{NewQuestion, QuestionRepository, StoredChoice, StoredQuestion};

#[derive(Debug, sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    question_text: String,
    pub_date: DateTime<Utc>,
}

impl From<QuestionRow> for StoredQuestion {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            question_text: row.question_text,
            pub_date: row.pub_date,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ChoiceRow {
    id: i64,
    question_id: i64,
    choice_text: String,
    votes: i64,
}

impl From<ChoiceRow> for StoredChoice {
    fn from(row: ChoiceRow) -> Self {
        Self {
            id: row.id,
            question_id: row.question_id,
            choice_text: row.choice_text,
            votes: row.votes,
        }
    }
}

fn infrastructure(operation: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |err| {
        error!(operation, error = %err, "question store query failed");
        DomainError::Infrastructure(format!("{operation} failed: {err}"))
    }
}

/// PostgreSQL-backed question repository.
#[derive(Debug, Clone)]
pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    /// Creates a new `PgQuestionRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn create_question(
        &self,
        question: &NewQuestion,
    ) -> Result<StoredQuestion, DomainError> {
        sqlx::query_as::<_, QuestionRow>(
            "INSERT INTO polls_question (question_text, pub_date) VALUES ($1, $2) \
             RETURNING id, question_text, pub_date",
        )
        .bind(&question.question_text)
        .bind(question.pub_date)
        .fetch_one(&self.pool)
        .await
        .map(StoredQuestion::from)
        .map_err(infrastructure("create_question"))
    }

    async fn find_question(
        &self,
        question_id: i64,
    ) -> Result<Option<StoredQuestion>, DomainError> {
        sqlx::query_as::<_, QuestionRow>(
            "SELECT id, question_text, pub_date FROM polls_question WHERE id = $1",
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(StoredQuestion::from))
        .map_err(infrastructure("find_question"))
    }

    async fn published_questions(
        &self,
        as_of: DateTime<Utc>,
        limit: Option<usize>,
    ) -> Result<Vec<StoredQuestion>, DomainError> {
        // LIMIT NULL is no limit in PostgreSQL.
        let limit = limit.map(|l| i64::try_from(l).unwrap_or(i64::MAX));
        sqlx::query_as::<_, QuestionRow>(
            "SELECT id, question_text, pub_date FROM polls_question \
             WHERE pub_date <= $1 ORDER BY pub_date DESC, id DESC LIMIT $2",
        )
        .bind(as_of)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map(|rows| rows.into_iter().map(StoredQuestion::from).collect())
        .map_err(infrastructure("published_questions"))
    }

    async fn add_choice(
        &self,
        question_id: i64,
        choice_text: &str,
    ) -> Result<StoredChoice, DomainError> {
        let result = sqlx::query_as::<_, ChoiceRow>(
            "INSERT INTO polls_choice (question_id, choice_text) VALUES ($1, $2) \
             RETURNING id, question_id, choice_text, votes",
        )
        .bind(question_id)
        .bind(choice_text)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(DomainError::QuestionNotFound(question_id))
            }
            Err(err) => Err(infrastructure("add_choice")(err)),
        }
    }

    async fn choices_for(&self, question_id: i64) -> Result<Vec<StoredChoice>, DomainError> {
        sqlx::query_as::<_, ChoiceRow>(
            "SELECT id, question_id, choice_text, votes FROM polls_choice \
             WHERE question_id = $1 ORDER BY id",
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await
        .map(|rows| rows.into_iter().map(StoredChoice::from).collect())
        .map_err(infrastructure("choices_for"))
    }

    async fn record_vote(
        &self,
        question_id: i64,
        choice_id: i64,
    ) -> Result<Option<StoredChoice>, DomainError> {
        sqlx::query_as::<_, ChoiceRow>(
            "UPDATE polls_choice SET votes = votes + 1 \
             WHERE id = $1 AND question_id = $2 \
             RETURNING id, question_id, choice_text, votes",
        )
        .bind(choice_id)
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(StoredChoice::from))
        .map_err(infrastructure("record_vote"))
    }
}
