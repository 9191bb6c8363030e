//! Query handlers for the polls context.
//!
//! Read-only views over the question repository. Every view hides questions
//! whose publication date is still in the future.

use std::fmt;

use chrono::{DateTime, Utc};
use polls_core::clock::Clock;
use polls_core::error::DomainError;
use polls_core::repository::QuestionRepository;
use serde::Serialize;

use crate::domain::choice::Choice;
use crate::domain::question::Question;

/// One entry of the index listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSummary {
    /// The question identifier.
    pub id: i64,
    /// Display text.
    pub question_text: String,
    /// Publication timestamp.
    pub pub_date: DateTime<Utc>,
    /// Whether the question was published within the last day.
    pub was_published_recently: bool,
}

impl fmt::Display for QuestionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Question: {}>", self.question_text)
    }
}

/// Read-only view rendered by the index page.
#[derive(Debug, Clone, Serialize)]
pub struct IndexView {
    /// Published questions, most recent first.
    pub latest_question_list: Vec<QuestionSummary>,
}

/// A choice as shown on the detail page.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceView {
    /// The choice identifier.
    pub id: i64,
    /// Display text.
    pub choice_text: String,
}

/// Read-only view of a single published question and its choices.
#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    /// The question identifier.
    pub id: i64,
    /// Display text.
    pub question_text: String,
    /// Publication timestamp.
    pub pub_date: DateTime<Utc>,
    /// Choices ordered by id.
    pub choices: Vec<ChoiceView>,
}

/// A choice with its vote tally.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceResult {
    /// The choice identifier.
    pub id: i64,
    /// Display text.
    pub choice_text: String,
    /// Votes cast so far.
    pub votes: i64,
}

/// Vote tallies for a published question.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    /// The question identifier.
    pub id: i64,
    /// Display text.
    pub question_text: String,
    /// Choices ordered by id.
    pub choices: Vec<ChoiceResult>,
    /// Sum of all choice votes.
    pub total_votes: i64,
}

/// Lists questions published at or before `clock.now()`, most recent first.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn latest_questions(
    clock: &dyn Clock,
    repo: &dyn QuestionRepository,
    limit: Option<usize>,
) -> Result<IndexView, DomainError> {
    let now = clock.now();
    let latest_question_list = repo
        .published_questions(now, limit)
        .await?
        .into_iter()
        .map(|stored| {
            let id = stored.id;
            let question = Question::from(stored);
            QuestionSummary {
                id,
                was_published_recently: question.was_published_recently_at(now),
                question_text: question.question_text,
                pub_date: question.pub_date,
            }
        })
        .collect();

    Ok(IndexView {
        latest_question_list,
    })
}

/// Loads a question, treating future questions as missing.
pub(crate) async fn load_published(
    question_id: i64,
    clock: &dyn Clock,
    repo: &dyn QuestionRepository,
) -> Result<Question, DomainError> {
    match repo.find_question(question_id).await?.map(Question::from) {
        Some(question) if question.is_published_at(clock.now()) => Ok(question),
        _ => Err(DomainError::QuestionNotFound(question_id)),
    }
}

/// Retrieves a published question and its choices.
///
/// # Errors
///
/// Returns `DomainError::QuestionNotFound` if the question does not exist or
/// is not published yet.
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn question_detail(
    question_id: i64,
    clock: &dyn Clock,
    repo: &dyn QuestionRepository,
) -> Result<DetailView, DomainError> {
    let question = load_published(question_id, clock, repo).await?;
    let choices = repo
        .choices_for(question_id)
        .await?
        .into_iter()
        .map(|stored| ChoiceView {
            id: stored.id,
            choice_text: stored.choice_text,
        })
        .collect();

    Ok(DetailView {
        id: question_id,
        question_text: question.question_text,
        pub_date: question.pub_date,
        choices,
    })
}

/// Retrieves the vote tallies of a published question.
///
/// # Errors
///
/// Returns `DomainError::QuestionNotFound` if the question does not exist or
/// is not published yet.
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn question_results(
    question_id: i64,
    clock: &dyn Clock,
    repo: &dyn QuestionRepository,
) -> Result<ResultsView, DomainError> {
    let question = load_published(question_id, clock, repo).await?;
    let choices: Vec<ChoiceResult> = repo
        .choices_for(question_id)
        .await?
        .into_iter()
        .map(Choice::from)
        .map(|choice| ChoiceResult {
            id: choice.id,
            choice_text: choice.choice_text,
            votes: choice.votes,
        })
        .collect();
    let total_votes: i64 = choices.iter().map(|c| c.votes).sum();

    Ok(ResultsView {
        id: question_id,
        question_text: question.question_text,
        choices,
        total_votes,
    })
}
