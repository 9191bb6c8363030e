//! Routes for the polls context.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get, routing::post};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use polls_core::repository::{StoredChoice, StoredQuestion};
use polls_questions::application::query_handlers::{DetailView, IndexView, ResultsView};
use polls_questions::application::{command_handlers, query_handlers};
use polls_questions::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Named URLs of the polls routes.
pub mod urls {
    /// Route pattern of the index.
    pub const INDEX: &str = "/polls";
    /// Route pattern of a question's detail page.
    pub const DETAIL: &str = "/polls/{question_id}";
    /// Route pattern of a question's results page.
    pub const RESULTS: &str = "/polls/{question_id}/results";
    /// Route pattern for voting on a question.
    pub const VOTE: &str = "/polls/{question_id}/vote";
    /// Route pattern for adding choices to a question.
    pub const CHOICES: &str = "/polls/{question_id}/choices";

    /// `polls:index`
    #[must_use]
    pub fn index() -> &'static str {
        INDEX
    }

    /// `polls:detail`
    #[must_use]
    pub fn detail(question_id: i64) -> String {
        format!("/polls/{question_id}")
    }

    /// `polls:results`
    #[must_use]
    pub fn results(question_id: i64) -> String {
        format!("/polls/{question_id}/results")
    }

    /// `polls:vote`
    #[must_use]
    pub fn vote(question_id: i64) -> String {
        format!("/polls/{question_id}/vote")
    }

    /// `polls:choices`
    #[must_use]
    pub fn choices(question_id: i64) -> String {
        format!("/polls/{question_id}/choices")
    }
}

/// Query string for GET /polls.
#[derive(Debug, Deserialize)]
pub struct IndexParams {
    /// Maximum number of questions to list.
    pub limit: Option<usize>,
}

/// Request body for POST /polls.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    /// Display text.
    pub question_text: String,
    /// Publication timestamp; defaults to now.
    pub pub_date: Option<DateTime<Utc>>,
}

/// Request body for POST /polls/{question_id}/choices.
#[derive(Debug, Deserialize)]
pub struct AddChoiceRequest {
    /// Display text.
    pub choice_text: String,
}

/// Request body for POST /polls/{question_id}/vote.
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    /// The selected choice.
    pub choice_id: i64,
}

/// GET /polls
#[instrument(skip(state))]
async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<Json<IndexView>, ApiError> {
    let view = query_handlers::latest_questions(
        state.clock.as_ref(),
        &*state.question_repository,
        params.limit,
    )
    .await?;

    Ok(Json(view))
}

/// POST /polls
#[instrument(skip(state, request))]
async fn create_question(
    State(state): State<AppState>,
    Json(request): Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<StoredQuestion>), ApiError> {
    let command = commands::CreateQuestion {
        correlation_id: Uuid::new_v4(),
        question_text: request.question_text,
        pub_date: request.pub_date,
    };

    info!(correlation_id = %command.correlation_id, "handling create_question command");

    let question = command_handlers::handle_create_question(
        &command,
        state.clock.as_ref(),
        &*state.question_repository,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(question)))
}

/// GET /polls/{question_id}
#[instrument(skip(state))]
async fn detail(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Json<DetailView>, ApiError> {
    let view = query_handlers::question_detail(
        question_id,
        state.clock.as_ref(),
        &*state.question_repository,
    )
    .await?;

    Ok(Json(view))
}

/// GET /polls/{question_id}/results
#[instrument(skip(state))]
async fn results(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Json<ResultsView>, ApiError> {
    let view = query_handlers::question_results(
        question_id,
        state.clock.as_ref(),
        &*state.question_repository,
    )
    .await?;

    Ok(Json(view))
}

/// POST /polls/{question_id}/choices
#[instrument(skip(state, request))]
async fn add_choice(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Json(request): Json<AddChoiceRequest>,
) -> Result<(StatusCode, Json<StoredChoice>), ApiError> {
    let command = commands::AddChoice {
        correlation_id: Uuid::new_v4(),
        question_id,
        choice_text: request.choice_text,
    };

    info!(correlation_id = %command.correlation_id, "handling add_choice command");

    let choice =
        command_handlers::handle_add_choice(&command, &*state.question_repository).await?;

    Ok((StatusCode::CREATED, Json(choice)))
}

/// POST /polls/{question_id}/vote
///
/// Responds with the updated results of the question.
#[instrument(skip(state, request), fields(choice_id = request.choice_id))]
async fn vote(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
    Json(request): Json<VoteRequest>,
) -> Result<Json<ResultsView>, ApiError> {
    let command = commands::CastVote {
        correlation_id: Uuid::new_v4(),
        question_id,
        choice_id: request.choice_id,
    };

    info!(correlation_id = %command.correlation_id, "handling cast_vote command");

    command_handlers::handle_cast_vote(&command, state.clock.as_ref(), &*state.question_repository)
        .await?;

    let view = query_handlers::question_results(
        question_id,
        state.clock.as_ref(),
        &*state.question_repository,
    )
    .await?;

    Ok(Json(view))
}

/// Returns the router for the polls context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(urls::INDEX, get(index).post(create_question))
        .route(urls::DETAIL, get(detail))
        .route(urls::RESULTS, get(results))
        .route(urls::CHOICES, post(add_choice))
        .route(urls::VOTE, post(vote))
}
