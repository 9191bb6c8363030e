//! Command handlers for the polls context.
//!
//! Each handler validates its command, consults the clock where publication
//! matters, and persists through the question repository.

use polls_core::clock::Clock;
use polls_core::command::Command;
use polls_core::error::DomainError;
use polls_core::repository::{NewQuestion, QuestionRepository, StoredChoice, StoredQuestion};
use tracing::info;

use crate::application::query_handlers::load_published;
use crate::domain::commands::{AddChoice, CastVote, CreateQuestion};
use crate::domain::question::MAX_TEXT_LEN;

/// Message returned when a vote names a choice outside the question.
pub const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

fn validate_text(field: &str, text: &str) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be blank")));
    }
    if text.chars().count() > MAX_TEXT_LEN {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

/// Handles the `CreateQuestion` command. A missing `pub_date` publishes the
/// question at `clock.now()`.
///
/// # Errors
///
/// Returns `DomainError::Validation` for blank or over-long text.
/// Returns `DomainError::Infrastructure` if persistence fails.
pub async fn handle_create_question(
    command: &CreateQuestion,
    clock: &dyn Clock,
    repo: &dyn QuestionRepository,
) -> Result<StoredQuestion, DomainError> {
    validate_text("question_text", &command.question_text)?;

    let question = repo
        .create_question(&NewQuestion {
            question_text: command.question_text.clone(),
            pub_date: command.pub_date.unwrap_or_else(|| clock.now()),
        })
        .await?;

    info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        question_id = question.id,
        "question created"
    );
    Ok(question)
}

/// Handles the `AddChoice` command. Choices may be added to questions that
/// are not published yet.
///
/// # Errors
///
/// Returns `DomainError::Validation` for blank or over-long text.
/// Returns `DomainError::QuestionNotFound` if the question does not exist.
/// Returns `DomainError::Infrastructure` if persistence fails.
pub async fn handle_add_choice(
    command: &AddChoice,
    repo: &dyn QuestionRepository,
) -> Result<StoredChoice, DomainError> {
    validate_text("choice_text", &command.choice_text)?;
    if repo.find_question(command.question_id).await?.is_none() {
        return Err(DomainError::QuestionNotFound(command.question_id));
    }

    let choice = repo
        .add_choice(command.question_id, &command.choice_text)
        .await?;

    info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        question_id = command.question_id,
        choice_id = choice.id,
        "choice added"
    );
    Ok(choice)
}

/// Handles the `CastVote` command against a published question.
///
/// # Errors
///
/// Returns `DomainError::QuestionNotFound` if the question does not exist or
/// is not published yet.
/// Returns `DomainError::Validation` if the choice does not belong to the
/// question.
/// Returns `DomainError::Infrastructure` if persistence fails.
pub async fn handle_cast_vote(
    command: &CastVote,
    clock: &dyn Clock,
    repo: &dyn QuestionRepository,
) -> Result<StoredChoice, DomainError> {
    load_published(command.question_id, clock, repo).await?;

    let choice = repo
        .record_vote(command.question_id, command.choice_id)
        .await?
        .ok_or_else(|| DomainError::Validation(NO_CHOICE_SELECTED.to_owned()))?;

    info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        question_id = command.question_id,
        choice_id = choice.id,
        votes = choice.votes,
        "vote recorded"
    );
    Ok(choice)
}
