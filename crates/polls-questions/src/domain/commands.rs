//! Commands for the polls context.

use chrono::{DateTime, Utc};
use polls_core::command::Command;
use uuid::Uuid;

/// Command to author a new question.
#[derive(Debug, Clone)]
pub struct CreateQuestion {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Display text.
    pub question_text: String,
    /// Publication timestamp; `None` publishes immediately.
    pub pub_date: Option<DateTime<Utc>>,
}

impl Command for CreateQuestion {
    fn command_type(&self) -> &'static str {
        "polls.create_question"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to attach a choice to an existing question.
#[derive(Debug, Clone)]
pub struct AddChoice {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The question receiving the choice.
    pub question_id: i64,
    /// Display text.
    pub choice_text: String,
}

impl Command for AddChoice {
    fn command_type(&self) -> &'static str {
        "polls.add_choice"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to cast one vote for a choice.
#[derive(Debug, Clone)]
pub struct CastVote {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The question being voted on.
    pub question_id: i64,
    /// The selected choice.
    pub choice_id: i64,
}

impl Command for CastVote {
    fn command_type(&self) -> &'static str {
        "polls.cast_vote"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
