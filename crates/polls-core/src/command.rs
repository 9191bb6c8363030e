//! Command abstractions.
//!
//! Poll authoring and voting (`CreateQuestion`, `AddChoice`, `CastVote`) are
//! modelled as commands so every write carries a correlation id into the logs.

use uuid::Uuid;

/// Trait that all commands implement.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted type name logged with the command, e.g. `polls.cast_vote`.
    fn command_type(&self) -> &'static str;

    /// Correlation ID tying the request span to the handler's log lines.
    fn correlation_id(&self) -> Uuid;
}
