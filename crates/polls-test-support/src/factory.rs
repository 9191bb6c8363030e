//! Question factory used by tests to seed a repository.

use chrono::{DateTime, Duration, Utc};
use polls_core::clock::Clock;
use polls_core::error::DomainError;
use polls_core::repository::{NewQuestion, QuestionRepository, StoredQuestion};

const NANOS_PER_DAY: f64 = 86_400e9;

/// Returns `clock.now()` shifted by `days`, which may be fractional.
/// Positive offsets are in the future, negative ones in the past; a non-zero
/// offset never collapses onto `now`, however small.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `days` is not finite or the shifted
/// timestamp is out of range.
#[allow(clippy::cast_possible_truncation)]
pub fn days_from_now(clock: &dyn Clock, days: f64) -> Result<DateTime<Utc>, DomainError> {
    let out_of_range = || DomainError::Validation(format!("day offset out of range: {days}"));

    let nanos = days * NANOS_PER_DAY;
    // i64::MAX as f64 rounds up to 2^63, so a strict bound keeps the cast exact.
    if !nanos.is_finite() || nanos.abs() >= i64::MAX as f64 {
        return Err(out_of_range());
    }
    let nanos = if nanos > 0.0 { nanos.ceil() } else { nanos.floor() };

    clock
        .now()
        .checked_add_signed(Duration::nanoseconds(nanos as i64))
        .ok_or_else(out_of_range)
}

/// Persists a question whose `pub_date` is offset from now by `days`.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an unrepresentable offset and
/// propagates any error returned by the repository.
pub async fn create_question(
    repo: &dyn QuestionRepository,
    clock: &dyn Clock,
    question_text: &str,
    days: f64,
) -> Result<StoredQuestion, DomainError> {
    repo.create_question(&NewQuestion {
        question_text: question_text.to_owned(),
        pub_date: days_from_now(clock, days)?,
    })
    .await
}
