//! The question entity and its publication rules.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use polls_core::clock::Clock;
use polls_core::repository::StoredQuestion;

/// Maximum length of question and choice texts.
pub const MAX_TEXT_LEN: usize = 200;

/// A poll question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Store-assigned identity; `None` until the question is persisted.
    pub id: Option<i64>,
    /// Display text.
    pub question_text: String,
    /// The moment the question becomes visible.
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// Creates an unsaved question.
    #[must_use]
    pub fn new(question_text: impl Into<String>, pub_date: DateTime<Utc>) -> Self {
        Self {
            id: None,
            question_text: question_text.into(),
            pub_date,
        }
    }

    /// Whether the question was published within the last day, as seen by
    /// `clock`.
    #[must_use]
    pub fn was_published_recently(&self, clock: &dyn Clock) -> bool {
        self.was_published_recently_at(clock.now())
    }

    /// Whether `pub_date` lies in `[now - 1 day, now]`. Both ends inclusive.
    #[must_use]
    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }

    /// Whether the question is visible at `now`.
    #[must_use]
    pub fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }
}

impl From<StoredQuestion> for Question {
    fn from(stored: StoredQuestion) -> Self {
        Self {
            id: Some(stored.id),
            question_text: stored.question_text,
            pub_date: stored.pub_date,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Question: {}>", self.question_text)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use polls_test_support::FixedClock;

    use super::*;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_was_published_recently_with_future_question() {
        let clock = clock();
        let future_question = Question::new("", clock.0 + Duration::days(30));

        assert!(!future_question.was_published_recently(&clock));
    }

    #[test]
    fn test_was_published_recently_with_old_question() {
        let clock = clock();
        let old_question = Question::new("", clock.0 - Duration::days(3));

        assert!(!old_question.was_published_recently(&clock));
    }

    #[test]
    fn test_was_published_recently_with_recent_question() {
        let clock = clock();
        let recent_question = Question::new("", clock.0 - Duration::hours(12));

        assert!(recent_question.was_published_recently(&clock));
    }

    #[test]
    fn test_was_published_recently_at_window_bounds() {
        let now = clock().0;

        assert!(Question::new("", now).was_published_recently_at(now));
        assert!(Question::new("", now - Duration::days(1)).was_published_recently_at(now));
        assert!(
            !Question::new("", now - Duration::days(1) - Duration::seconds(1))
                .was_published_recently_at(now)
        );
        assert!(!Question::new("", now + Duration::seconds(1)).was_published_recently_at(now));
    }

    #[test]
    fn test_display_matches_question_repr() {
        let question = Question::new("Past Question.", clock().0);

        assert_eq!(question.to_string(), "<Question: Past Question.>");
    }

    #[test]
    fn test_from_stored_question_keeps_identity() {
        let stored = StoredQuestion {
            id: 7,
            question_text: "What's up?".to_owned(),
            pub_date: clock().0,
        };

        let question = Question::from(stored);

        assert_eq!(question.id, Some(7));
        assert!(question.is_published_at(clock().0));
    }
}
