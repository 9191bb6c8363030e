//! Answer options attached to a question.

use std::fmt;

use polls_core::repository::StoredChoice;

/// One answer option of a question, with its vote tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Store-assigned identity.
    pub id: i64,
    /// The owning question.
    pub question_id: i64,
    /// Display text.
    pub choice_text: String,
    /// Votes cast so far.
    pub votes: i64,
}

impl From<StoredChoice> for Choice {
    fn from(stored: StoredChoice) -> Self {
        Self {
            id: stored.id,
            question_id: stored.question_id,
            choice_text: stored.choice_text,
            votes: stored.votes,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Choice: {}>", self.choice_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored_choice_and_display() {
        let choice = Choice::from(StoredChoice {
            id: 3,
            question_id: 1,
            choice_text: "The sky".to_owned(),
            votes: 4,
        });

        assert_eq!(choice.votes, 4);
        assert_eq!(choice.to_string(), "<Choice: The sky>");
    }
}
