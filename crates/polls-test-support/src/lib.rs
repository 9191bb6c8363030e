//! Shared test mocks and utilities for the polls service.

mod clock;
mod factory;
mod repository;

pub use clock::FixedClock;
pub use factory::{create_question, days_from_now};
pub use repository::{FailingQuestionRepository, InMemoryQuestionRepository};
