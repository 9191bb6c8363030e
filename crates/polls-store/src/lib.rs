//! Polls — PostgreSQL persistence adapter.

pub mod pg_question_repository;
