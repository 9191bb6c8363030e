//! Polls — questions, choices and votes bounded context.
//!
//! Responsible for the publication rules of questions, the public index,
//! detail and results views, and vote tallying.

pub mod application;
pub mod domain;
