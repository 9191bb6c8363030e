//! Polls Core — shared domain abstractions.
//!
//! This crate defines the traits and record types the polls context and its
//! adapters depend on. It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod repository;
