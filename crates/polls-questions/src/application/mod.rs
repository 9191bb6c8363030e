//! Application layer for the polls context.

pub mod command_handlers;
pub mod query_handlers;
