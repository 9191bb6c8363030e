//! Domain model for the polls context.

pub mod choice;
pub mod commands;
pub mod question;
