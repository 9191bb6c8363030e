//! Polls API — library surface shared by the server binary and its tests.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
