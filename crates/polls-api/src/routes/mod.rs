//! HTTP routes.

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod polls;

/// Builds the full application router over `app_state`.
pub fn router(app_state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(polls::router())
        .with_state(app_state)
}
