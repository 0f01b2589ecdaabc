//! API endpoints for OctoFit
//!
//! Read-only REST API, one collection per resource:
//! - `GET /activities`
//! - `GET /teams`
//! - `GET /users`
//! - `GET /workouts`

pub mod resources;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;

/// Create the API router, to be nested under `/api`
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(resources::list_activities))
        .route("/teams", get(resources::list_teams))
        .route("/users", get(resources::list_users))
        .route("/workouts", get(resources::list_workouts))
}
