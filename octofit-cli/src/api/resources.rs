//! Collection endpoints
//!
//! Each handler returns the full collection as a JSON array of shared
//! records. There are no query parameters and no pagination.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use octofit_shared::ResourceKind;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};

use crate::db::repository::ResourceRepository;
use crate::AppState;

/// List all activities
pub async fn list_activities(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    respond(
        ResourceKind::Activities,
        ResourceRepository::list_activities(state.db.pool()).await,
    )
}

/// List all teams
pub async fn list_teams(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    respond(ResourceKind::Teams, ResourceRepository::list_teams(state.db.pool()).await)
}

/// List all users
pub async fn list_users(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    respond(ResourceKind::Users, ResourceRepository::list_users(state.db.pool()).await)
}

/// List all workouts
pub async fn list_workouts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    respond(
        ResourceKind::Workouts,
        ResourceRepository::list_workouts(state.db.pool()).await,
    )
}

fn respond<T: Serialize>(kind: ResourceKind, result: Result<Vec<T>, sqlx::Error>) -> Response {
    match result {
        Ok(records) => {
            debug!("Serving {} {}", records.len(), kind);
            (StatusCode::OK, Json(records)).into_response()
        }
        Err(e) => {
            error!("Failed to list {}: {}", kind, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": format!("Failed to list {}", kind)
                })),
            )
                .into_response()
        }
    }
}
