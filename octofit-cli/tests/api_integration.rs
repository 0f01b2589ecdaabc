//! API Integration Tests
//!
//! These tests verify the complete API functionality by making HTTP requests
//! to a test router instance backed by a temporary database.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use octofit_shared::{decode_collection, Activity, Team, TableView, User, Workout};
use serde_json::Value;
use std::sync::Arc;
use tempfile::tempdir;
use tower::ServiceExt;

// Test utilities
async fn setup_test_app(seed: bool) -> (Router, octofit::db::Database, tempfile::TempDir) {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");

    let db = octofit::db::Database::new(&db_path).await.unwrap();
    if seed {
        octofit::db::seed::populate(db.pool()).await.unwrap();
    }

    let state = Arc::new(octofit::AppState { db: db.clone() });
    let app = octofit::server::build_router(state);

    (app, db, dir)
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (app, _db, _dir) = setup_test_app(false).await;

    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

// =============================================================================
// Collections
// =============================================================================

#[tokio::test]
async fn test_list_activities() {
    let (app, _db, _dir) = setup_test_app(true).await;

    let response = get(app, "/api/activities").await;
    assert_eq!(response.status(), StatusCode::OK);

    let activities = decode_collection::<Activity>(&body_text(response).await).unwrap();
    let table = TableView::from_records(&activities);

    assert_eq!(table.rows.len(), 5);
    assert_eq!(table.rows[0].cells, vec!["Cycling", "60"]);
    assert_eq!(table.rows[4].cells, vec!["Swimming", "75"]);
}

#[tokio::test]
async fn test_list_teams_with_members_in_order() {
    let (app, _db, _dir) = setup_test_app(true).await;

    let response = get(app, "/api/teams").await;
    assert_eq!(response.status(), StatusCode::OK);

    let teams = decode_collection::<Team>(&body_text(response).await).unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(
        teams[0].members_label(),
        "thundergod, metalgeek, zerocool, crashoverride, sleeptoken"
    );
}

#[tokio::test]
async fn test_list_users_serves_only_record_fields() {
    let (app, _db, _dir) = setup_test_app(true).await;

    let response = get(app, "/api/users").await;
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();

    let first = json[0].as_object().unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first["id"], 1);
    assert_eq!(first["name"], "thundergod");

    let users = decode_collection::<User>(&json.to_string()).unwrap();
    assert_eq!(users.len(), 5);
}

#[tokio::test]
async fn test_list_workouts() {
    let (app, _db, _dir) = setup_test_app(true).await;

    let response = get(app, "/api/workouts").await;
    let workouts = decode_collection::<Workout>(&body_text(response).await).unwrap();

    assert_eq!(workouts.len(), 5);
    assert_eq!(workouts[2].name, "Running Training");
    assert_eq!(workouts[2].description, "Training for a marathon");
}

#[tokio::test]
async fn test_empty_collections_are_empty_arrays() {
    let (app, _db, _dir) = setup_test_app(false).await;

    for uri in ["/api/activities", "/api/teams", "/api/users", "/api/workouts"] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert_eq!(body_text(response).await, "[]", "{}", uri);
    }
}

#[tokio::test]
async fn test_cors_allows_other_origins() {
    let (app, _db, _dir) = setup_test_app(true).await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/teams")
                .header("origin", "http://localhost:8080")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

// =============================================================================
// Seeding
// =============================================================================

#[tokio::test]
async fn test_populate_is_repeatable() {
    let (app, db, _dir) = setup_test_app(true).await;

    let before = body_text(get(app.clone(), "/api/teams").await).await;
    octofit::db::seed::populate(db.pool()).await.unwrap();
    let after = body_text(get(app, "/api/teams").await).await;

    assert_eq!(before, after);
}

// =============================================================================
// Static assets
// =============================================================================

#[tokio::test]
async fn test_missing_asset_is_not_found() {
    let (app, _db, _dir) = setup_test_app(false).await;

    let response = get(app, "/assets/missing.js").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
