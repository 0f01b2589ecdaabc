//! Web Server for OctoFit
//!
//! Serves the REST API and the embedded web UI.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use rust_embed::RustEmbed;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api;
use crate::db::Database;

/// Embedded UI assets (compiled WASM app)
#[derive(RustEmbed)]
#[folder = "../ui/dist/"]
struct UiAssets;

/// Server state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// Build the full application router
pub fn build_router(state: Arc<AppState>) -> Router {
    // The UI may be served from another origin when built with an absolute base URL
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api::create_api_router())
        .route("/", get(serve_index))
        // Static files and SPA routing
        .fallback(serve_static)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server
pub async fn start_server(
    port: u16,
    db: Database,
) -> anyhow::Result<tokio::task::JoinHandle<anyhow::Result<()>>> {
    let app = build_router(Arc::new(AppState { db }));

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server listening on {}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))
    });

    Ok(handle)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Serve index.html
async fn serve_index() -> Response {
    serve_file("index.html")
}

/// Serve static files from embedded assets (fallback handler)
async fn serve_static(req: Request<Body>) -> Response {
    let path = req.uri().path().to_string();
    tracing::debug!("Fallback handler called for path: {}", path);

    if let Some(response) = try_serve_file(&path) {
        return response;
    }

    // For SPA routing, serve index.html for non-asset paths
    if !path.contains('.') {
        return serve_file("index.html");
    }

    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

fn try_serve_file(path: &str) -> Option<Response> {
    let path = path.trim_start_matches('/');
    UiAssets::get(path).map(|content| {
        let mime = mime_guess::from_path(path).first_or_octet_stream().to_string();

        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime),
                (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
            ],
            content.data.into_owned(),
        )
            .into_response()
    })
}

fn serve_file(path: &str) -> Response {
    match UiAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream().to_string();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime)],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "UI not built. Run `trunk build` in ui/ first.").into_response(),
    }
}
