// Web server: Axum-based JSON API.
//
// Three routes: POST /api/validate runs the keyword validator,
// GET|POST /api/discovery serves the static tool-registry schema, and
// GET /api/health is the liveness probe. Anything else is a bare 404.
//
// Every response carries a permissive CORS header so browser-based
// orchestrators can call the service directly.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::validation::ContentScanner;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub scanner: Arc<dyn ContentScanner>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, scanner: Arc<dyn ContentScanner>) -> Self {
        Self {
            scanner,
            config: Arc::new(config),
        }
    }
}

/// Start the Axum web server and block until it exits (Ctrl-C).
pub async fn run_server(config: Config, scanner: Arc<dyn ContentScanner>) -> Result<()> {
    let addr = config.listen_addr();
    let service_name = config.service_name.clone();
    let app = build_router(AppState::new(config, scanner));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("{service_name} listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

/// Route table. Each path only answers its listed methods; other methods
/// (HEAD included) fall through to the same empty 404 as unknown paths.
/// Request bodies are unbounded: submitted content may be any length.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/api/validate",
            post(handlers::validate::validate_content).fallback(not_found),
        )
        .route(
            "/api/discovery",
            get(handlers::discovery::get_discovery)
                .post(handlers::discovery::get_discovery)
                .head(not_found)
                .fallback(not_found),
        )
        .route(
            "/api/health",
            get(handlers::health::health)
                .head(not_found)
                .fallback(not_found),
        );

    api.fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
