// GET /api/health: liveness probe. Always 200 while the process serves.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::web::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.config.service_name.clone(),
    })
}
