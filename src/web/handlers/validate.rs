// POST /api/validate: run the keyword validator over submitted text.
//
// The body is read as raw bytes and parsed as JSON whatever the
// Content-Type says. A missing or null `content` is validated as the empty
// string. Bodies that are not a JSON object, or whose `content` is not a
// string, get a 400 with an error message.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::web::{api_error, AppState};

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ValidationRequest {
    #[serde(default)]
    pub content: Option<String>,
}

impl ValidationRequest {
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// Parse a request body into a `ValidationRequest`.
///
/// Returns the client-facing error message on failure.
pub fn parse_request(body: &[u8]) -> Result<ValidationRequest, String> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON body: {e}"))?;
    if !value.is_object() {
        return Err("Request body must be a JSON object".to_string());
    }
    serde_json::from_value(value).map_err(|_| "Field `content` must be a string".to_string())
}

pub async fn validate_content(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(message) => {
            warn!(error = %message, "Rejected validate request");
            return api_error(StatusCode::BAD_REQUEST, &message);
        }
    };

    let result = state.scanner.validate(request.content());
    debug!(
        risk_score = result.risk_score,
        violations = result.violations.len(),
        "Content validated"
    );

    (StatusCode::OK, Json(result)).into_response()
}
