//! REST API routes for the web server
//!
//! Provides the focus detection endpoint and a health check.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::fetch::{self, FetchOptions};
use crate::saliency::{FocusResult, SalientPointDetector};

/// Application state shared across handlers
pub struct AppState {
    pub detector: SalientPointDetector,
    pub fetch: FetchOptions,
    pub version: String,
}

impl AppState {
    pub fn new(fetch: FetchOptions) -> Self {
        Self {
            detector: SalientPointDetector::new(),
            fetch,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FetchOptions::default())
    }
}

/// Build the API router
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/focus", get(focus))
        .route("/health", get(health_check))
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Query parameters accepted by the focus endpoint
#[derive(Debug, Deserialize)]
pub struct FocusQuery {
    pub url: Option<String>,
    pub path: Option<String>,
}

/// Detect the focus point of an image given by URL or local path.
///
/// `url` wins when both parameters are present.
async fn focus(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FocusQuery>,
) -> Result<Json<FocusResult>, AppError> {
    if query.url.is_none() && query.path.is_none() {
        return Err(AppError::BadRequest(
            "Provide either 'url' or 'path' parameter".to_string(),
        ));
    }

    // Image decoding and detection are CPU-bound, keep them off the
    // async runtime
    let result = tokio::task::spawn_blocking(move || load_and_detect(&state, &query))
        .await
        .map_err(|e| AppError::Internal(format!("Worker task failed: {}", e)))??;

    Ok(Json(result))
}

fn load_and_detect(state: &AppState, query: &FocusQuery) -> Result<FocusResult, AppError> {
    let image = if let Some(url) = &query.url {
        tracing::info!(url = url.as_str(), "Detecting focus for remote image");
        fetch::load_from_url(url, &state.fetch).map_err(|e| AppError::Internal(e.to_string()))?
    } else if let Some(path) = &query.path {
        tracing::info!(path = path.as_str(), "Detecting focus for local image");
        fetch::load_from_path(Path::new(path)).map_err(|e| AppError::Internal(e.to_string()))?
    } else {
        return Err(AppError::BadRequest(
            "Provide either 'url' or 'path' parameter".to_string(),
        ));
    };

    state
        .detector
        .detect(&image)
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// API error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
