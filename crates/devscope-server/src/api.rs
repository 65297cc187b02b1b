//! HTTP surface: one profile-building endpoint plus health.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use devscope_core::{extract_handle, Platform};
use devscope_profile::{AggregatedProfile, ProfileAggregator, ProfileQuery};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<ProfileAggregator>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "profile_not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Search input as typed by the user: any field may be a bare handle or a
/// full profile URL.
#[derive(Debug, Deserialize)]
struct ProfileRequest {
    github: String,
    #[serde(default)]
    linkedin: Option<String>,
    #[serde(default)]
    leetcode: Option<String>,
}

pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/profile", post(create_profile))
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<AggregatedProfile>, ApiError> {
    let github = extract_handle(&request.github, Platform::GitHub);
    if github.is_empty() {
        return Err(ApiError::new(
            "bad_request",
            "a GitHub username or profile URL is required",
        ));
    }

    let normalize_optional = |input: &Option<String>, platform: Platform| -> Option<String> {
        input
            .as_deref()
            .map(|raw| extract_handle(raw, platform))
            .filter(|h| !h.is_empty())
    };
    let query = ProfileQuery {
        github,
        linkedin: normalize_optional(&request.linkedin, Platform::LinkedIn),
        leetcode: normalize_optional(&request.leetcode, Platform::LeetCode),
    };

    match state.aggregator.build_profile(&query).await {
        Ok(profile) => Ok(Json(profile)),
        Err(e) if e.is_not_found() => Err(ApiError::new(
            "profile_not_found",
            format!("{e}; check the handle and retry"),
        )),
        Err(e) => {
            tracing::error!(error = %e, "required source failed");
            Err(ApiError::new(
                "upstream_error",
                "the code-hosting service could not be reached",
            ))
        }
    }
}
