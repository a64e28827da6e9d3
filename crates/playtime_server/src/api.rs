//! HTTP API.
//!
//! `GET|POST /api/howlongtobeat` runs a lookup; `GET /health` is a liveness
//! probe. Every response carries CORS headers.

use crate::{LookupService, ServerConfig};
use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use playtime_error::{ConfigError, PlaytimeError, PlaytimeErrorKind, PlaytimeResult};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, instrument};

/// Lookup route path.
pub const LOOKUP_PATH: &str = "/api/howlongtobeat";

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct ApiState {
    service: Arc<LookupService>,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(service: LookupService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// `gameTitle` from the query string or a JSON body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupParams {
    /// Title as sent; validated by the lookup
    #[serde(default)]
    pub game_title: Option<String>,
}

/// A pipeline error rendered as a plain-text HTTP response.
#[derive(Debug)]
pub struct ApiError(PlaytimeError);

impl From<PlaytimeError> for ApiError {
    fn from(err: PlaytimeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0.kind() {
            PlaytimeErrorKind::Input(_) => {
                (StatusCode::BAD_REQUEST, "Missing gameTitle parameter.")
            }
            PlaytimeErrorKind::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error: API key missing.",
            ),
            PlaytimeErrorKind::Transport(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching time from API.",
            ),
        };
        debug!(status = status.as_u16(), error = %self.0, "Lookup failed");
        (status, message).into_response()
    }
}

/// Build the CORS layer for `allowed_origin` (`*` for any).
///
/// # Errors
///
/// Returns a configuration error if the origin is not a valid header value.
pub fn cors_layer(allowed_origin: &str) -> PlaytimeResult<CorsLayer> {
    let origin = if allowed_origin.trim() == "*" {
        AllowOrigin::any()
    } else {
        let value = HeaderValue::from_str(allowed_origin.trim()).map_err(|e| {
            ConfigError::new(format!("Invalid allowed_origin {:?}: {}", allowed_origin, e))
        })?;
        AllowOrigin::exact(value)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Creates the API router.
///
/// # Errors
///
/// Returns a configuration error if the CORS origin is invalid.
pub fn create_router(state: ApiState, server: &ServerConfig) -> PlaytimeResult<Router> {
    let cors = cors_layer(&server.allowed_origin)?;
    Ok(Router::new()
        .route(
            LOOKUP_PATH,
            get(lookup_query).post(lookup_body).options(preflight),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(state))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

#[instrument(skip_all)]
async fn lookup_query(
    State(state): State<ApiState>,
    Query(params): Query<LookupParams>,
) -> Result<Response, ApiError> {
    run_lookup(&state, params).await
}

/// A malformed body is treated as a missing title.
#[instrument(skip_all)]
async fn lookup_body(
    State(state): State<ApiState>,
    body: Result<Json<LookupParams>, JsonRejection>,
) -> Result<Response, ApiError> {
    let params = match body {
        Ok(Json(params)) => params,
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable lookup body");
            LookupParams::default()
        }
    };
    run_lookup(&state, params).await
}

async fn run_lookup(state: &ApiState, params: LookupParams) -> Result<Response, ApiError> {
    let title = params.game_title.unwrap_or_default();
    let result = state.service.lookup(&title).await?;
    Ok((StatusCode::OK, Json(result)).into_response())
}
