//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::domain::StationId;
use crate::engine::{EngineError, ReachabilityQuery, calculate_reachability};

use super::dto::{ErrorResponse, ReachabilityRequest, ReachabilityResponse};
use super::state::AppState;

/// Caller-imposed policy range for `maxTransfers`. The engine itself
/// accepts any value; requests outside this range are rejected with 400.
const MAX_TRANSFERS_LIMIT: u32 = 3;

/// Default transfer budget when the query omits `maxTransfers`.
const DEFAULT_MAX_TRANSFERS: u32 = 1;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/reachability", get(reachability))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Compute reachable stations from an origin within a transfer budget.
async fn reachability(
    State(state): State<AppState>,
    Query(req): Query<ReachabilityRequest>,
) -> Result<Json<ReachabilityResponse>, AppError> {
    let origin = StationId::parse(&req.station_id).map_err(|e| AppError::BadRequest {
        message: format!("invalid stationId {:?}: {e}", req.station_id),
    })?;

    let max_transfers = req.max_transfers.unwrap_or(DEFAULT_MAX_TRANSFERS);
    if max_transfers > MAX_TRANSFERS_LIMIT {
        return Err(AppError::BadRequest {
            message: format!("maxTransfers must be between 0 and {MAX_TRANSFERS_LIMIT}"),
        });
    }

    let query = ReachabilityQuery::new(origin, max_transfers);
    let result = calculate_reachability(state.graph.as_ref(), &state.config, &query)
        .await
        .map_err(AppError::from)?;

    Ok(Json(ReachabilityResponse::from_result(&result)))
}

/// Web-layer error with an HTTP status mapping.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<EngineError> for AppError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::OriginNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            EngineError::Graph(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
