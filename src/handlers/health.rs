//! Health check handler

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::database;
use crate::handlers::{cors_headers, AppState};

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
}

/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> Response {
    match database::health_check(&state.db_pool).await {
        Ok(()) => (
            StatusCode::OK,
            cors_headers(),
            Json(HealthBody { status: "ok" }),
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                cors_headers(),
                Json(HealthBody {
                    status: "unavailable",
                }),
            )
                .into_response()
        }
    }
}
