//! Report submission handler
//!
//! Decodes the mini-app request, runs the report workflow and maps
//! workflow errors onto the HTTP contract. Any failure that is not part
//! of the contract collapses into a generic 500.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::handlers::{cors_headers, AppState};
use crate::services::SubmitReportRequest;
use crate::utils::errors::ReportBuddyError;

/// Inbound request body; fields are optional so that absence and
/// emptiness fail the same way
#[derive(Debug, Clone, Deserialize)]
pub struct ReportUserRequest {
    #[serde(default, rename = "initData")]
    pub init_data: Option<String>,
    #[serde(default, rename = "reportedUserId")]
    pub reported_user_id: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
struct SuccessBody {
    success: bool,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Map a workflow error onto the response contract
pub(crate) fn error_parts(err: &ReportBuddyError) -> (StatusCode, &'static str) {
    match err {
        ReportBuddyError::MissingRequiredFields => {
            (StatusCode::BAD_REQUEST, "Missing required fields")
        }
        ReportBuddyError::InvalidInitData => (StatusCode::BAD_REQUEST, "Invalid initData"),
        ReportBuddyError::ReporterNotFound => (StatusCode::NOT_FOUND, "Reporter not found"),
        ReportBuddyError::ReportedUserNotFound => {
            (StatusCode::NOT_FOUND, "Reported user not found")
        }
        ReportBuddyError::SelfReport => (StatusCode::BAD_REQUEST, "Cannot report yourself"),
        ReportBuddyError::ReportCreationFailed => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create report")
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
    }
}

fn error_response(status: StatusCode, message: &'static str) -> Response {
    (status, cors_headers(), Json(ErrorBody { error: message })).into_response()
}

/// CORS preflight for the report endpoint
pub async fn preflight() -> Response {
    (StatusCode::OK, cors_headers()).into_response()
}

/// `POST /tg-report-user`
pub async fn report_user(
    State(state): State<AppState>,
    payload: Result<Json<ReportUserRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            error!(error = %rejection, "Failed to decode report request body");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };

    let request = SubmitReportRequest {
        init_data: body.init_data.unwrap_or_default(),
        reported_user_id: body.reported_user_id.unwrap_or_default(),
        reason: body.reason.unwrap_or_default(),
    };

    match state.services.report_service.submit(request).await {
        Ok(_report) => (
            StatusCode::OK,
            cors_headers(),
            Json(SuccessBody { success: true }),
        )
            .into_response(),
        Err(e) => {
            let (status, message) = error_parts(&e);
            if status.is_server_error() {
                error!(error = %e, "Report submission failed");
            } else {
                warn!(error = %e, "Report submission rejected");
            }
            error_response(status, message)
        }
    }
}
