//! HTTP handlers module
//!
//! This module contains the axum surface of the service: the router,
//! shared application state and the CORS headers attached to every
//! response so the Telegram mini app can call the API cross-origin.

pub mod health;
pub mod report;

// Re-export commonly used handler functions
pub use report::report_user;

use std::sync::Arc;

use axum::http::header::{self, HeaderName, HeaderValue};
use axum::routing::{get, post};
use axum::Router;

use crate::database::DatabasePool;
use crate::services::ServiceFactory;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ServiceFactory>,
    pub db_pool: DatabasePool,
}

/// Allow-list mirrored from the mini-app client
const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// CORS headers attached to every response, including errors
pub(crate) fn cors_headers() -> [(HeaderName, HeaderValue); 2] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ),
    ]
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/tg-report-user",
            post(report::report_user).options(report::preflight),
        )
        .route("/health", get(health::health_check))
        .with_state(state)
}
