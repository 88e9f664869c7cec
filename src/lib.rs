//! ReportBuddy
//!
//! Report submission backend for Telegram Mini Apps. A mini-app user
//! reports another user; the service validates the request, stores a
//! report row and notifies the moderation chat through the Telegram Bot
//! API with inline action controls linked back to the stored report.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ReportBuddyError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use handlers::{router, AppState};
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
