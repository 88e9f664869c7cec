//! Error handling for ReportBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the ReportBuddy application
#[derive(Error, Debug)]
pub enum ReportBuddyError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] TelegramError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("Invalid initData")]
    InvalidInitData,

    #[error("Reporter not found")]
    ReporterNotFound,

    #[error("Reported user not found")]
    ReportedUserNotFound,

    #[error("Cannot report yourself")]
    SelfReport,

    #[error("Failed to create report")]
    ReportCreationFailed,
}

/// Telegram Bot API specific errors
#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("Telegram API request failed: {0}")]
    RequestFailed(String),

    #[error("Telegram API timeout")]
    Timeout,

    #[error("Invalid Telegram API response: {0}")]
    InvalidResponse(String),

    #[error("Telegram API unavailable")]
    ServiceUnavailable,
}

/// Result type alias for ReportBuddy operations
pub type Result<T> = std::result::Result<T, ReportBuddyError>;

impl ReportBuddyError {
    /// Check whether the error came from client input rather than the service itself
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ReportBuddyError::MissingRequiredFields
                | ReportBuddyError::InvalidInitData
                | ReportBuddyError::ReporterNotFound
                | ReportBuddyError::ReportedUserNotFound
                | ReportBuddyError::SelfReport
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(ReportBuddyError::MissingRequiredFields.is_client_error());
        assert!(ReportBuddyError::SelfReport.is_client_error());
        assert!(!ReportBuddyError::ReportCreationFailed.is_client_error());
        assert!(!ReportBuddyError::Telegram(TelegramError::Timeout).is_client_error());
    }
}
