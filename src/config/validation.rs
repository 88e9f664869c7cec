//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{ReportBuddyError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_telegram_config(&settings.telegram)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(ReportBuddyError::Config(
            "Server host is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(ReportBuddyError::Config(
            "Database URL is required".to_string(),
        ));
    }

    if config.max_connections == 0 {
        return Err(ReportBuddyError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(ReportBuddyError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate Telegram configuration
fn validate_telegram_config(config: &super::TelegramConfig) -> Result<()> {
    if config.bot_token.is_empty() {
        return Err(ReportBuddyError::Config(
            "Telegram bot token is required".to_string(),
        ));
    }

    if config.admin_chat_id.is_empty() {
        return Err(ReportBuddyError::Config(
            "Admin chat ID is required".to_string(),
        ));
    }

    if config.api_url.is_empty() {
        return Err(ReportBuddyError::Config(
            "Telegram API URL is required".to_string(),
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(ReportBuddyError::Config(
            "Telegram timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ReportBuddyError::Config(
            "Log level is required".to_string(),
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(ReportBuddyError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
