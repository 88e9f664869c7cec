//! Services module
//!
//! This module contains business logic services

pub mod report;
pub mod telegram;

// Re-export commonly used services
pub use report::{ReportService, SubmitReportRequest};
pub use telegram::{
    build_report_keyboard, InlineKeyboardButton, ReplyMarkup, SendMessageRequest, SentMessage,
    TelegramResponse, TelegramService,
};

use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub report_service: ReportService,
    pub telegram_service: TelegramService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings, database: DatabaseService) -> Result<Self> {
        let telegram_service = TelegramService::new(settings)?;
        let report_service = ReportService::new(database, telegram_service.clone());

        Ok(Self {
            report_service,
            telegram_service,
        })
    }
}
