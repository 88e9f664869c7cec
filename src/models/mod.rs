//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod profile;
pub mod report;
pub mod telegram;

// Re-export commonly used models
pub use profile::{display_label, CreateProfileRequest, Profile};
pub use report::{CreateReportRequest, Report, ReportStatus};
pub use telegram::{parse_init_data, TelegramUser};
