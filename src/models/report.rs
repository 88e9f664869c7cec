//! User report model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted record of one user reporting another.
///
/// `admin_message_id` is the Telegram message id of the moderator
/// notification; it is filled in after the report itself exists and
/// stays empty when the notification could not be delivered.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub reported_user_id: Uuid,
    pub reporter_profile_id: Uuid,
    pub reason: String,
    pub status: String,
    pub admin_message_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReportRequest {
    pub reported_user_id: Uuid,
    pub reporter_profile_id: Uuid,
    pub reason: String,
}

/// Moderation lifecycle of a report. New reports always start out pending;
/// later transitions happen through moderator actions outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Pending,
    Reviewed,
    Dismissed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Reviewed => "reviewed",
            ReportStatus::Dismissed => "dismissed",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
