//! Profile model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A mini-app user profile linked to a Telegram account.
///
/// Profiles are created and maintained by the identity sync process;
/// the report workflow only reads them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

impl Profile {
    /// Human-readable label for moderator-facing messages.
    ///
    /// Falls back from username to first name to a raw Telegram id tag.
    pub fn display_label(&self) -> String {
        display_label(
            self.username.as_deref(),
            self.first_name.as_deref(),
            self.telegram_id,
        )
    }
}

/// Resolve a display label from its parts, first match wins:
/// `@username`, then first name, then `ID:<telegram_id>`.
pub fn display_label(
    username: Option<&str>,
    first_name: Option<&str>,
    telegram_id: i64,
) -> String {
    if let Some(username) = username.filter(|u| !u.is_empty()) {
        format!("@{}", username)
    } else if let Some(first_name) = first_name.filter(|n| !n.is_empty()) {
        first_name.to_string()
    } else {
        format!("ID:{}", telegram_id)
    }
}
