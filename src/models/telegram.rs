//! Telegram Mini App identity claim
//!
//! Mini apps pass the WebApp `initData` blob with every request: a
//! url-encoded key-value string whose `user` entry holds a JSON-encoded
//! Telegram user record. This module decodes that blob into a typed
//! record instead of poking at it dynamically.

use serde::{Deserialize, Serialize};

use crate::utils::errors::{ReportBuddyError, Result};

/// Telegram user record embedded in the `user` entry of initData
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

/// Decode the `user` entry of a raw initData blob.
///
/// Returns `InvalidInitData` when the blob carries no `user` entry.
/// A `user` entry that is not valid JSON surfaces as a serialization
/// error and is treated as an unexpected failure by the handler.
///
/// The cryptographic signature (`hash` entry) is not verified here;
/// the embedded identity is trusted as-is.
pub fn parse_init_data(init_data: &str) -> Result<TelegramUser> {
    let user_entry = url::form_urlencoded::parse(init_data.as_bytes())
        .find(|(key, _)| key == "user")
        .map(|(_, value)| value.into_owned())
        .ok_or(ReportBuddyError::InvalidInitData)?;

    let user: TelegramUser = serde_json::from_str(&user_entry)?;
    Ok(user)
}
