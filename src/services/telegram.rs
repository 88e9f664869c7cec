//! Telegram admin-bot service implementation
//!
//! This service delivers moderator notifications through the Telegram
//! Bot API over plain HTTP, including client setup, payload construction
//! and response parsing. The API base URL is configurable so tests can
//! point the client at a mock server.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::settings::Settings;
use crate::utils::errors::{ReportBuddyError, Result, TelegramError};

/// `sendMessage` request payload
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

/// Inline keyboard attached to a message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplyMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

impl InlineKeyboardButton {
    pub fn callback(text: &str, callback_data: String) -> Self {
        Self {
            text: text.to_string(),
            callback_data,
        }
    }
}

/// Telegram Bot API response envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelegramResponse {
    pub ok: bool,
    pub result: Option<SentMessage>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SentMessage {
    pub message_id: i64,
}

impl TelegramResponse {
    /// Message id of the dispatched message, when the API reported success
    pub fn message_id(&self) -> Option<i64> {
        if self.ok {
            self.result.as_ref().map(|r| r.message_id)
        } else {
            None
        }
    }
}

/// Build the inline keyboard for a moderator notification.
///
/// Callback tokens are `<action>:<value>` pairs consumed by the
/// moderation bot: the report id for resolving, the reported user's
/// Telegram id for blocking and profile lookup.
pub fn build_report_keyboard(report_id: Uuid, reported_telegram_id: i64) -> ReplyMarkup {
    ReplyMarkup {
        inline_keyboard: vec![
            vec![
                InlineKeyboardButton::callback(
                    "✅ Рассмотрено",
                    format!("user_report_done:{}", report_id),
                ),
                InlineKeyboardButton::callback(
                    "🚫 Заблокировать",
                    format!("block:{}", reported_telegram_id),
                ),
            ],
            vec![InlineKeyboardButton::callback(
                "👤 Профиль",
                format!("user:{}", reported_telegram_id),
            )],
        ],
    }
}

/// Telegram service for moderator notifications
#[derive(Debug, Clone)]
pub struct TelegramService {
    client: Client,
    settings: Settings,
}

impl TelegramService {
    /// Create a new TelegramService instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.telegram.timeout_seconds))
            .user_agent("ReportBuddy/1.0")
            .build()
            .map_err(ReportBuddyError::Http)?;

        Ok(Self { client, settings })
    }

    /// Send an HTML message to the fixed moderation chat
    pub async fn send_admin_message(
        &self,
        text: &str,
        reply_markup: Option<ReplyMarkup>,
    ) -> Result<TelegramResponse> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.settings.telegram.api_url, self.settings.telegram.bot_token
        );

        let payload = SendMessageRequest {
            chat_id: self.settings.telegram.admin_chat_id.clone(),
            text: text.to_string(),
            parse_mode: "HTML",
            reply_markup,
        };

        debug!(
            chat_id = %payload.chat_id,
            "Sending moderator notification"
        );

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ReportBuddyError::Telegram(TelegramError::Timeout)
                } else if e.is_connect() {
                    ReportBuddyError::Telegram(TelegramError::ServiceUnavailable)
                } else {
                    ReportBuddyError::Telegram(TelegramError::RequestFailed(e.to_string()))
                }
            })?;

        // The Bot API reports failures inside the JSON envelope with a
        // non-2xx status; the envelope is parsed either way and the
        // caller decides what an ok=false response means.
        let parsed: TelegramResponse = response
            .json()
            .await
            .map_err(|e| ReportBuddyError::Telegram(TelegramError::InvalidResponse(e.to_string())))?;

        if !parsed.ok {
            warn!(
                description = parsed.description.as_deref().unwrap_or("unknown"),
                "Telegram API rejected the notification"
            );
        }

        Ok(parsed)
    }
}
