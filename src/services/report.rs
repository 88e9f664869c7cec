//! Report submission workflow
//!
//! This service implements the full report pipeline: validate the raw
//! request, decode the reporter's identity from initData, resolve both
//! profiles, persist the report and notify the moderation chat.

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::database::DatabaseService;
use crate::models::profile::{display_label, Profile};
use crate::models::report::{CreateReportRequest, Report};
use crate::models::telegram::{parse_init_data, TelegramUser};
use crate::services::telegram::{build_report_keyboard, TelegramService};
use crate::utils::errors::{ReportBuddyError, Result};

/// Raw report submission, fields exactly as received from the mini app
#[derive(Debug, Clone)]
pub struct SubmitReportRequest {
    pub init_data: String,
    pub reported_user_id: String,
    pub reason: String,
}

/// Report service driving the submission workflow
#[derive(Debug, Clone)]
pub struct ReportService {
    database: DatabaseService,
    telegram: TelegramService,
}

impl ReportService {
    /// Create a new ReportService instance
    pub fn new(database: DatabaseService, telegram: TelegramService) -> Self {
        Self { database, telegram }
    }

    /// Submit a user report.
    ///
    /// The report row is the authoritative outcome: once it is inserted,
    /// notification problems are logged and swallowed and the submission
    /// still succeeds.
    pub async fn submit(&self, request: SubmitReportRequest) -> Result<Report> {
        if request.init_data.is_empty()
            || request.reported_user_id.is_empty()
            || request.reason.is_empty()
        {
            return Err(ReportBuddyError::MissingRequiredFields);
        }

        let claim = parse_init_data(&request.init_data)?;

        let reporter = self.resolve_reporter(&claim).await?;
        let reported = self.resolve_reported(&request.reported_user_id).await?;

        if reporter.id == reported.id {
            return Err(ReportBuddyError::SelfReport);
        }

        let reason = request.reason.trim().to_string();

        let report = self
            .database
            .reports
            .create(CreateReportRequest {
                reported_user_id: reported.id,
                reporter_profile_id: reporter.id,
                reason: reason.clone(),
            })
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to insert user report");
                ReportBuddyError::ReportCreationFailed
            })?;

        self.notify_moderators(&report, &reporter, &reported, &claim, &reason)
            .await;

        info!(report_id = %report.id, reporter_id = %reporter.id, "User report created");
        Ok(report)
    }

    /// Look up the reporter's profile by the Telegram id embedded in the claim
    async fn resolve_reporter(&self, claim: &TelegramUser) -> Result<Profile> {
        match self.database.profiles.find_by_telegram_id(claim.id).await {
            Ok(Some(profile)) => Ok(profile),
            Ok(None) => Err(ReportBuddyError::ReporterNotFound),
            Err(e) => {
                warn!(telegram_id = claim.id, error = %e, "Reporter profile lookup failed");
                Err(ReportBuddyError::ReporterNotFound)
            }
        }
    }

    /// Look up the reported profile by its internal id.
    ///
    /// An unparsable id behaves like an unknown one.
    async fn resolve_reported(&self, reported_user_id: &str) -> Result<Profile> {
        let id = match Uuid::parse_str(reported_user_id) {
            Ok(id) => id,
            Err(_) => return Err(ReportBuddyError::ReportedUserNotFound),
        };

        match self.database.profiles.find_by_id(id).await {
            Ok(Some(profile)) => Ok(profile),
            Ok(None) => Err(ReportBuddyError::ReportedUserNotFound),
            Err(e) => {
                warn!(reported_user_id = %id, error = %e, "Reported profile lookup failed");
                Err(ReportBuddyError::ReportedUserNotFound)
            }
        }
    }

    /// Send the moderator notification and attach its message id to the
    /// report. Best-effort on both steps.
    async fn notify_moderators(
        &self,
        report: &Report,
        reporter: &Profile,
        reported: &Profile,
        claim: &TelegramUser,
        reason: &str,
    ) {
        let text = build_admin_message(reporter, reported, claim.id, reason, Utc::now());
        let keyboard = build_report_keyboard(report.id, reported.telegram_id);

        match self.telegram.send_admin_message(&text, Some(keyboard)).await {
            Ok(response) => match response.message_id() {
                Some(message_id) => {
                    if let Err(e) = self
                        .database
                        .reports
                        .set_admin_message_id(report.id, message_id)
                        .await
                    {
                        warn!(report_id = %report.id, error = %e, "Failed to save admin message id");
                    }
                }
                None => {
                    warn!(report_id = %report.id, "Telegram API returned no message id");
                }
            },
            Err(e) => {
                warn!(report_id = %report.id, error = %e, "Failed to send moderator notification");
            }
        }
    }
}

/// Format the moderator notification body.
///
/// The reporter's fallback label uses the Telegram id from the identity
/// claim, not the stored profile, matching what moderators expect to see
/// for accounts without username or first name.
pub fn build_admin_message(
    reporter: &Profile,
    reported: &Profile,
    reporter_telegram_id: i64,
    reason: &str,
    sent_at: DateTime<Utc>,
) -> String {
    let reporter_display = display_label(
        reporter.username.as_deref(),
        reporter.first_name.as_deref(),
        reporter_telegram_id,
    );
    let reported_display = reported.display_label();

    format!(
        "🚨 <b>Жалоба на пользователя</b>\n\n\
         👤 <b>Нарушитель:</b> {reported_display}\n\
         🆔 <b>Telegram ID:</b> {reported_telegram_id}\n\n\
         📋 <b>Причина:</b>\n\
         {reason}\n\n\
         👮 <b>Отправил:</b> {reporter_display}\n\
         📅 <b>Дата:</b> {date}",
        reported_display = reported_display,
        reported_telegram_id = reported.telegram_id,
        reason = reason,
        reporter_display = reporter_display,
        date = sent_at.format("%d.%m.%Y, %H:%M:%S"),
    )
}
