//! User report repository implementation

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::report::{CreateReportRequest, Report, ReportStatus};
use crate::utils::errors::ReportBuddyError;

#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new pending report and return the stored row
    pub async fn create(&self, request: CreateReportRequest) -> Result<Report, ReportBuddyError> {
        let report = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO user_reports (reported_user_id, reporter_profile_id, reason, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, reported_user_id, reporter_profile_id, reason, status, admin_message_id, created_at, updated_at
            "#,
        )
        .bind(request.reported_user_id)
        .bind(request.reporter_profile_id)
        .bind(request.reason)
        .bind(ReportStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(report)
    }

    /// Find report by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>, ReportBuddyError> {
        let report = sqlx::query_as::<_, Report>(
            "SELECT id, reported_user_id, reporter_profile_id, reason, status, admin_message_id, created_at, updated_at FROM user_reports WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(report)
    }

    /// Attach the moderator notification message to an existing report
    pub async fn set_admin_message_id(
        &self,
        id: Uuid,
        admin_message_id: i64,
    ) -> Result<(), ReportBuddyError> {
        sqlx::query(
            "UPDATE user_reports SET admin_message_id = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(admin_message_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Count total reports
    pub async fn count(&self) -> Result<i64, ReportBuddyError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_reports")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
