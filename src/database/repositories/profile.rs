//! Profile repository implementation
//!
//! The report workflow only reads profiles; `create` exists for the
//! identity sync process and for seeding test data.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::profile::{CreateProfileRequest, Profile};
use crate::utils::errors::ReportBuddyError;

#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new profile
    pub async fn create(&self, request: CreateProfileRequest) -> Result<Profile, ReportBuddyError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (telegram_id, username, first_name)
            VALUES ($1, $2, $3)
            RETURNING id, telegram_id, username, first_name, created_at, updated_at
            "#,
        )
        .bind(request.telegram_id)
        .bind(request.username)
        .bind(request.first_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Find profile by internal ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, ReportBuddyError> {
        let profile = sqlx::query_as::<_, Profile>(
            "SELECT id, telegram_id, username, first_name, created_at, updated_at FROM profiles WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Find profile by Telegram ID
    pub async fn find_by_telegram_id(
        &self,
        telegram_id: i64,
    ) -> Result<Option<Profile>, ReportBuddyError> {
        let profile = sqlx::query_as::<_, Profile>(
            "SELECT id, telegram_id, username, first_name, created_at, updated_at FROM profiles WHERE telegram_id = $1"
        )
        .bind(telegram_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }
}
