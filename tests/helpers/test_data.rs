//! Test data builders
//!
//! Helpers for building initData blobs and seeding profiles the way the
//! Telegram mini-app client and the identity sync process would.

use serde_json::json;
use uuid::Uuid;

use ReportBuddy::database::ProfileRepository;
use ReportBuddy::models::profile::{CreateProfileRequest, Profile};

/// Build a signed-looking initData blob whose `user` entry holds the
/// given JSON string
pub fn init_data_with_user_json(user_json: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("query_id", "AAH1234")
        .append_pair("user", user_json)
        .append_pair("auth_date", "1700000000")
        .append_pair("hash", "deadbeef")
        .finish()
}

/// Build an initData blob for a plain user record
pub fn init_data_for_user(
    telegram_id: i64,
    username: Option<&str>,
    first_name: Option<&str>,
) -> String {
    let mut user = json!({ "id": telegram_id });
    if let Some(username) = username {
        user["username"] = json!(username);
    }
    if let Some(first_name) = first_name {
        user["first_name"] = json!(first_name);
    }

    init_data_with_user_json(&user.to_string())
}

/// initData blob without a `user` entry
pub fn init_data_without_user() -> String {
    "query_id=AAH1234&auth_date=1700000000&hash=deadbeef".to_string()
}

/// Telegram id unlikely to collide across test runs sharing a database
pub fn unique_telegram_id() -> i64 {
    Uuid::new_v4().as_u128() as i64 & i64::MAX
}

/// Seed a profile row
pub async fn seed_profile(
    profiles: &ProfileRepository,
    telegram_id: i64,
    username: Option<&str>,
    first_name: Option<&str>,
) -> Profile {
    profiles
        .create(CreateProfileRequest {
            telegram_id,
            username: username.map(|s| s.to_string()),
            first_name: first_name.map(|s| s.to_string()),
        })
        .await
        .expect("seed profile")
}
