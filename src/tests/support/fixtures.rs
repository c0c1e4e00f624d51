use chrono::{TimeZone, Utc};

use crate::modules::user::application::domain::entities::{User, UserId};

/// A live user created at a fixed instant, with `created_at == updated_at`.
pub fn sample_user(id: i64, username: &str, email: &str) -> User {
    let created_at = Utc
        .with_ymd_and_hms(2025, 3, 4, 10, 54, 28)
        .single()
        .expect("valid fixture timestamp");

    User {
        id: UserId::from(id),
        username: username.to_string(),
        email: email.to_string(),
        created_at,
        updated_at: created_at,
        deleted_at: None,
    }
}
