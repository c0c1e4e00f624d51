use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::repository::Record;

/// Surrogate key of a user row.
///
/// Always positive and bounded by the `BIGSERIAL` column range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserIdParseError {
    #[error("user id must be a decimal unsigned integer, got '{0}'")]
    NotANumber(String),

    #[error("user id {0} is out of range")]
    OutOfRange(u64),
}

impl FromStr for UserId {
    type Err = UserIdParseError;

    /// Parses a path segment. Only plain decimal digits are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UserIdParseError::NotANumber(s.to_string()));
        }

        let raw: u64 = s
            .parse()
            .map_err(|_| UserIdParseError::NotANumber(s.to_string()))?;

        match i64::try_from(raw) {
            Ok(value) if value > 0 => Ok(UserId(value)),
            _ => Err(UserIdParseError::OutOfRange(raw)),
        }
    }
}

/// A stored user. `deleted_at` is set once the user has been soft-deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Client-writable fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl Record for User {
    type Id = UserId;
    type Draft = NewUser;

    fn id(&self) -> UserId {
        self.id
    }
}
