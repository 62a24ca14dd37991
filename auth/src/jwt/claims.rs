use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Session token payload.
///
/// Carries the authenticated user identifier and the validity window.
/// Timestamps are Unix seconds, matching the registered `iat`/`exp` claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Identifier of the user the session was issued to
    pub user_id: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user session.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `issued_at` - Instant the session starts
    /// * `validity` - How long the session stays valid
    ///
    /// # Returns
    /// Claims with `exp = iat + validity`
    pub fn for_user(user_id: i64, issued_at: DateTime<Utc>, validity: Duration) -> Self {
        let expiration = issued_at + validity;

        Self {
            user_id,
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the session is over.
    ///
    /// A session is expired at or past its `exp` second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
