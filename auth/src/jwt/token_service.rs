use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Issues and validates stateless session tokens.
///
/// A token is valid while its signature verifies against the configured
/// secret and the current time is strictly before its `exp` claim.
pub struct TokenService {
    jwt_handler: JwtHandler,
    validity: Duration,
}

impl TokenService {
    pub const DEFAULT_VALIDITY_HOURS: i64 = 24;

    /// Create a token service with the default 24 hour validity window.
    ///
    /// # Arguments
    /// * `secret` - HMAC signing secret
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }

        Ok(Self {
            jwt_handler: JwtHandler::new(secret),
            validity: Duration::hours(Self::DEFAULT_VALIDITY_HOURS),
        })
    }

    /// Override the validity window.
    pub fn with_validity(mut self, validity: Duration) -> Self {
        self.validity = validity;
        self
    }

    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Issue a session token for a user, starting now.
    ///
    /// # Errors
    /// * `SigningFailed` - Token signing failed
    pub fn issue(&self, user_id: i64) -> Result<String, JwtError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a session token for a user, starting at `issued_at`.
    pub fn issue_at(&self, user_id: i64, issued_at: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, issued_at, self.validity);
        self.jwt_handler.encode(&claims)
    }

    /// Validate a session token against the current time.
    ///
    /// # Returns
    /// Claims embedded in the token
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed token, signature mismatch or unsupported algorithm
    /// * `TokenExpired` - Current time is at or past `exp`
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a session token against the given instant.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}
