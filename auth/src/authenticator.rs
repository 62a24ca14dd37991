use std::sync::Arc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenService;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// The token service is shared so request guards can validate tokens
/// without holding the password hasher.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: Arc<TokenService>,
    decoy_hash: Option<String>,
}

/// Hashed once at construction; verified against when no account matches.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed session token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `password_hasher` - Hasher used for registration and login
    /// * `token_service` - Session token issuer and validator
    pub fn new(password_hasher: PasswordHasher, token_service: Arc<TokenService>) -> Self {
        let decoy_hash = password_hasher.hash(DECOY_PASSWORD).ok();

        Self {
            password_hasher,
            token_service,
            decoy_hash,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a session token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id` - Identifier placed in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    /// * `JwtError` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: i64,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_service.issue(user_id)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Reject a login for an account that does not exist.
    ///
    /// Runs one verification against a decoy hash with the configured cost,
    /// so the caller spends as long as on a wrong password.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        if let Some(decoy_hash) = &self.decoy_hash {
            let _ = self.password_hasher.verify(password, decoy_hash);
        }

        AuthenticationError::InvalidCredentials
    }

    /// Issue a session token without password verification.
    ///
    /// Used right after registration, when the credentials were just set.
    pub fn issue_token(&self, user_id: i64) -> Result<String, JwtError> {
        self.token_service.issue(user_id)
    }

    /// Validate a session token and return its claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_service.validate(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> Authenticator {
        let token_service = TokenService::new(b"test_secret_key_at_least_32_bytes!").unwrap();
        Authenticator::new(
            PasswordHasher::with_cost(8, 1, 1).unwrap(),
            Arc::new(token_service),
        )
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, 123)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let decoded = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.user_id, 123);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, 123);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupt_hash() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("my_password", "not-a-phc-string", 123);
        assert!(matches!(
            result,
            Err(AuthenticationError::PasswordError(_))
        ));
    }

    #[test]
    fn test_reject_unknown_verifies_decoy_at_same_cost() {
        let authenticator = authenticator();

        let decoy_hash = authenticator.decoy_hash.as_deref().unwrap();
        assert!(decoy_hash.starts_with("$argon2id$v=19$m=8,t=1,p=1$"));

        let stored_hash = authenticator.hash_password("my_password").unwrap();
        assert_eq!(
            decoy_hash.split('$').nth(3),
            stored_hash.split('$').nth(3)
        );

        assert!(matches!(
            authenticator.reject_unknown("my_password"),
            AuthenticationError::InvalidCredentials
        ));
        assert!(matches!(
            authenticator.reject_unknown(DECOY_PASSWORD),
            AuthenticationError::InvalidCredentials
        ));
    }

    #[test]
    fn test_issue_and_validate_token() {
        let authenticator = authenticator();

        let token = authenticator
            .issue_token(55)
            .expect("Failed to issue token");

        let decoded = authenticator
            .validate_token(&token)
            .expect("Failed to validate token");

        assert_eq!(decoded.user_id, 55);
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = authenticator();

        let result = authenticator.validate_token("invalid.token.here");
        assert!(result.is_err());
    }
}
