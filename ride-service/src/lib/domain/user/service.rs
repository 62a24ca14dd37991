use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::user::models::AuthSession;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for registration, login and account operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
/// Argon2 work runs on the blocking pool so it never stalls request workers.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn hash_password(&self, password: Password) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
            .await
            .map_err(|e| UserError::Unknown(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| UserError::PasswordHashing(e.to_string()))
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<AuthSession, UserError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self.hash_password(command.password).await?;

        // The unique index still arbitrates concurrent registrations that
        // both passed the lookup above.
        let user = self
            .repository
            .create(NewUser {
                name: command.name,
                email: command.email,
                password_hash,
                phone: command.phone,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        // The account stays created if signing fails; the client can log in.
        let token = self.authenticator.issue_token(user.id.0).map_err(|e| {
            tracing::error!(
                user_id = %user.id,
                error = %e,
                "Token issuance failed after registration"
            );
            UserError::TokenIssuance(e.to_string())
        })?;

        Ok(AuthSession { user, token })
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthSession, UserError> {
        let Some(user) = self.repository.find_by_email(&command.email).await? else {
            let authenticator = Arc::clone(&self.authenticator);
            let password = command.password;

            tokio::task::spawn_blocking(move || authenticator.reject_unknown(&password))
                .await
                .map_err(|e| {
                    UserError::Unknown(format!("Password verification task failed: {}", e))
                })?;

            tracing::debug!("Login rejected: no active user for email");
            return Err(UserError::InvalidCredentials);
        };

        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = user.password_hash.clone();
        let user_id = user.id;
        let password = command.password;

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, user_id.0)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Password verification task failed: {}", e)))?;

        match result {
            Ok(authentication) => {
                tracing::info!(user_id = %user.id, "User logged in");
                Ok(AuthSession {
                    user,
                    token: authentication.access_token,
                })
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
                Err(UserError::InvalidCredentials)
            }
            Err(AuthenticationError::PasswordError(e)) => {
                Err(UserError::PasswordHashing(e.to_string()))
            }
            Err(AuthenticationError::JwtError(e)) => Err(UserError::TokenIssuance(e.to_string())),
        }
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.soft_delete(id).await?;

        tracing::info!(user_id = %id, "User removed");

        Ok(())
    }
}
