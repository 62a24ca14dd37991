use async_trait::async_trait;

use crate::domain::user::models::AuthSession;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user and open a session for them.
    ///
    /// # Arguments
    /// * `command` - Validated command containing name, email, password, and phone
    ///
    /// # Returns
    /// Created user and a session token
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email belongs to an active user
    /// * `PasswordHashing` - Password hashing failed
    /// * `TokenIssuance` - User was created but the token could not be signed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<AuthSession, UserError>;

    /// Verify credentials and open a session.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `TokenIssuance` - Token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<AuthSession, UserError>;

    /// Retrieve an active user by identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist or was removed
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Remove a user account (soft delete).
    ///
    /// # Errors
    /// * `NotFound` - User does not exist or was already removed
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for user aggregate.
///
/// Lookups only ever see users that have not been soft-deleted.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Returns
    /// Created user entity with its assigned id and timestamps
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email belongs to an active user
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve active user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve active user by exact email match.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Mark an active user as deleted.
    ///
    /// # Errors
    /// * `NotFound` - No active user with this id
    /// * `DatabaseError` - Database operation failed
    async fn soft_delete(&self, id: &UserId) -> Result<(), UserError>;
}
