use async_trait::async_trait;

use crate::domain::user::events::AuditEvent;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::SessionToken;
use crate::domain::user::models::User;
use crate::user::errors::AuditError;
use crate::user::errors::AuthError;
use crate::user::models::Username;

/// Port for authentication domain service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user with validated fields.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email, username, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `DuplicateUsername` - Username is already taken
    /// * `Storage` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError>;

    /// Authenticate a user and issue a session token.
    ///
    /// # Arguments
    /// * `credentials` - Email and plain text password
    ///
    /// # Returns
    /// Signed session token bound to the user
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (never
    ///   distinguished)
    /// * `Storage` - Store operation failed
    async fn login(&self, credentials: Credentials) -> Result<SessionToken, AuthError>;

    /// Resolve a session token to the user it was issued for.
    ///
    /// # Arguments
    /// * `token` - Raw bearer token string
    ///
    /// # Returns
    /// User entity the token belongs to
    ///
    /// # Errors
    /// * `Unauthorized` - Token is expired, tampered with, malformed, or its
    ///   subject no longer exists (never distinguished)
    /// * `Storage` - Store operation failed
    async fn resolve_current_user(&self, token: &str) -> Result<User, AuthError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist a new user to storage.
    ///
    /// # Arguments
    /// * `user` - User record to insert
    ///
    /// # Returns
    /// Created user entity with its assigned id
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `DuplicateUsername` - Username is already taken
    /// * `Storage` - Store operation failed
    async fn create(&self, user: NewUser) -> Result<User, AuthError>;

    /// Retrieve user by email address.
    ///
    /// # Arguments
    /// * `email` - Email address to search for
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Storage` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError>;

    /// Retrieve user by username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Storage` - Store operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError>;
}

/// Recording of authentication activity to an external audit sink.
///
/// Failures here never abort the operation being audited; the service logs
/// them and carries on.
#[async_trait]
pub trait AuditLog: Send + Sync + 'static {
    /// Record a single audit event.
    ///
    /// # Arguments
    /// * `event` - Audit event to record
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `Sink` - The sink rejected or failed to persist the event
    async fn record(&self, event: &AuditEvent) -> Result<(), AuditError>;
}
