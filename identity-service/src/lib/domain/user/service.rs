use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenService;
use chrono::Utc;

use crate::domain::user::events::AuditEvent;
use crate::domain::user::events::LoginFailure;
use crate::domain::user::events::RegistrationRejection;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::SessionToken;
use crate::domain::user::models::User;
use crate::user::errors::AuthError;
use crate::user::ports::AuditLog;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserStore;

// Hashed once at construction; verified against whenever a login email is
// unknown, so that path costs the same as a real verification.
const BASELINE_PASSWORD: &str = "baseline-timing-password";

/// Domain service implementation for registration and authentication.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<S, A>
where
    S: UserStore,
    A: AuditLog,
{
    store: Arc<S>,
    audit_log: Arc<A>,
    password_hasher: PasswordHasher,
    token_service: TokenService,
    baseline_hash: String,
}

impl<S, A> AuthService<S, A>
where
    S: UserStore,
    A: AuditLog,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - User persistence implementation
    /// * `audit_log` - Audit trail sink implementation
    /// * `token_service` - Configured session token issuer
    ///
    /// # Returns
    /// Configured auth service instance
    ///
    /// # Errors
    /// * `Credential` - Hashing the baseline password failed
    pub fn new(
        store: Arc<S>,
        audit_log: Arc<A>,
        token_service: TokenService,
    ) -> Result<Self, AuthError> {
        let password_hasher = PasswordHasher::new();
        let baseline_hash = password_hasher.hash(BASELINE_PASSWORD)?;

        Ok(Self {
            store,
            audit_log,
            password_hasher,
            token_service,
            baseline_hash,
        })
    }

    async fn audit(&self, event: AuditEvent) {
        if let Err(e) = self.audit_log.record(&event).await {
            tracing::error!(
                event_type = event.event_type(),
                event_id = %event.event_id,
                error = %e,
                "Failed to record audit event"
            );
        }
    }

    fn rejection_reason(err: &AuthError) -> Option<RegistrationRejection> {
        match err {
            AuthError::DuplicateEmail(_) => Some(RegistrationRejection::DuplicateEmail),
            AuthError::DuplicateUsername(_) => Some(RegistrationRejection::DuplicateUsername),
            _ => None,
        }
    }
}

#[async_trait]
impl<S, A> AuthServicePort for AuthService<S, A>
where
    S: UserStore,
    A: AuditLog,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, AuthError> {
        let RegisterUserCommand {
            email,
            username,
            password,
        } = command;

        self.audit(AuditEvent::registration_attempted(&email, &username))
            .await;

        if self.store.find_by_email(&email).await?.is_some() {
            tracing::warn!(email = %email, "Registration rejected: email already registered");
            self.audit(AuditEvent::registration_rejected(
                &email,
                &username,
                RegistrationRejection::DuplicateEmail,
            ))
            .await;
            return Err(AuthError::DuplicateEmail(email.as_str().to_string()));
        }

        if self.store.find_by_username(&username).await?.is_some() {
            tracing::warn!(username = %username, "Registration rejected: username already taken");
            self.audit(AuditEvent::registration_rejected(
                &email,
                &username,
                RegistrationRejection::DuplicateUsername,
            ))
            .await;
            return Err(AuthError::DuplicateUsername(username.as_str().to_string()));
        }

        // Hash password using auth library
        let password_hash = self.password_hasher.hash(&password)?;

        let new_user = NewUser {
            email: email.clone(),
            username: username.clone(),
            password_hash,
            is_active: true,
            created_at: Utc::now(),
        };

        let user = match self.store.create(new_user).await {
            Ok(user) => user,
            Err(err) => {
                // The store's unique constraints close the window between
                // the pre-checks above and the insert.
                if let Some(reason) = Self::rejection_reason(&err) {
                    tracing::warn!(
                        email = %email,
                        username = %username,
                        reason = reason.as_str(),
                        "Registration rejected on insert"
                    );
                    self.audit(AuditEvent::registration_rejected(&email, &username, reason))
                        .await;
                }
                return Err(err);
            }
        };

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        self.audit(AuditEvent::registration_succeeded(&user)).await;

        Ok(user)
    }

    async fn login(&self, credentials: Credentials) -> Result<SessionToken, AuthError> {
        let Credentials { email, password } = credentials;

        self.audit(AuditEvent::login_attempted(&email)).await;

        let user = match self.store.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                // Unknown email still pays the full verification cost; the
                // two failure paths must stay indistinguishable, timing
                // included.
                let _ = self.password_hasher.verify(&password, &self.baseline_hash);
                tracing::warn!(email = %email, "Login failed: no user with this email");
                self.audit(AuditEvent::login_failed(&email, LoginFailure::UnknownEmail))
                    .await;
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !self.password_hasher.verify(&password, &user.password_hash)? {
            tracing::warn!(email = %email, "Login failed: password mismatch");
            self.audit(AuditEvent::login_failed(&email, LoginFailure::WrongPassword))
                .await;
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_service.issue_session(email.as_str())?;

        tracing::info!(email = %email, "Login succeeded");
        self.audit(AuditEvent::login_succeeded(&email)).await;

        Ok(SessionToken::new(token))
    }

    async fn resolve_current_user(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.token_service.decode(token).map_err(|err| {
            tracing::warn!(reason = err.reason().unwrap_or("unknown"), "Token rejected");
            AuthError::Unauthorized
        })?;

        let email = EmailAddress::new(claims.sub).map_err(|_| {
            tracing::warn!("Token rejected: subject is not a valid email");
            AuthError::Unauthorized
        })?;

        self.store.find_by_email(&email).await?.ok_or_else(|| {
            tracing::warn!(email = %email, "Token subject no longer resolves to a user");
            AuthError::Unauthorized
        })
    }
}
