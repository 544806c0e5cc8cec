use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Why a registration attempt was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationRejection {
    DuplicateEmail,
    DuplicateUsername,
}

impl RegistrationRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationRejection::DuplicateEmail => "duplicate_email",
            RegistrationRejection::DuplicateUsername => "duplicate_username",
        }
    }
}

/// Why a login attempt failed.
///
/// Recorded for operators only; callers always see the same
/// invalid-credentials outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    UnknownEmail,
    WrongPassword,
}

impl LoginFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginFailure::UnknownEmail => "unknown_email",
            LoginFailure::WrongPassword => "wrong_password",
        }
    }
}

/// A single audit trail entry for authentication activity.
///
/// Carries a snapshot of what happened, stamped with a unique event id and
/// the time it occurred. Plaintext passwords never appear in an event.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub event_id: String,
    pub occurred_at: DateTime<Utc>,
    pub kind: AuditKind,
}

/// The kinds of authentication activity the audit trail records.
#[derive(Debug, Clone)]
pub enum AuditKind {
    RegistrationAttempted {
        email: String,
        username: String,
    },
    RegistrationSucceeded {
        user_id: i64,
        email: String,
        username: String,
    },
    RegistrationRejected {
        email: String,
        username: String,
        reason: RegistrationRejection,
    },
    LoginAttempted {
        email: String,
    },
    LoginSucceeded {
        email: String,
    },
    LoginFailed {
        email: String,
        reason: LoginFailure,
    },
}

impl AuditEvent {
    fn record(kind: AuditKind) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            occurred_at: Utc::now(),
            kind,
        }
    }

    /// Create an event for a registration attempt.
    ///
    /// # Arguments
    /// * `email` - Email the caller tried to register
    /// * `username` - Username the caller tried to register
    ///
    /// # Returns
    /// AuditEvent with unique event ID and attempt snapshot
    pub fn registration_attempted(email: &EmailAddress, username: &Username) -> Self {
        Self::record(AuditKind::RegistrationAttempted {
            email: email.as_str().to_string(),
            username: username.as_str().to_string(),
        })
    }

    /// Create an event for a completed registration.
    ///
    /// # Arguments
    /// * `user` - User entity that was created
    ///
    /// # Returns
    /// AuditEvent with unique event ID and user snapshot
    pub fn registration_succeeded(user: &User) -> Self {
        Self::record(AuditKind::RegistrationSucceeded {
            user_id: user.id.as_i64(),
            email: user.email.as_str().to_string(),
            username: user.username.as_str().to_string(),
        })
    }

    /// Create an event for a registration rejected as a duplicate.
    ///
    /// # Arguments
    /// * `email` - Email the caller tried to register
    /// * `username` - Username the caller tried to register
    /// * `reason` - Which uniqueness rule rejected the attempt
    ///
    /// # Returns
    /// AuditEvent with unique event ID and rejection snapshot
    pub fn registration_rejected(
        email: &EmailAddress,
        username: &Username,
        reason: RegistrationRejection,
    ) -> Self {
        Self::record(AuditKind::RegistrationRejected {
            email: email.as_str().to_string(),
            username: username.as_str().to_string(),
            reason,
        })
    }

    /// Create an event for a login attempt.
    pub fn login_attempted(email: &EmailAddress) -> Self {
        Self::record(AuditKind::LoginAttempted {
            email: email.as_str().to_string(),
        })
    }

    /// Create an event for a successful login.
    pub fn login_succeeded(email: &EmailAddress) -> Self {
        Self::record(AuditKind::LoginSucceeded {
            email: email.as_str().to_string(),
        })
    }

    /// Create an event for a failed login.
    pub fn login_failed(email: &EmailAddress, reason: LoginFailure) -> Self {
        Self::record(AuditKind::LoginFailed {
            email: email.as_str().to_string(),
            reason,
        })
    }

    /// Get the event type name.
    ///
    /// # Returns
    /// Event type string (e.g. "registration_succeeded" or "login_failed")
    pub fn event_type(&self) -> &'static str {
        match &self.kind {
            AuditKind::RegistrationAttempted { .. } => "registration_attempted",
            AuditKind::RegistrationSucceeded { .. } => "registration_succeeded",
            AuditKind::RegistrationRejected { .. } => "registration_rejected",
            AuditKind::LoginAttempted { .. } => "login_attempted",
            AuditKind::LoginSucceeded { .. } => "login_succeeded",
            AuditKind::LoginFailed { .. } => "login_failed",
        }
    }
}
