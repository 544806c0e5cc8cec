use thiserror::Error;

use auth::PasswordError;
use auth::TokenError;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for audit log sinks
#[derive(Debug, Clone, Error)]
pub enum AuditError {
    #[error("Failed to record audit event: {0}")]
    Sink(String),
}

/// Top-level error for all authentication and registration operations
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    // Domain-level errors
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    // Covers both unknown email and wrong password; callers must not be
    // able to tell the two apart.
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Covers every way a token can fail to resolve to a user.
    #[error("Invalid or expired token")]
    Unauthorized,

    // Infrastructure errors
    #[error("Credential error: {0}")]
    Credential(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Storage error: {0}")]
    Storage(String),
}
