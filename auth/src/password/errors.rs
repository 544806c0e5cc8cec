use thiserror::Error;

/// Error type for password operations.
///
/// A non-matching password is NOT an error; [`PasswordHasher::verify`]
/// reports it as `Ok(false)`.
///
/// [`PasswordHasher::verify`]: super::PasswordHasher::verify
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Stored password hash is malformed: {0}")]
    InvalidHash(String),
}
