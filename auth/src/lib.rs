//! Authentication core library
//!
//! Building blocks for credential-based authentication:
//! - Password hashing and verification (Argon2id)
//! - Signed session tokens carrying a `{sub, iat, exp}` claim set (HS256)
//!
//! The surrounding service owns orchestration (user lookup, auditing,
//! transport); this crate holds no global state. Signing configuration is
//! an explicit [`TokenConfig`] value constructed once at process start and
//! injected into the [`TokenService`].
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("hunter2").unwrap();
//! assert!(hasher.verify("hunter2", &hash).unwrap());
//! assert!(!hasher.verify("hunter3", &hash).unwrap());
//! ```
//!
//! ## Session tokens
//! ```
//! use auth::TokenConfig;
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(TokenConfig::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::minutes(30),
//! ));
//! let token = tokens.issue_session("user@example.com").unwrap();
//! let claims = tokens.decode(&token).unwrap();
//! assert_eq!(claims.sub, "user@example.com");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenConfig;
pub use token::TokenError;
pub use token::TokenService;
