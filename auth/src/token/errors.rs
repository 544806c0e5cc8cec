use thiserror::Error;

/// Error type for token operations.
///
/// Every rejection cause surfaces as [`TokenError::Rejected`] with one
/// fixed display message, so a caller cannot tell which check failed.
/// The `reason` field is diagnostic detail for operator logs and must
/// never be serialized into a response.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    Encoding(String),

    #[error("Invalid token")]
    Rejected { reason: String },
}

impl TokenError {
    /// Diagnostic detail for rejected tokens.
    pub fn reason(&self) -> Option<&str> {
        match self {
            TokenError::Rejected { reason } => Some(reason),
            TokenError::Encoding(_) => None,
        }
    }
}
