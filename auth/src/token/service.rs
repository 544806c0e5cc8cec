use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Session TTL applied when a deployment does not configure one.
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 30;

/// Immutable signing configuration.
///
/// Built once at process start from deployment configuration and handed to
/// [`TokenService::new`]. Any process holding the same secret can validate
/// tokens issued by any other, so no server-side session state exists.
#[derive(Clone)]
pub struct TokenConfig {
    secret: Vec<u8>,
    ttl: Duration,
}

impl TokenConfig {
    /// Create a signing configuration.
    ///
    /// # Arguments
    /// * `secret` - HMAC secret; at least 256 bits (32 bytes) for HS256
    /// * `ttl` - Session lifetime applied by [`TokenService::issue_session`]
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            secret: secret.to_vec(),
            ttl,
        }
    }

    /// Create a signing configuration with the default session TTL.
    pub fn with_default_ttl(secret: &[u8]) -> Self {
        Self::new(secret, Duration::minutes(DEFAULT_SESSION_TTL_MINUTES))
    }
}

/// Issues and validates signed session tokens.
///
/// Stateless request/response functions over a fixed secret; the signing
/// algorithm is pinned to HS256 (HMAC with SHA-256).
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service from an immutable configuration.
    pub fn new(config: TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.secret),
            decoding_key: DecodingKey::from_secret(&config.secret),
            algorithm: Algorithm::HS256,
            ttl: config.ttl,
        }
    }

    /// The configured session TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a signed token for `subject` expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Identity the token asserts (the user's email)
    /// * `ttl` - Lifetime; the expiry claim is set to now + ttl
    ///
    /// # Returns
    /// Compact JWS string (`header.claims.signature`, base64url segments)
    ///
    /// # Errors
    /// * `Encoding` - Serialization or signing failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let claims = Claims::new(subject, ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Issue a signed token for `subject` with the configured session TTL.
    pub fn issue_session(&self, subject: &str) -> Result<String, TokenError> {
        self.issue(subject, self.ttl)
    }

    /// Decode and validate a token.
    ///
    /// Verifies structure, signature, and expiry. Expiry is enforced
    /// exactly: no clock-skew leeway.
    ///
    /// # Arguments
    /// * `token` - Compact JWS string to validate
    ///
    /// # Returns
    /// The embedded claim set
    ///
    /// # Errors
    /// * `Rejected` - Any of the three checks failed; the cause is carried
    ///   only in the diagnostic `reason` field
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Rejected {
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn service() -> TokenService {
        TokenService::new(TokenConfig::new(SECRET, Duration::minutes(30)))
    }

    #[test]
    fn test_issue_and_decode() {
        let tokens = service();

        let token = tokens
            .issue("user@example.com", Duration::minutes(30))
            .expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let claims = tokens.decode(&token).expect("Failed to decode token");
        assert_eq!(claims.sub, "user@example.com");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_issue_session_uses_configured_ttl() {
        let tokens = TokenService::new(TokenConfig::new(SECRET, Duration::minutes(5)));

        let token = tokens
            .issue_session("user@example.com")
            .expect("Failed to issue token");

        let claims = tokens.decode(&token).expect("Failed to decode token");
        assert_eq!(claims.exp - claims.iat, 5 * 60);
    }

    #[test]
    fn test_decode_expired_token() {
        let tokens = service();

        // exp already in the past
        let token = tokens
            .issue("user@example.com", Duration::minutes(-5))
            .expect("Failed to issue token");

        let err = tokens.decode(&token).unwrap_err();
        assert!(matches!(err, TokenError::Rejected { .. }));
    }

    #[test]
    fn test_decode_tampered_signature() {
        let tokens = service();

        let token = tokens
            .issue("user@example.com", Duration::minutes(30))
            .expect("Failed to issue token");

        // Flip the last character of the signature segment
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        let err = tokens.decode(&tampered).unwrap_err();
        assert!(matches!(err, TokenError::Rejected { .. }));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let issuer = service();
        let other = TokenService::new(TokenConfig::new(
            b"another_secret_key_32_bytes_long!!",
            Duration::minutes(30),
        ));

        let token = issuer
            .issue("user@example.com", Duration::minutes(30))
            .expect("Failed to issue token");

        assert!(other.decode(&token).is_err());
    }

    #[test]
    fn test_decode_malformed_token() {
        let tokens = service();

        assert!(tokens.decode("not-a-token").is_err());
        assert!(tokens.decode("still.not_a.token").is_err());
        assert!(tokens.decode("").is_err());
    }

    #[test]
    fn test_rejections_are_indistinguishable() {
        let tokens = service();

        let expired = tokens
            .issue("user@example.com", Duration::minutes(-5))
            .unwrap();
        let mut tampered = tokens
            .issue("user@example.com", Duration::minutes(30))
            .unwrap();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        let expired_err = tokens.decode(&expired).unwrap_err();
        let tampered_err = tokens.decode(&tampered).unwrap_err();
        let malformed_err = tokens.decode("garbage").unwrap_err();

        // One rejection outcome, whatever the cause
        assert_eq!(expired_err.to_string(), tampered_err.to_string());
        assert_eq!(tampered_err.to_string(), malformed_err.to_string());
    }
}
