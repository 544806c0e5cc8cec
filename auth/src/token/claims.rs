use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried inside a session token.
///
/// All three fields are required: tokens without a subject or an expiry
/// are neither issued nor accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the identity the token asserts (here, the user's email).
    pub sub: String,

    /// Issued at (Unix timestamp, seconds).
    pub iat: i64,

    /// Expiration time (Unix timestamp, seconds).
    pub exp: i64,
}

impl Claims {
    /// Build a claim set for `subject` expiring `ttl` from now.
    pub fn new(subject: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Whether the expiry has elapsed at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_lifetime() {
        let claims = Claims::new("user@example.com", Duration::minutes(30));

        assert_eq!(claims.sub, "user@example.com");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "user@example.com".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000)); // exactly at expiration
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_wire_shape() {
        let claims = Claims {
            sub: "user@example.com".to_string(),
            iat: 1000,
            exp: 2800,
        };

        let value = serde_json::to_value(&claims).unwrap();
        let object = value.as_object().unwrap();

        // Exactly the three standard keys, nothing extra
        assert_eq!(object.len(), 3);
        assert_eq!(object["sub"], "user@example.com");
        assert_eq!(object["iat"], 1000);
        assert_eq!(object["exp"], 2800);
    }
}
