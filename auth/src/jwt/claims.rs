use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// JWT claims carried by every token the service issues.
///
/// All fields are required: a token missing any of them fails decoding before
/// its payload is ever trusted. Clients treat the token as opaque; these are
/// the only claims it carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the account's username)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject with expiration relative to now.
    ///
    /// # Arguments
    /// * `subject` - Username the token stands for
    /// * `expiration_hours` - Hours until the token expires
    pub fn for_subject(subject: impl Into<String>, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the token is expired at `current_timestamp`.
    ///
    /// A token is expired once `exp <= now`; a token is accepted strictly
    /// before its expiration instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("alice", 24);

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_is_expired_boundary() {
        let claims = Claims {
            sub: "alice".to_string(),
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // exp <= now counts as expired
        assert!(claims.is_expired(1001));
    }
}
