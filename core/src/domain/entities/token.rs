//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Token type reported to clients on login
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Scope tag restricting where a token may be used
///
/// A tagged variant rather than a free-form string; the wire format keeps
/// the original `access_token` / `refresh_token` / `email_verification`
/// tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenScope {
    /// Short-lived credential authorizing API calls
    #[serde(rename = "access_token")]
    Access,

    /// Longer-lived credential used to obtain new access tokens
    #[serde(rename = "refresh_token")]
    Refresh,

    /// Credential embedded in the email-verification link
    #[serde(rename = "email_verification")]
    EmailVerification,
}

impl std::fmt::Display for TokenScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            TokenScope::Access => "access_token",
            TokenScope::Refresh => "refresh_token",
            TokenScope::EmailVerification => "email_verification",
        };
        f.write_str(tag)
    }
}

/// Claims structure for the JWT payload
///
/// Validity is purely a function of signature, expiry and scope at decode
/// time; there is no server-side revocation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account email)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Scope restricting this token's use
    pub scope: TokenScope,
}

impl Claims {
    /// Creates new claims for `subject` expiring after `ttl`
    pub fn new(subject: impl Into<String>, scope: TokenScope, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            scope,
        }
    }

    /// Checks whether the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Token pair returned to the client on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Always `"bearer"`
    pub token_type: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_lifetime() {
        let claims = Claims::new("ann@example.com", TokenScope::Access, Duration::minutes(30));

        assert_eq!(claims.sub, "ann@example.com");
        assert_eq!(claims.scope, TokenScope::Access);
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_claims_expiration() {
        let claims = Claims::new("ann@example.com", TokenScope::Access, Duration::minutes(-1));
        assert!(claims.is_expired());
    }

    #[test]
    fn test_scope_wire_format() {
        let json = serde_json::to_string(&TokenScope::Access).unwrap();
        assert_eq!(json, r#""access_token""#);

        let scope: TokenScope = serde_json::from_str(r#""email_verification""#).unwrap();
        assert_eq!(scope, TokenScope::EmailVerification);
    }

    #[test]
    fn test_claims_serialization_round_trip() {
        let claims = Claims::new("bob@example.com", TokenScope::Refresh, Duration::days(7));

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_token_pair_is_bearer() {
        let pair = TokenPair::new("access".to_string(), "refresh".to_string());
        assert_eq!(pair.token_type, "bearer");
    }
}
