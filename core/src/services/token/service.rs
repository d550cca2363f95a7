//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use ch_shared::config::JwtConfig;

use crate::domain::entities::token::{Claims, TokenScope};
use crate::errors::TokenError;

/// Service for minting and validating signed, expiring, scoped tokens
///
/// Tokens are stateless: validity is a pure function of signature, expiry
/// and scope at decode time. The service has no side effects beyond the
/// cryptographic computation.
pub struct TokenService {
    config: JwtConfig,
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from JWT configuration
    pub fn new(config: JwtConfig) -> Self {
        let algorithm = config
            .algorithm
            .parse::<Algorithm>()
            .unwrap_or(Algorithm::HS256);

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        // An expired token must fail decode regardless of clock skew.
        validation.leeway = 0;

        Self {
            config,
            algorithm,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Creates an access token for `subject`
    ///
    /// # Arguments
    ///
    /// * `subject` - the account email the token is issued for
    /// * `ttl` - optional lifetime override; defaults to the configured
    ///   access-token expiry (30 minutes)
    pub fn create_access_token(
        &self,
        subject: &str,
        ttl: Option<Duration>,
    ) -> Result<String, TokenError> {
        let ttl =
            ttl.unwrap_or_else(|| Duration::minutes(self.config.access_token_expire_minutes));
        self.encode_claims(&Claims::new(subject, TokenScope::Access, ttl))
    }

    /// Creates a refresh token for `subject` (7 days by configuration)
    pub fn create_refresh_token(&self, subject: &str) -> Result<String, TokenError> {
        let ttl = Duration::days(self.config.refresh_token_expire_days);
        self.encode_claims(&Claims::new(subject, TokenScope::Refresh, ttl))
    }

    /// Creates an email-verification token for `subject` (48 hours by
    /// configuration)
    pub fn create_email_token(&self, subject: &str) -> Result<String, TokenError> {
        let ttl = Duration::hours(self.config.email_token_expire_hours);
        self.encode_claims(&Claims::new(subject, TokenScope::EmailVerification, ttl))
    }

    /// Verifies a token and returns its subject
    ///
    /// Signature and expiry are checked first, then the scope must equal
    /// `expected_scope` and the subject must be present.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - the subject (account email)
    /// * `Err(TokenError)` - signature/expiry/scope/subject check failed
    pub fn decode(&self, token: &str, expected_scope: TokenScope) -> Result<String, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::InvalidTokenFormat,
                }
            })?;

        let claims = token_data.claims;

        if claims.scope != expected_scope {
            return Err(TokenError::InvalidScope);
        }

        if claims.sub.is_empty() {
            return Err(TokenError::MissingSubject);
        }

        Ok(claims.sub)
    }

    /// Encodes claims into a signed JWT
    fn encode_claims(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed)
    }
}
