/**
 * Session Tokens
 *
 * This module handles JWT token generation and validation. Tokens are
 * stateless HS256 JWTs whose subject is the user ID. They expire 30 days
 * after issuance. Each token carries a random `jti`, so two tokens issued
 * to the same user in the same second still differ.
 */

use jsonwebtoken::{decode, encode, get_current_timestamp, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime (30 days), in seconds
pub const TOKEN_LIFETIME_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Unique token ID
    pub jti: String,
}

impl Claims {
    /// Parse the subject as a user ID
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::InvalidSubject)
    }
}

/// Token issuance and validation failures
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("signing secret must not be empty")]
    EmptySecret,

    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("token subject is not a user id")]
    InvalidSubject,
}

/// Non-empty HS256 signing secret
#[derive(Clone)]
pub struct SigningSecret(String);

impl SigningSecret {
    pub fn new(secret: impl Into<String>) -> Result<Self, TokenError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }
        Ok(Self(secret))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningSecret(***)")
    }
}

/// Issues and verifies session tokens with one signing secret
#[derive(Clone)]
pub struct TokenIssuer {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(secret: &SigningSecret) -> Self {
        // No clock leeway: a token is dead the second `exp` passes.
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            header: Header::default(),
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issuer whose header names an RSA algorithm for an HMAC key, so every
    /// `issue` call fails
    #[cfg(test)]
    pub(crate) fn failing(secret: &SigningSecret) -> Self {
        Self {
            header: Header::new(jsonwebtoken::Algorithm::RS256),
            ..Self::new(secret)
        }
    }

    /// Create a token for a user, valid for 30 days
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = get_current_timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + TOKEN_LIFETIME_SECS,
            iat: now,
            jti: Uuid::new_v4().to_string(),
        };

        Ok(encode(&self.header, &claims, &self.encoding_key)?)
    }

    /// Verify signature and expiry, returning the decoded claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}
