//! JWT signing and verification.
//!
//! Tokens are HS256 and carry the user's id, name, email, and admin flag.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ApiError, Result};
use crate::models::User;

/// Claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// User id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Capability gate for admin-only routes
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

/// Issues and verifies auth tokens.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenProvider {
    /// Creates a provider signing HS256 tokens valid for seven days.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
            ttl: Duration::days(7),
        }
    }

    /// Signs a token for `user`.
    pub fn sign(&self, user: &User) -> Result<String> {
        let claims = AuthClaims {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("failed to sign token: {}", e)))?;

        debug!("Issued token for user {}", user.id);
        Ok(token)
    }

    /// Verifies a token and returns its claims.
    pub fn verify(&self, token: &str) -> Result<AuthClaims> {
        decode::<AuthClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                warn!("Token verification failed: {}", e);
                ApiError::Unauthorized("Invalid or expired token".to_string())
            })
    }
}
