//! JWT Token Handler
//! Mission: Mint and validate bearer tokens

use crate::auth::models::{Claims, User};
use anyhow::{Context, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

/// JWT Handler for token operations
///
/// Tokens are HS256-signed and carry the user id as their only claim.
/// There is no expiry claim: a token stays valid for as long as the
/// signing key is unchanged. The key is fixed at startup.
pub struct JwtHandler {
    secret: String,
}

impl JwtHandler {
    /// Create a new JWT handler with secret key
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Generate a token for a user
    pub fn generate_token(&self, user: &User) -> Result<String> {
        let claims = Claims {
            sub: user.id.to_string(),
        };

        debug!("Generating JWT for user {} ({})", user.username, user.id);

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to generate JWT")?;

        Ok(token)
    }

    /// Validate a token and extract claims
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        // No exp claim is issued, so expiry validation must be off
        let mut validation = Validation::default();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .context("Invalid token")?;

        debug!("Validated JWT for user id {}", decoded.claims.sub);

        Ok(decoded.claims)
    }
}
