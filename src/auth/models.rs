//! Authentication Models
//! Mission: Define user accounts, token claims, and auth request schemas

use serde::{Deserialize, Serialize};

/// Registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub secret: String, // stored verbatim - never serialize
    pub created_at: String,
}

/// JWT Claims payload
///
/// The token carries a single claim: the user's id rendered as a string.
/// Tokens have no expiry; they stay valid for as long as the signing key
/// is unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // subject (user id)
}

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}
