//! Authentication API Endpoints
//! Mission: Provide registration, login, and token-gated probe endpoints

use crate::auth::{
    jwt::JwtHandler,
    middleware::extract_claims,
    models::{LoginRequest, RegisterRequest, TokenResponse},
    user_store::UserStore,
};
use crate::models::MsgResponse;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub user_store: Arc<UserStore>,
    pub jwt_handler: Arc<JwtHandler>,
}

impl AuthState {
    pub fn new(user_store: Arc<UserStore>, jwt_handler: Arc<JwtHandler>) -> Self {
        Self {
            user_store,
            jwt_handler,
        }
    }
}

/// Register endpoint - POST /register
pub async fn register(
    State(state): State<AuthState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MsgResponse>), AuthApiError> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(AuthApiError::MissingFields);
    }

    // Refuse to overwrite an existing account
    let existing = state
        .user_store
        .get_user_by_username(&payload.username)
        .map_err(|_| AuthApiError::InternalError)?;

    if existing.is_some() {
        warn!("❌ Registration rejected, username taken: {}", payload.username);
        return Err(AuthApiError::UserAlreadyExists);
    }

    let user = state
        .user_store
        .create_user(&payload.username, &payload.password)
        .map_err(|_| AuthApiError::InternalError)?;

    info!("🔐 Registered user: {} (id {})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(MsgResponse::new("user created successfully")),
    ))
}

/// Login endpoint - POST /login
pub async fn login(
    State(state): State<AuthState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AuthApiError> {
    info!("🔐 Login attempt: {}", payload.username);

    let valid = state
        .user_store
        .verify_secret(&payload.username, &payload.password)
        .map_err(|_| AuthApiError::InternalError)?;

    if !valid {
        warn!("❌ Failed login attempt: {}", payload.username);
        return Err(AuthApiError::InvalidCredentials);
    }

    let user = state
        .user_store
        .get_user_by_username(&payload.username)
        .map_err(|_| AuthApiError::InternalError)?
        .ok_or(AuthApiError::InvalidCredentials)?;

    let access_token = state
        .jwt_handler
        .generate_token(&user)
        .map_err(|_| AuthApiError::InternalError)?;

    info!("✅ Login successful: {} (id {})", user.username, user.id);

    Ok(Json(TokenResponse { access_token }))
}

/// Protected probe - GET /protected
///
/// Reads the claims the auth middleware injected; no database lookup.
pub async fn protected_probe(req: Request) -> Result<Json<MsgResponse>, AuthApiError> {
    let claims = extract_claims(&req).ok_or(AuthApiError::Unauthorized)?;

    Ok(Json(MsgResponse::new(format!(
        "hello, user {}",
        claims.sub
    ))))
}

/// Auth API errors
#[derive(Debug)]
pub enum AuthApiError {
    MissingFields,
    UserAlreadyExists,
    InvalidCredentials,
    Unauthorized,
    InternalError,
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthApiError::MissingFields => (
                StatusCode::BAD_REQUEST,
                "username and password are required",
            ),
            AuthApiError::UserAlreadyExists => (StatusCode::BAD_REQUEST, "user already exists"),
            AuthApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid username or password")
            }
            AuthApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Authentication required"),
            AuthApiError::InternalError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, message).into_response()
    }
}
