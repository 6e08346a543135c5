//! Application Router
//! Mission: Wire endpoints, guard, and shared state into one service

use crate::auth::{api as auth_api, auth_middleware, AuthState, JwtHandler};
use crate::middleware::request_logging;
use crate::recipes::api::{self as recipes_api, AppState};
use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Build the full application router.
///
/// `/register` and `/login` bypass the guard; everything under
/// `/protected` and `/recipes` requires a valid bearer token.
pub fn build_router(
    auth_state: AuthState,
    app_state: AppState,
    jwt_handler: Arc<JwtHandler>,
) -> Router {
    let public_routes = Router::new()
        .route("/register", post(auth_api::register))
        .route("/login", post(auth_api::login))
        .with_state(auth_state);

    let protected_routes = Router::new()
        .route("/protected", get(auth_api::protected_probe))
        .route(
            "/recipes",
            post(recipes_api::create_recipe).get(recipes_api::list_recipes),
        )
        .route(
            "/recipes/:id",
            put(recipes_api::update_recipe).delete(recipes_api::delete_recipe),
        )
        .route_layer(middleware::from_fn_with_state(jwt_handler, auth_middleware))
        .with_state(app_state);

    Router::new()
        .route("/health", get(health_check))
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive())
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
