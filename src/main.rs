//! RecipeBox - Authenticated Recipe API
//! Mission: Gate recipe CRUD behind signed bearer tokens

use anyhow::{Context, Result};
use dotenv::dotenv;
use recipebox_backend::{
    app::build_router,
    auth::{AuthState, JwtHandler, UserStore},
    recipes::{api::AppState, RecipeStore},
};
use std::{env, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment and logging
    dotenv().ok();
    init_tracing();

    info!("🚀 RecipeBox API starting");

    let auth_db_path = env::var("AUTH_DB_PATH").unwrap_or_else(|_| "recipebox_auth.db".to_string());
    let recipe_db_path =
        env::var("RECIPE_DB_PATH").unwrap_or_else(|_| "recipebox_recipes.db".to_string());
    let jwt_secret = env::var("JWT_SECRET")
        .unwrap_or_else(|_| "dev-secret-change-in-production-minimum-32-characters".to_string());

    let user_store = Arc::new(UserStore::new(&auth_db_path)?);
    let recipe_store = Arc::new(RecipeStore::new(&recipe_db_path)?);
    let jwt_handler = Arc::new(JwtHandler::new(jwt_secret));

    info!("🔐 Authentication initialized at: {}", auth_db_path);

    let auth_state = AuthState::new(user_store, jwt_handler.clone());
    let app_state = AppState { recipe_store };

    let app = build_router(auth_state, app_state, jwt_handler);

    // Start server
    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr).await?;
    info!("🎯 API server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Initialize tracing with env-filter support
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipebox_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
