//! Recipe API Endpoints
//! Mission: Token-gated CRUD over the recipe collection

use crate::models::MsgResponse;
use crate::recipes::{
    models::{CreateRecipeRequest, Recipe, RecipeQuery, UpdateRecipeRequest},
    store::RecipeStore,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::info;

/// Shared recipe state
#[derive(Clone)]
pub struct AppState {
    pub recipe_store: Arc<RecipeStore>,
}

/// Create recipe - POST /recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<MsgResponse>), RecipeApiError> {
    if payload.title.is_empty() {
        return Err(RecipeApiError::EmptyTitle);
    }
    if payload.time_minutes < 0 {
        return Err(RecipeApiError::NegativeTime);
    }

    let recipe = state
        .recipe_store
        .insert(&payload)
        .map_err(|_| RecipeApiError::InternalError)?;

    info!("🍲 Created recipe: {} (id {})", recipe.title, recipe.id);

    Ok((
        StatusCode::CREATED,
        Json(MsgResponse::new("recipe created successfully")),
    ))
}

/// List recipes - GET /recipes?description=&max_time=
pub async fn list_recipes(
    Query(params): Query<RecipeQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Recipe>>, RecipeApiError> {
    let recipes = state
        .recipe_store
        .list(&params)
        .map_err(|_| RecipeApiError::InternalError)?;

    Ok(Json(recipes))
}

/// Update recipe - PUT /recipes/:id
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRecipeRequest>,
) -> Result<Json<MsgResponse>, RecipeApiError> {
    if payload.title.as_deref() == Some("") {
        return Err(RecipeApiError::EmptyTitle);
    }
    if payload.time_minutes.is_some_and(|t| t < 0) {
        return Err(RecipeApiError::NegativeTime);
    }

    let updated = state
        .recipe_store
        .update(id, &payload)
        .map_err(|_| RecipeApiError::InternalError)?;

    match updated {
        Some(recipe) => {
            info!("✏️  Updated recipe: {} (id {})", recipe.title, recipe.id);
            Ok(Json(MsgResponse::new("recipe updated successfully")))
        }
        None => Err(RecipeApiError::RecipeNotFound),
    }
}

/// Delete recipe - DELETE /recipes/:id
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MsgResponse>, RecipeApiError> {
    let deleted = state
        .recipe_store
        .delete(id)
        .map_err(|_| RecipeApiError::InternalError)?;

    if !deleted {
        return Err(RecipeApiError::RecipeNotFound);
    }

    info!("🗑️  Deleted recipe: {}", id);

    Ok(Json(MsgResponse::new("recipe deleted successfully")))
}

/// Recipe API errors
#[derive(Debug)]
pub enum RecipeApiError {
    EmptyTitle,
    NegativeTime,
    RecipeNotFound,
    InternalError,
}

impl IntoResponse for RecipeApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RecipeApiError::EmptyTitle => (StatusCode::BAD_REQUEST, "title must not be empty"),
            RecipeApiError::NegativeTime => {
                (StatusCode::BAD_REQUEST, "time_minutes must be non-negative")
            }
            RecipeApiError::RecipeNotFound => (StatusCode::NOT_FOUND, "recipe not found"),
            RecipeApiError::InternalError => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, message).into_response()
    }
}
