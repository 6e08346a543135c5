//! Recipe Models
//! Mission: Define recipe records and per-operation request schemas

use serde::{Deserialize, Serialize};

/// Stored recipe record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub time_minutes: i64,
}

/// Create request body - POST /recipes
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub description: String,
    pub time_minutes: i64,
}

/// Partial update body - PUT /recipes/:id
///
/// Absent fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub time_minutes: Option<i64>,
}

/// List query parameters - GET /recipes
#[derive(Debug, Default, Deserialize)]
pub struct RecipeQuery {
    pub description: Option<String>,
    pub max_time: Option<i64>,
}
