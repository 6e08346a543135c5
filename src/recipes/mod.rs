//! Recipes Module
//! Mission: CRUD over the recipe collection with filtered queries

pub mod api;
pub mod models;
pub mod store;

pub use api::AppState;
pub use store::RecipeStore;
