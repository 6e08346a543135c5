//! RecipeBox Backend Library
//!
//! Exposes core modules for use by the server binary and tests.

pub mod app;
pub mod auth;
pub mod middleware;
pub mod models;
pub mod recipes;
