//! Savora - Recipe Catalog
//!
//! Client-side core for a recipe catalog backed by an external recipe API:
//! a state store with favoriting, local deletion, creation with a local
//! fallback, a favorites filter, pagination, and a persisted snapshot.

use serde::{Deserialize, Serialize};

pub mod api;
pub mod config;
pub mod draft;
pub mod error;
pub mod models;
pub mod persistence;
pub mod state;
pub mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use store::RecipeStore;

/// Get application info
pub fn app_info() -> AppInfo {
    AppInfo {
        name: "Savora".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Recipe Catalog".to_string(),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}
