//! Store configuration

use std::path::PathBuf;

/// Base URL of the external recipe service.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// File name of the persisted snapshot slot.
pub const SNAPSHOT_FILE: &str = "recipes-storage.json";

/// Recipes shown per page; fixed for the session.
pub const RECIPES_PER_PAGE: u32 = 9;

/// Configuration for a [`crate::store::RecipeStore`] instance.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Base URL of the external recipe API.
    pub base_url: String,

    /// Where the snapshot is stored; `None` disables persistence.
    pub snapshot_path: Option<PathBuf>,

    /// Page size for the derived pagination.
    pub recipes_per_page: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            snapshot_path: default_snapshot_path(),
            recipes_per_page: RECIPES_PER_PAGE,
        }
    }
}

/// Default snapshot location in the platform data directory.
pub fn default_snapshot_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("savora").join(SNAPSHOT_FILE))
}
