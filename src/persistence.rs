//! Snapshot persistence
//!
//! One JSON blob in a fixed slot, holding only `recipes` and
//! `recipeDetails`. Loaded once when a store is constructed and rewritten
//! whole on every state transition; the transient fields (loading flag,
//! favorites filter, current page) are never part of it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::Recipe;

/// The persisted subset of store state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub recipes: Vec<Recipe>,
    pub recipe_details: Option<Recipe>,
}

/// A file-backed snapshot slot.
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot; `Ok(None)` when the slot was never written.
    pub fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Replace the slot's contents, creating the parent directory on demand.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string(snapshot)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
