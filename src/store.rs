//! The recipe store: one mutable state container plus its action set
//!
//! Constructed once per application instance; views read through
//! [`RecipeStore::snapshot`] and mutate only through the named actions.
//! Overlapping fetches are not fenced against each other: the call that
//! completes last writes last, regardless of which was issued first.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use crate::api::{HttpRecipeApi, RecipeApi};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::{CreatedRecipe, NewRecipe, Recipe};
use crate::persistence::{Snapshot, SnapshotFile};
use crate::state::StoreState;

pub struct RecipeStore {
    state: Mutex<StoreState>,
    api: Arc<dyn RecipeApi>,
    snapshot_file: Option<SnapshotFile>,
}

impl RecipeStore {
    /// Build a store talking to the configured external service.
    pub fn new(config: StoreConfig) -> Self {
        let api = Arc::new(HttpRecipeApi::new(&config.base_url));
        Self::with_api(api, config)
    }

    /// Build a store around an arbitrary [`RecipeApi`] implementation.
    ///
    /// Hydrates `recipes` and `recipe_details` from the snapshot slot when
    /// one is configured; the transient fields start at their defaults
    /// either way.
    pub fn with_api(api: Arc<dyn RecipeApi>, config: StoreConfig) -> Self {
        let snapshot_file = config.snapshot_path.map(SnapshotFile::new);
        let mut state = StoreState::new(config.recipes_per_page);

        if let Some(slot) = &snapshot_file {
            match slot.load() {
                Ok(Some(snapshot)) => {
                    state.recipes = snapshot.recipes;
                    state.recipe_details = snapshot.recipe_details;
                }
                Ok(None) => {}
                Err(e) => log::warn!("Failed to load snapshot: {}", e),
            }
        }

        Self {
            state: Mutex::new(state),
            api,
            snapshot_file,
        }
    }

    /// Read-only view of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.lock_state().clone()
    }

    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().expect("state mutex poisoned")
    }

    /// Apply a synchronous mutation and rewrite the snapshot slot.
    ///
    /// The lock is held only for the mutation itself, never across an await.
    /// A failed save is logged and must not poison the local mutation.
    fn update<R>(&self, mutate: impl FnOnce(&mut StoreState) -> R) -> R {
        let mut state = self.lock_state();
        let out = mutate(&mut state);
        if let Some(slot) = &self.snapshot_file {
            let snapshot = Snapshot {
                recipes: state.recipes.clone(),
                recipe_details: state.recipe_details.clone(),
            };
            if let Err(e) = slot.save(&snapshot) {
                log::warn!("Failed to save snapshot: {}", e);
            }
        }
        out
    }

    /// Replace `recipes` with the external collection.
    ///
    /// Every fetched entry comes back unfavorited and the page cursor
    /// returns to 1. On failure the collection is cleared; there is no
    /// retry and no partial merge.
    pub async fn fetch_recipes(&self) {
        self.update(|s| s.is_loading = true);

        match self.api.list_recipes().await {
            Ok(response) => self.update(|s| {
                s.recipes = response
                    .recipes
                    .into_iter()
                    .map(|mut recipe| {
                        recipe.is_favorite = false;
                        recipe
                    })
                    .collect();
                s.current_page = 1;
            }),
            Err(e) => {
                log::error!("Error fetching recipes: {}", e);
                self.update(|s| s.recipes = Vec::new());
            }
        }

        self.update(|s| s.is_loading = false);
    }

    /// Fetch a single recipe into `recipe_details`; absent on failure.
    pub async fn fetch_recipe_details(&self, id: i64) {
        self.update(|s| s.is_loading = true);

        match self.api.get_recipe(id).await {
            Ok(recipe) => self.update(|s| s.recipe_details = Some(recipe)),
            Err(e) => {
                log::error!("Error fetching recipe {}: {}", id, e);
                self.update(|s| s.recipe_details = None);
            }
        }

        self.update(|s| s.is_loading = false);
    }

    /// Flip the favorite flag on a recipe; silent no-op for unknown ids.
    pub fn toggle_favorite(&self, id: i64) {
        self.update(|s| {
            if let Some(recipe) = s.recipes.iter_mut().find(|r| r.id == id) {
                recipe.is_favorite = !recipe.is_favorite;
            }
        });
    }

    /// Remove a recipe locally; the external service is not told.
    ///
    /// The page cursor is clamped against the unfiltered collection even
    /// while the favorites filter is active.
    pub fn delete_recipe(&self, id: i64) {
        self.update(|s| {
            s.recipes.retain(|r| r.id != id);
            let total_pages = (s.recipes.len() as u32).div_ceil(s.recipes_per_page);
            if s.current_page > total_pages {
                s.current_page = total_pages.max(1);
            }
        });
    }

    /// Flip the favorites-only filter and return to page 1.
    pub fn toggle_show_favorites(&self) {
        self.update(|s| {
            s.show_favorites_only = !s.show_favorites_only;
            s.current_page = 1;
        });
    }

    /// Create a recipe against the external service.
    ///
    /// On success the echo is coalesced with the draft, prepended to
    /// `recipes`, and returned. On failure a local-only recipe is still
    /// inserted (synthesized id: max existing + 1, or current epoch millis
    /// for an empty collection) before the error is returned, so callers
    /// must not assume an `Err` means no state change.
    pub async fn add_recipe(&self, draft: NewRecipe) -> Result<CreatedRecipe, StoreError> {
        self.update(|s| s.is_loading = true);

        match self.api.create_recipe(&draft).await {
            Ok(created) => {
                let recipe = Recipe::from_created(&created, &draft);
                self.update(|s| {
                    s.recipes.insert(0, recipe);
                    s.current_page = 1;
                    s.is_loading = false;
                });
                Ok(created)
            }
            Err(e) => {
                log::error!("Error adding recipe to server: {}", e);
                self.update(|s| {
                    let id = next_local_id(&s.recipes);
                    s.recipes.insert(0, Recipe::from_draft_local(&draft, id));
                    s.current_page = 1;
                    s.is_loading = false;
                });
                Err(e)
            }
        }
    }

    /// Set the page cursor verbatim; bounds are the caller's problem.
    pub fn set_current_page(&self, page: u32) {
        self.update(|s| s.current_page = page);
    }
}

fn next_local_id(recipes: &[Recipe]) -> i64 {
    recipes
        .iter()
        .map(|r| r.id)
        .max()
        .map_or_else(|| Utc::now().timestamp_millis(), |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recipe;

    fn recipe(id: i64) -> Recipe {
        Recipe {
            id,
            name: format!("Recipe {id}"),
            ingredients: None,
            instructions: None,
            prep_time_minutes: 5,
            cook_time_minutes: 10,
            servings: 2,
            difficulty: "Easy".to_string(),
            cuisine: "Test".to_string(),
            calories_per_serving: 100,
            tags: None,
            user_id: 1,
            image: String::new(),
            rating: 0.0,
            review_count: 0,
            meal_type: None,
            is_favorite: false,
        }
    }

    #[test]
    fn local_id_increments_past_the_maximum() {
        let recipes = vec![recipe(3), recipe(12), recipe(7)];
        assert_eq!(next_local_id(&recipes), 13);
    }

    #[test]
    fn local_id_falls_back_to_epoch_millis_when_empty() {
        let before = Utc::now().timestamp_millis();
        let id = next_local_id(&[]);
        assert!(id >= before);
    }
}
