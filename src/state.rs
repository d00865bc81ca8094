//! Store state shared across all actions

use crate::models::Recipe;

/// The single mutable data model behind [`crate::store::RecipeStore`].
///
/// Only `recipes` and `recipe_details` survive a restart; the loading flag,
/// favorites filter, and current page always start from their defaults.
#[derive(Debug, Clone)]
pub struct StoreState {
    /// All known recipes, newest first when created locally.
    pub recipes: Vec<Recipe>,
    /// The most recently fetched single-recipe view.
    pub recipe_details: Option<Recipe>,
    /// True exactly while a fetch/create call is outstanding.
    pub is_loading: bool,
    /// Favorites-only filter toggle.
    pub show_favorites_only: bool,
    /// 1-based page cursor into the displayed set.
    pub current_page: u32,
    /// Page size; constant for the session.
    pub recipes_per_page: u32,
}

impl StoreState {
    pub fn new(recipes_per_page: u32) -> Self {
        Self {
            recipes: Vec::new(),
            recipe_details: None,
            is_loading: false,
            show_favorites_only: false,
            current_page: 1,
            recipes_per_page,
        }
    }

    /// Recipes eligible for display after applying the favorites filter.
    pub fn displayed_recipes(&self) -> Vec<&Recipe> {
        if self.show_favorites_only {
            self.recipes.iter().filter(|r| r.is_favorite).collect()
        } else {
            self.recipes.iter().collect()
        }
    }

    /// Page count for the displayed set.
    pub fn total_pages(&self) -> u32 {
        (self.displayed_recipes().len() as u32).div_ceil(self.recipes_per_page)
    }

    /// The slice of the displayed set shown on `current_page`.
    pub fn current_page_recipes(&self) -> Vec<&Recipe> {
        let start = self.current_page.saturating_sub(1) as usize * self.recipes_per_page as usize;
        self.displayed_recipes()
            .into_iter()
            .skip(start)
            .take(self.recipes_per_page as usize)
            .collect()
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new(crate::config::RECIPES_PER_PAGE)
    }
}
