//! Recipe models
//!
//! These structs mirror the external recipe service's JSON shapes, which use
//! camelCase field names on the wire.

use serde::{Deserialize, Serialize};

// ============================================================================
// Recipe
// ============================================================================

/// A single dish record, either sourced from the external API or synthesized
/// locally when the creation endpoint is unreachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub difficulty: String,
    pub cuisine: String,
    pub calories_per_serving: u32,
    pub tags: Option<Vec<String>>,
    pub user_id: i64,
    pub image: String,
    pub rating: f64,
    pub review_count: i64,
    pub meal_type: Option<Vec<String>>,
    /// Client-only flag; the external API never sends this field.
    #[serde(default)]
    pub is_favorite: bool,
}

impl Recipe {
    /// Merge the creation endpoint's echo with the submitted draft.
    ///
    /// The API value wins whenever it is present; the draft fills in
    /// anything the echo dropped.
    pub fn from_created(echo: &CreatedRecipe, draft: &NewRecipe) -> Self {
        Self {
            id: echo.id,
            name: echo.name.clone().unwrap_or_else(|| draft.name.clone()),
            ingredients: Some(
                echo.ingredients
                    .clone()
                    .unwrap_or_else(|| draft.ingredients.clone()),
            ),
            instructions: Some(
                echo.instructions
                    .clone()
                    .unwrap_or_else(|| draft.instructions.clone()),
            ),
            prep_time_minutes: echo.prep_time_minutes.unwrap_or(draft.prep_time_minutes),
            cook_time_minutes: echo.cook_time_minutes.unwrap_or(draft.cook_time_minutes),
            servings: echo.servings.unwrap_or(draft.servings),
            difficulty: echo
                .difficulty
                .clone()
                .unwrap_or_else(|| draft.difficulty.clone()),
            cuisine: echo.cuisine.clone().unwrap_or_else(|| draft.cuisine.clone()),
            calories_per_serving: echo
                .calories_per_serving
                .unwrap_or(draft.calories_per_serving),
            tags: Some(echo.tags.clone().unwrap_or_else(|| draft.tags.clone())),
            user_id: echo.user_id.unwrap_or(LOCAL_USER_ID),
            image: echo.image.clone().unwrap_or_else(|| draft.image.clone()),
            rating: echo.rating.unwrap_or(0.0),
            review_count: echo.review_count.unwrap_or(0),
            meal_type: Some(
                echo.meal_type
                    .clone()
                    .unwrap_or_else(|| draft.tags.clone()),
            ),
            is_favorite: false,
        }
    }

    /// Build a local-only recipe from a draft when the server could not be
    /// reached; the caller supplies the synthesized id.
    pub fn from_draft_local(draft: &NewRecipe, id: i64) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            ingredients: Some(draft.ingredients.clone()),
            instructions: Some(draft.instructions.clone()),
            prep_time_minutes: draft.prep_time_minutes,
            cook_time_minutes: draft.cook_time_minutes,
            servings: draft.servings,
            difficulty: draft.difficulty.clone(),
            cuisine: draft.cuisine.clone(),
            calories_per_serving: draft.calories_per_serving,
            tags: Some(draft.tags.clone()),
            user_id: LOCAL_USER_ID,
            image: draft.image.clone(),
            rating: 0.0,
            review_count: 0,
            meal_type: Some(draft.tags.clone()),
            is_favorite: false,
        }
    }
}

// ============================================================================
// NewRecipe
// ============================================================================

/// User id stamped on every locally created recipe.
pub const LOCAL_USER_ID: i64 = 1;

/// The user-submitted shape used to create a recipe, before server-assigned
/// fields (id, rating, reviewCount) exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub difficulty: String,
    pub cuisine: String,
    pub calories_per_serving: u32,
    pub tags: Vec<String>,
    pub image: String,
}

// ============================================================================
// Wire shapes
// ============================================================================

/// Response envelope of the list endpoint. Extra envelope fields (total,
/// skip, limit) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipesResponse {
    pub recipes: Vec<Recipe>,
}

/// Body POSTed to the creation endpoint: the draft plus the defaults the
/// client stamps on every new recipe.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub difficulty: String,
    pub cuisine: String,
    pub calories_per_serving: u32,
    pub tags: Vec<String>,
    pub image: String,
    pub user_id: i64,
    pub rating: f64,
    pub review_count: i64,
    pub meal_type: Vec<String>,
}

impl CreateRecipeRequest {
    pub fn from_draft(draft: &NewRecipe) -> Self {
        Self {
            name: draft.name.clone(),
            ingredients: draft.ingredients.clone(),
            instructions: draft.instructions.clone(),
            prep_time_minutes: draft.prep_time_minutes,
            cook_time_minutes: draft.cook_time_minutes,
            servings: draft.servings,
            difficulty: draft.difficulty.clone(),
            cuisine: draft.cuisine.clone(),
            calories_per_serving: draft.calories_per_serving,
            tags: draft.tags.clone(),
            image: draft.image.clone(),
            user_id: LOCAL_USER_ID,
            rating: 0.0,
            review_count: 0,
            meal_type: draft.tags.clone(),
        }
    }
}

/// The creation endpoint's echo. The server may omit fields the client sent,
/// so everything beyond the assigned id is optional here and coalesced back
/// against the draft by [`Recipe::from_created`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRecipe {
    pub id: i64,
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub prep_time_minutes: Option<u32>,
    pub cook_time_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub difficulty: Option<String>,
    pub cuisine: Option<String>,
    pub calories_per_serving: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub user_id: Option<i64>,
    pub image: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<i64>,
    pub meal_type: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewRecipe {
        NewRecipe {
            name: "Shakshuka".to_string(),
            ingredients: vec!["4 eggs".to_string(), "2 tomatoes".to_string()],
            instructions: vec!["Simmer sauce".to_string(), "Poach eggs".to_string()],
            prep_time_minutes: 10,
            cook_time_minutes: 20,
            servings: 2,
            difficulty: "Easy".to_string(),
            cuisine: "Middle Eastern".to_string(),
            calories_per_serving: 320,
            tags: vec!["Breakfast".to_string(), "Eggs".to_string()],
            image: "https://example.com/shakshuka.jpg".to_string(),
        }
    }

    #[test]
    fn deserializes_api_recipe_without_favorite_flag() {
        let raw = r#"{
            "id": 1,
            "name": "Classic Margherita Pizza",
            "ingredients": ["Pizza dough", "Tomato sauce"],
            "instructions": ["Preheat oven", "Bake"],
            "prepTimeMinutes": 20,
            "cookTimeMinutes": 15,
            "servings": 4,
            "difficulty": "Easy",
            "cuisine": "Italian",
            "caloriesPerServing": 300,
            "tags": ["Pizza", "Italian"],
            "userId": 166,
            "image": "https://cdn.dummyjson.com/recipe-images/1.webp",
            "rating": 4.6,
            "reviewCount": 98,
            "mealType": ["Dinner"]
        }"#;

        let recipe: Recipe = serde_json::from_str(raw).unwrap();
        assert_eq!(recipe.id, 1);
        assert_eq!(recipe.rating, 4.6);
        assert!(!recipe.is_favorite);
    }

    #[test]
    fn coalesce_prefers_echo_values() {
        let echo = CreatedRecipe {
            id: 51,
            name: Some("Shakshuka Deluxe".to_string()),
            ingredients: Some(vec!["6 eggs".to_string()]),
            instructions: None,
            prep_time_minutes: Some(12),
            cook_time_minutes: None,
            servings: None,
            difficulty: None,
            cuisine: None,
            calories_per_serving: None,
            tags: None,
            user_id: Some(1),
            image: None,
            rating: None,
            review_count: None,
            meal_type: None,
        };

        let recipe = Recipe::from_created(&echo, &draft());
        assert_eq!(recipe.id, 51);
        assert_eq!(recipe.name, "Shakshuka Deluxe");
        assert_eq!(recipe.ingredients, Some(vec!["6 eggs".to_string()]));
        // echo omitted these, so the draft fills them in
        assert_eq!(
            recipe.instructions,
            Some(vec!["Simmer sauce".to_string(), "Poach eggs".to_string()])
        );
        assert_eq!(recipe.cook_time_minutes, 20);
        assert_eq!(recipe.meal_type, Some(draft().tags));
        assert!(!recipe.is_favorite);
    }

    #[test]
    fn local_recipe_gets_client_defaults() {
        let recipe = Recipe::from_draft_local(&draft(), 99);
        assert_eq!(recipe.id, 99);
        assert_eq!(recipe.user_id, LOCAL_USER_ID);
        assert_eq!(recipe.rating, 0.0);
        assert_eq!(recipe.review_count, 0);
        assert_eq!(recipe.meal_type, Some(draft().tags));
        assert!(!recipe.is_favorite);
    }
}
