//! Draft assembly from raw create-form input
//!
//! The create form delivers free text: ingredients and instructions as one
//! block with an entry per line, tags as a comma-separated field. This
//! module shapes that into a [`NewRecipe`] and applies the form-level
//! defaults before anything reaches the store.

use crate::error::StoreError;
use crate::models::NewRecipe;

/// Servings applied when the form leaves the field empty.
pub const DEFAULT_SERVINGS: u32 = 4;

/// Image used when no URL was supplied.
pub const PLACEHOLDER_IMAGE: &str =
    "https://imgholder.ru/600x300/8493a8/adb9ca&text=IMAGE+HOLDER&font=kelson";

/// Raw create-form fields before any shaping.
#[derive(Debug, Clone, Default)]
pub struct RecipeForm {
    pub name: String,
    pub cuisine: String,
    pub difficulty: String,
    pub prep_time_minutes: Option<u32>,
    pub cook_time_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub calories_per_serving: Option<u32>,
    /// One ingredient per line.
    pub ingredients: String,
    /// One step per line.
    pub instructions: String,
    /// Comma-separated.
    pub tags: String,
    pub image: String,
}

impl RecipeForm {
    /// Validate and convert into the draft shape the store accepts.
    pub fn into_draft(self) -> Result<NewRecipe, StoreError> {
        let name = required_text(&self.name, "name")?;
        let cuisine = required_text(&self.cuisine, "cuisine")?;
        let difficulty = required_text(&self.difficulty, "difficulty")?;

        let prep_time_minutes = self
            .prep_time_minutes
            .filter(|m| *m > 0)
            .ok_or_else(|| StoreError::InvalidDraft("prep time must be positive".to_string()))?;
        let cook_time_minutes = self
            .cook_time_minutes
            .filter(|m| *m > 0)
            .ok_or_else(|| StoreError::InvalidDraft("cook time must be positive".to_string()))?;

        let ingredients = split_lines(&self.ingredients);
        if ingredients.is_empty() {
            return Err(StoreError::InvalidDraft(
                "at least one ingredient is required".to_string(),
            ));
        }
        let instructions = split_lines(&self.instructions);
        if instructions.is_empty() {
            return Err(StoreError::InvalidDraft(
                "at least one instruction step is required".to_string(),
            ));
        }

        let image = match self.image.trim() {
            "" => PLACEHOLDER_IMAGE.to_string(),
            url => url.to_string(),
        };

        Ok(NewRecipe {
            name,
            ingredients,
            instructions,
            prep_time_minutes,
            cook_time_minutes,
            servings: self.servings.unwrap_or(DEFAULT_SERVINGS),
            difficulty,
            cuisine,
            calories_per_serving: self.calories_per_serving.unwrap_or(0),
            tags: split_tags(&self.tags),
            image,
        })
    }
}

fn required_text(raw: &str, field: &str) -> Result<String, StoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidDraft(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn split_tags(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RecipeForm {
        RecipeForm {
            name: "Borscht".to_string(),
            cuisine: "Ukrainian".to_string(),
            difficulty: "Medium".to_string(),
            prep_time_minutes: Some(20),
            cook_time_minutes: Some(60),
            servings: None,
            calories_per_serving: None,
            ingredients: "2 beets\n\n1 onion\n  100g cabbage  \n".to_string(),
            instructions: "Chop vegetables\nSimmer\nServe with sour cream".to_string(),
            tags: "soup, hearty".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn splits_lines_and_applies_defaults() {
        let draft = filled_form().into_draft().unwrap();
        assert_eq!(draft.ingredients, vec!["2 beets", "1 onion", "100g cabbage"]);
        assert_eq!(draft.instructions.len(), 3);
        assert_eq!(draft.tags, vec!["soup", "hearty"]);
        assert_eq!(draft.servings, DEFAULT_SERVINGS);
        assert_eq!(draft.calories_per_serving, 0);
        assert_eq!(draft.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn rejects_blank_name() {
        let form = RecipeForm {
            name: "   ".to_string(),
            ..filled_form()
        };
        assert!(matches!(
            form.into_draft(),
            Err(StoreError::InvalidDraft(_))
        ));
    }

    #[test]
    fn rejects_zero_cook_time() {
        let form = RecipeForm {
            cook_time_minutes: Some(0),
            ..filled_form()
        };
        assert!(form.into_draft().is_err());
    }

    #[test]
    fn rejects_ingredient_block_of_only_blank_lines() {
        let form = RecipeForm {
            ingredients: " \n \n".to_string(),
            ..filled_form()
        };
        assert!(form.into_draft().is_err());
    }

    #[test]
    fn empty_tags_field_becomes_empty_list() {
        let form = RecipeForm {
            tags: "  ".to_string(),
            ..filled_form()
        };
        assert!(form.into_draft().unwrap().tags.is_empty());
    }
}
