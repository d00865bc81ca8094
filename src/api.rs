//! HTTP client for the external recipe service

use async_trait::async_trait;
use reqwest::Client;

use crate::error::StoreError;
use crate::models::{CreateRecipeRequest, CreatedRecipe, NewRecipe, Recipe, RecipesResponse};

/// The three recipe endpoints the store consumes.
///
/// A trait seam so tests can drive the store with a scripted double instead
/// of a live server.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// GET `/recipes` — the full recipe collection.
    async fn list_recipes(&self) -> Result<RecipesResponse, StoreError>;

    /// GET `/recipes/{id}` — a single recipe by id.
    async fn get_recipe(&self, id: i64) -> Result<Recipe, StoreError>;

    /// POST `/recipes/add` — create a recipe; the echo may omit fields.
    async fn create_recipe(&self, draft: &NewRecipe) -> Result<CreatedRecipe, StoreError>;
}

/// reqwest-backed implementation against a dummyjson-compatible service.
///
/// No request timeouts are configured; a hung call simply never resolves.
pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
}

impl HttpRecipeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn list_recipes(&self) -> Result<RecipesResponse, StoreError> {
        let url = format!("{}/recipes", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    async fn get_recipe(&self, id: i64) -> Result<Recipe, StoreError> {
        let url = format!("{}/recipes/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    async fn create_recipe(&self, draft: &NewRecipe) -> Result<CreatedRecipe, StoreError> {
        let url = format!("{}/recipes/add", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CreateRecipeRequest::from_draft(draft))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}
