//! Client-side recipe state.

use larder_core::domain::Recipe;
use larder_shared::{ApiResponse, PaginationInfo};

use crate::api::RecipeApi;
use crate::draft::RecipeDraft;
use crate::error::ClientError;

/// Holds what a recipe UI renders: the current page of recipes, its
/// pagination block, a loading flag and the last error message.
///
/// Every operation clears the previous error first. Failures never propagate;
/// they land in [`RecipeStore::error`] and the operation yields `None`.
pub struct RecipeStore<A> {
    api: A,
    recipes: Vec<Recipe>,
    loading: bool,
    error: Option<String>,
    pagination: PaginationInfo,
}

impl<A: RecipeApi> RecipeStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            recipes: Vec::new(),
            loading: false,
            error: None,
            pagination: PaginationInfo::default(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pagination(&self) -> &PaginationInfo {
        &self.pagination
    }

    /// Load one page of recipes, replacing the current list.
    pub async fn fetch_recipes(&mut self, page: u64, limit: u64) {
        self.loading = true;
        self.error = None;

        match self.api.get_all_recipes(page, limit).await {
            Ok(response) => {
                self.recipes = response.data.unwrap_or_default();
                self.pagination = response.pagination.unwrap_or_default();
            }
            Err(e) => self.record_error(&e, "Failed to fetch recipes"),
        }

        self.loading = false;
    }

    /// Fetch a single recipe. Leaves the loading flag alone.
    pub async fn fetch_recipe_by_id(&mut self, id: &str) -> Option<Recipe> {
        self.error = None;
        let result = self.api.get_recipe_by_id(id).await;
        self.settle(result, "Failed to fetch recipe")
    }

    pub async fn create_recipe(&mut self, draft: &RecipeDraft) -> Option<Recipe> {
        self.loading = true;
        self.error = None;
        let result = self.api.create_recipe(draft).await;
        let created = self.settle(result, "Failed to create recipe");
        self.loading = false;
        created
    }

    pub async fn update_recipe(&mut self, id: &str, draft: &RecipeDraft) -> Option<Recipe> {
        self.loading = true;
        self.error = None;
        let result = self.api.update_recipe(id, draft).await;
        let updated = self.settle(result, "Failed to update recipe");
        self.loading = false;
        updated
    }

    pub async fn delete_recipe(&mut self, id: &str) -> Option<Recipe> {
        self.loading = true;
        self.error = None;
        let result = self.api.delete_recipe(id).await;
        let deleted = self.settle(result, "Failed to delete recipe");
        self.loading = false;
        deleted
    }

    fn settle(
        &mut self,
        result: Result<ApiResponse<Recipe>, ClientError>,
        fallback: &str,
    ) -> Option<Recipe> {
        match result.and_then(|response| {
            response
                .data
                .ok_or(ClientError::UnexpectedResponse(response.message))
        }) {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                self.record_error(&e, fallback);
                None
            }
        }
    }

    fn record_error(&mut self, e: &ClientError, fallback: &str) {
        tracing::warn!(error = %e, "{}", fallback);
        self.error = Some(e.server_message().unwrap_or(fallback).to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use larder_core::domain::{Difficulty, RecipeId};

    fn recipe(id: &str, name: &str) -> Recipe {
        Recipe {
            id: RecipeId::parse(id).unwrap(),
            name: name.to_string(),
            ingredients: vec!["water".to_string()],
            instructions: "boil".to_string(),
            prep_time_minutes: 1.0,
            cook_time_minutes: 5.0,
            servings: 1.0,
            difficulty: Difficulty::Easy,
            cuisine: "Any".to_string(),
            calories_per_serving: 2.0,
            tags: Vec::new(),
            user_id: None,
            image: None,
            rating: 0.0,
            review_count: 0.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    const TEA_ID: &str = "65f1a2b3c4d5e6f708192a3b";

    /// Serves a fixed catalog of one recipe, or fails every call.
    struct FakeApi {
        failure: Option<fn() -> ClientError>,
    }

    impl FakeApi {
        fn healthy() -> Self {
            Self { failure: None }
        }

        fn failing(failure: fn() -> ClientError) -> Self {
            Self {
                failure: Some(failure),
            }
        }

        fn answer<T>(&self, data: T, message: &str) -> Result<ApiResponse<T>, ClientError> {
            match self.failure {
                Some(failure) => Err(failure()),
                None => Ok(ApiResponse::ok(data, message)),
            }
        }
    }

    #[async_trait]
    impl RecipeApi for FakeApi {
        async fn get_all_recipes(
            &self,
            page: u64,
            _limit: u64,
        ) -> Result<ApiResponse<Vec<Recipe>>, ClientError> {
            self.answer(vec![recipe(TEA_ID, "Tea")], "Recipes retrieved successfully")
                .map(|r| {
                    r.with_pagination(PaginationInfo {
                        current_page: page,
                        total_pages: 1,
                        total_recipes: 1,
                        has_next: false,
                        has_prev: page > 1,
                    })
                })
        }

        async fn get_recipe_by_id(&self, id: &str) -> Result<ApiResponse<Recipe>, ClientError> {
            self.answer(recipe(id, "Tea"), "Recipe retrieved successfully")
        }

        async fn create_recipe(
            &self,
            draft: &RecipeDraft,
        ) -> Result<ApiResponse<Recipe>, ClientError> {
            self.answer(recipe(TEA_ID, &draft.name), "Recipe created successfully")
        }

        async fn update_recipe(
            &self,
            id: &str,
            draft: &RecipeDraft,
        ) -> Result<ApiResponse<Recipe>, ClientError> {
            self.answer(recipe(id, &draft.name), "Recipe updated successfully")
        }

        async fn delete_recipe(&self, id: &str) -> Result<ApiResponse<Recipe>, ClientError> {
            self.answer(recipe(id, "Tea"), "Recipe deleted successfully")
        }
    }

    fn not_found() -> ClientError {
        ClientError::Api {
            status: 404,
            message: "Recipe not found".to_string(),
        }
    }

    fn garbled() -> ClientError {
        ClientError::UnexpectedResponse("truncated body".to_string())
    }

    #[tokio::test]
    async fn test_initial_state() {
        let store = RecipeStore::new(FakeApi::healthy());

        assert!(store.recipes().is_empty());
        assert!(!store.loading());
        assert_eq!(store.error(), None);
        assert_eq!(store.pagination(), &PaginationInfo::default());
    }

    #[tokio::test]
    async fn test_fetch_recipes_fills_list_and_pagination() {
        let mut store = RecipeStore::new(FakeApi::healthy());
        store.fetch_recipes(1, 10).await;

        assert_eq!(store.recipes().len(), 1);
        assert_eq!(store.pagination().total_recipes, 1);
        assert!(!store.loading());
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_server_message_is_surfaced() {
        let mut store = RecipeStore::new(FakeApi::failing(not_found));

        assert_eq!(store.fetch_recipe_by_id(TEA_ID).await, None);
        assert_eq!(store.error(), Some("Recipe not found"));
    }

    #[tokio::test]
    async fn test_fallback_message_without_server_message() {
        let mut store = RecipeStore::new(FakeApi::failing(garbled));

        store.fetch_recipes(1, 10).await;
        assert_eq!(store.error(), Some("Failed to fetch recipes"));
        assert!(!store.loading());

        let draft = RecipeDraft::from(&recipe(TEA_ID, "Tea"));
        assert_eq!(store.create_recipe(&draft).await, None);
        assert_eq!(store.error(), Some("Failed to create recipe"));

        assert_eq!(store.update_recipe(TEA_ID, &draft).await, None);
        assert_eq!(store.error(), Some("Failed to update recipe"));

        assert_eq!(store.delete_recipe(TEA_ID).await, None);
        assert_eq!(store.error(), Some("Failed to delete recipe"));
    }

    #[tokio::test]
    async fn test_mutations_return_the_recipe() {
        let mut store = RecipeStore::new(FakeApi::healthy());
        let mut draft = RecipeDraft::from(&recipe(TEA_ID, "Tea"));
        draft.name = "Chai".to_string();

        let created = store.create_recipe(&draft).await.unwrap();
        assert_eq!(created.name, "Chai");

        let updated = store.update_recipe(TEA_ID, &draft).await.unwrap();
        assert_eq!(updated.id.as_str(), TEA_ID);

        let deleted = store.delete_recipe(TEA_ID).await.unwrap();
        assert_eq!(deleted.id.as_str(), TEA_ID);
        assert_eq!(store.error(), None);
    }
}
