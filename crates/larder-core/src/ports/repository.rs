use async_trait::async_trait;

use crate::domain::{NewRecipe, Recipe, RecipeId};
use crate::error::RepoError;
use crate::pagination::{Page, PageRequest};

/// Recipe persistence.
///
/// Every call targets at most one document; there are no transactions and the
/// last write wins.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Insert a recipe and return it with its generated id and timestamps.
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, RepoError>;

    /// Fetch one page, newest first, together with the total count.
    async fn list(&self, page: PageRequest) -> Result<Page<Recipe>, RepoError>;

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RepoError>;

    /// Replace the client-controlled fields; `None` when no such recipe exists.
    async fn update_by_id(
        &self,
        id: &RecipeId,
        recipe: NewRecipe,
    ) -> Result<Option<Recipe>, RepoError>;

    /// Remove a recipe and return what was removed.
    async fn delete_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RepoError>;
}
