//! In-memory recipe repository - used when no document store is configured.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use larder_core::domain::{NewRecipe, Recipe, RecipeId, timestamp_now};
use larder_core::error::RepoError;
use larder_core::pagination::{Page, PageRequest};
use larder_core::ports::RecipeRepository;

/// In-memory repository using a Vec behind an async RwLock.
///
/// Recipes are kept in insertion order, so newest-first is a reverse walk.
/// Note: Data is lost on process restart.
pub struct InMemoryRecipeRepository {
    store: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }

    /// Generate an id in the document store's format: a 4-byte timestamp
    /// followed by 8 random bytes, hex encoded.
    fn next_id() -> Result<RecipeId, RepoError> {
        let seconds = Utc::now().timestamp() as u32;
        let random = Uuid::new_v4().simple().to_string();
        RecipeId::parse(&format!("{seconds:08x}{}", &random[..16]))
            .map_err(|e| RepoError::Query(e.to_string()))
    }
}

impl Default for InMemoryRecipeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn create(&self, fields: NewRecipe) -> Result<Recipe, RepoError> {
        let recipe = Recipe::create(Self::next_id()?, fields, timestamp_now());

        let mut store = self.store.write().await;
        store.push(recipe.clone());

        Ok(recipe)
    }

    async fn list(&self, page: PageRequest) -> Result<Page<Recipe>, RepoError> {
        let store = self.store.read().await;

        let items = store
            .iter()
            .rev()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(Page::new(items, store.len() as u64, page))
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|r| &r.id == id).cloned())
    }

    async fn update_by_id(
        &self,
        id: &RecipeId,
        fields: NewRecipe,
    ) -> Result<Option<Recipe>, RepoError> {
        let mut store = self.store.write().await;

        Ok(store.iter_mut().find(|r| &r.id == id).map(|recipe| {
            recipe.replace_fields(fields, timestamp_now());
            recipe.clone()
        }))
    }

    async fn delete_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RepoError> {
        let mut store = self.store.write().await;

        Ok(store
            .iter()
            .position(|r| &r.id == id)
            .map(|index| store.remove(index)))
    }
}
