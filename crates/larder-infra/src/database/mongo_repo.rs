//! MongoDB repository implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use larder_core::domain::{NewRecipe, Recipe, RecipeId, timestamp_now};
use larder_core::error::RepoError;
use larder_core::pagination::{Page, PageRequest};
use larder_core::ports::RecipeRepository;

use super::document::{RecipeDocument, object_id, recipe_id, update_document};

/// Name of the single collection holding recipes.
pub const RECIPES_COLLECTION: &str = "recipes";

/// MongoDB recipe repository.
#[derive(Clone)]
pub struct MongoRecipeRepository {
    collection: Collection<RecipeDocument>,
}

impl MongoRecipeRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(RECIPES_COLLECTION),
        }
    }

    pub fn collection(&self) -> &Collection<RecipeDocument> {
        &self.collection
    }
}

fn map_err(e: MongoError) -> RepoError {
    match *e.kind {
        ErrorKind::ServerSelection { .. } | ErrorKind::ConnectionPoolCleared { .. } => {
            RepoError::Connection(e.to_string())
        }
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            RepoError::Serialization(e.to_string())
        }
        _ => RepoError::Query(e.to_string()),
    }
}

fn into_recipe(document: Option<RecipeDocument>) -> Result<Option<Recipe>, RepoError> {
    document.map(Recipe::try_from).transpose()
}

#[async_trait]
impl RecipeRepository for MongoRecipeRepository {
    async fn create(&self, fields: NewRecipe) -> Result<Recipe, RepoError> {
        let recipe = Recipe::create(recipe_id(ObjectId::new())?, fields, timestamp_now());
        let document = RecipeDocument::try_from(&recipe)?;

        self.collection
            .insert_one(&document)
            .await
            .map_err(map_err)?;

        tracing::debug!(recipe_id = %recipe.id, "Inserted recipe");
        Ok(recipe)
    }

    async fn list(&self, page: PageRequest) -> Result<Page<Recipe>, RepoError> {
        tracing::debug!(page = page.page, limit = page.limit, "Listing recipes");

        let documents: Vec<RecipeDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .skip(page.offset())
            .limit(i64::try_from(page.limit).unwrap_or(i64::MAX))
            .await
            .map_err(map_err)?
            .try_collect()
            .await
            .map_err(map_err)?;

        let total = self
            .collection
            .count_documents(doc! {})
            .await
            .map_err(map_err)?;

        let recipes = documents
            .into_iter()
            .map(Recipe::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(recipes, total, page))
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RepoError> {
        let document = self
            .collection
            .find_one(doc! { "_id": object_id(id)? })
            .await
            .map_err(map_err)?;

        into_recipe(document)
    }

    async fn update_by_id(
        &self,
        id: &RecipeId,
        fields: NewRecipe,
    ) -> Result<Option<Recipe>, RepoError> {
        let document = self
            .collection
            .find_one_and_update(
                doc! { "_id": object_id(id)? },
                doc! { "$set": update_document(fields, timestamp_now()) },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_err)?;

        tracing::debug!(recipe_id = %id, found = document.is_some(), "Updated recipe");
        into_recipe(document)
    }

    async fn delete_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RepoError> {
        let document = self
            .collection
            .find_one_and_delete(doc! { "_id": object_id(id)? })
            .await
            .map_err(map_err)?;

        tracing::debug!(recipe_id = %id, found = document.is_some(), "Deleted recipe");
        into_recipe(document)
    }
}
