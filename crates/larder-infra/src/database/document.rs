//! Stored shape of a recipe.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{DateTime as BsonDateTime, Document, doc};
use serde::{Deserialize, Serialize};

use larder_core::RepoError;
use larder_core::domain::{Difficulty, NewRecipe, Recipe, RecipeId};

/// A recipe as kept in the `recipes` collection.
///
/// Field names match the wire names; fields written by other tools (such as
/// a `__v` version key) are ignored on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub prep_time_minutes: f64,
    pub cook_time_minutes: f64,
    pub servings: f64,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub calories_per_serving: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: f64,
    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}

/// `$set` body for a whole-document update of the client-controlled fields.
///
/// `userId` is only written when present so an update without it keeps the
/// stored owner.
pub fn update_document(fields: NewRecipe, now: DateTime<Utc>) -> Document {
    let mut set = doc! {
        "name": fields.name,
        "ingredients": fields.ingredients,
        "instructions": fields.instructions,
        "prepTimeMinutes": fields.prep_time_minutes,
        "cookTimeMinutes": fields.cook_time_minutes,
        "servings": fields.servings,
        "difficulty": fields.difficulty.as_str(),
        "cuisine": fields.cuisine,
        "caloriesPerServing": fields.calories_per_serving,
        "tags": fields.tags,
        "image": fields.image,
        "rating": fields.rating,
        "updatedAt": to_bson_datetime(now),
    };
    if let Some(user_id) = fields.user_id {
        set.insert("userId", user_id);
    }
    set
}

pub(crate) fn object_id(id: &RecipeId) -> Result<ObjectId, RepoError> {
    ObjectId::parse_str(id.as_str()).map_err(|e| RepoError::Serialization(e.to_string()))
}

pub(crate) fn recipe_id(oid: ObjectId) -> Result<RecipeId, RepoError> {
    RecipeId::parse(&oid.to_hex()).map_err(|e| RepoError::Serialization(e.to_string()))
}

fn to_bson_datetime(ts: DateTime<Utc>) -> BsonDateTime {
    BsonDateTime::from_millis(ts.timestamp_millis())
}

fn to_chrono(ts: BsonDateTime) -> Result<DateTime<Utc>, RepoError> {
    DateTime::from_timestamp_millis(ts.timestamp_millis()).ok_or_else(|| {
        RepoError::Serialization(format!("timestamp out of range: {}", ts.timestamp_millis()))
    })
}

/// Conversion from domain Recipe to the stored document.
impl TryFrom<&Recipe> for RecipeDocument {
    type Error = RepoError;

    fn try_from(recipe: &Recipe) -> Result<Self, Self::Error> {
        Ok(Self {
            id: object_id(&recipe.id)?,
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            prep_time_minutes: recipe.prep_time_minutes,
            cook_time_minutes: recipe.cook_time_minutes,
            servings: recipe.servings,
            difficulty: recipe.difficulty,
            cuisine: recipe.cuisine.clone(),
            calories_per_serving: recipe.calories_per_serving,
            tags: recipe.tags.clone(),
            user_id: recipe.user_id.clone(),
            image: recipe.image.clone(),
            rating: recipe.rating,
            review_count: recipe.review_count,
            created_at: to_bson_datetime(recipe.created_at),
            updated_at: to_bson_datetime(recipe.updated_at),
        })
    }
}

/// Conversion from the stored document to domain Recipe.
impl TryFrom<RecipeDocument> for Recipe {
    type Error = RepoError;

    fn try_from(document: RecipeDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: recipe_id(document.id)?,
            name: document.name,
            ingredients: document.ingredients,
            instructions: document.instructions,
            prep_time_minutes: document.prep_time_minutes,
            cook_time_minutes: document.cook_time_minutes,
            servings: document.servings,
            difficulty: document.difficulty,
            cuisine: document.cuisine,
            calories_per_serving: document.calories_per_serving,
            tags: document.tags,
            user_id: document.user_id,
            image: document.image,
            rating: document.rating,
            review_count: document.review_count,
            created_at: to_chrono(document.created_at)?,
            updated_at: to_chrono(document.updated_at)?,
        })
    }
}
