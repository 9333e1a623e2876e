//! Outbound recipe form data.

use serde::{Deserialize, Serialize};

use larder_core::domain::{Difficulty, Recipe};

/// Recipe fields as submitted from a form.
///
/// Empty tags and unset rating or image are left out of the request body so
/// the server fills in its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub prep_time_minutes: f64,
    pub cook_time_minutes: f64,
    pub servings: f64,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub calories_per_serving: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Pre-populate an edit form from a stored recipe.
impl From<&Recipe> for RecipeDraft {
    fn from(recipe: &Recipe) -> Self {
        Self {
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
            rating: (recipe.rating > 0.0).then_some(recipe.rating),
        }
    }
}
