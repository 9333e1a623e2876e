use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::RecipeId;

/// How demanding a recipe is to cook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Exact, case-sensitive match against the closed set.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == raw)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recipe entity - a stored catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "_id", alias = "id")]
    pub id: RecipeId,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated, normalized recipe fields as accepted on create and update.
///
/// Only [`crate::validate_recipe`] produces these from untrusted input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub prep_time_minutes: f64,
    pub cook_time_minutes: f64,
    pub servings: f64,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub calories_per_serving: f64,
    pub tags: Vec<String>,
    pub user_id: Option<String>,
    pub image: Option<String>,
    pub rating: f64,
}

impl Recipe {
    /// Build a freshly created recipe with both timestamps set to `now`.
    pub fn create(id: RecipeId, fields: NewRecipe, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            ingredients: fields.ingredients,
            instructions: fields.instructions,
            prep_time_minutes: fields.prep_time_minutes,
            cook_time_minutes: fields.cook_time_minutes,
            servings: fields.servings,
            difficulty: fields.difficulty,
            cuisine: fields.cuisine,
            calories_per_serving: fields.calories_per_serving,
            tags: fields.tags,
            user_id: fields.user_id,
            image: fields.image,
            rating: fields.rating,
            review_count: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every client-controlled field.
    ///
    /// `id`, `created_at` and `review_count` are kept; an absent `user_id`
    /// leaves the current owner in place.
    pub fn replace_fields(&mut self, fields: NewRecipe, now: DateTime<Utc>) {
        self.name = fields.name;
        self.ingredients = fields.ingredients;
        self.instructions = fields.instructions;
        self.prep_time_minutes = fields.prep_time_minutes;
        self.cook_time_minutes = fields.cook_time_minutes;
        self.servings = fields.servings;
        self.difficulty = fields.difficulty;
        self.cuisine = fields.cuisine;
        self.calories_per_serving = fields.calories_per_serving;
        self.tags = fields.tags;
        if fields.user_id.is_some() {
            self.user_id = fields.user_id;
        }
        self.image = fields.image;
        self.rating = fields.rating;
        self.updated_at = now;
    }
}

/// Current time truncated to the millisecond precision the document store keeps.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> NewRecipe {
        NewRecipe {
            name: "Tea".to_string(),
            ingredients: vec!["water".to_string(), "tea leaf".to_string()],
            instructions: "boil".to_string(),
            prep_time_minutes: 1.0,
            cook_time_minutes: 5.0,
            servings: 1.0,
            difficulty: Difficulty::Easy,
            cuisine: "Any".to_string(),
            calories_per_serving: 2.0,
            tags: Vec::new(),
            user_id: Some("user-1".to_string()),
            image: None,
            rating: 0.0,
        }
    }

    fn id() -> RecipeId {
        RecipeId::parse("65f1a2b3c4d5e6f708192a3b").unwrap()
    }

    #[test]
    fn test_create_sets_server_managed_fields() {
        let now = timestamp_now();
        let recipe = Recipe::create(id(), tea(), now);

        assert_eq!(recipe.review_count, 0.0);
        assert_eq!(recipe.created_at, now);
        assert_eq!(recipe.updated_at, now);
    }

    #[test]
    fn test_replace_keeps_identity_and_owner() {
        let created = timestamp_now();
        let mut recipe = Recipe::create(id(), tea(), created);
        recipe.review_count = 7.0;

        let mut fields = tea();
        fields.name = "Green Tea".to_string();
        fields.user_id = None;
        fields.rating = 5.0;
        let later = created + chrono::Duration::seconds(30);
        recipe.replace_fields(fields, later);

        assert_eq!(recipe.name, "Green Tea");
        assert_eq!(recipe.rating, 5.0);
        assert_eq!(recipe.user_id.as_deref(), Some("user-1"));
        assert_eq!(recipe.review_count, 7.0);
        assert_eq!(recipe.created_at, created);
        assert_eq!(recipe.updated_at, later);
    }

    #[test]
    fn test_wire_shape() {
        let recipe = Recipe::create(id(), tea(), timestamp_now());
        let json = serde_json::to_value(&recipe).unwrap();

        assert_eq!(json["_id"], "65f1a2b3c4d5e6f708192a3b");
        assert_eq!(json["prepTimeMinutes"], 1.0);
        assert_eq!(json["difficulty"], "Easy");
        assert_eq!(json["tags"], serde_json::json!([]));
        assert_eq!(json["image"], serde_json::Value::Null);
        assert_eq!(json["rating"], 0.0);
        assert_eq!(json["reviewCount"], 0.0);
        assert!(json.get("createdAt").is_some());

        let back: Recipe = serde_json::from_value(json).unwrap();
        assert_eq!(back, recipe);
    }

    #[test]
    fn test_difficulty_parse_is_exact() {
        assert_eq!(Difficulty::parse("Medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("medium"), None);
        assert_eq!(Difficulty::parse("Extreme"), None);
    }
}
