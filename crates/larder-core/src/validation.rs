//! Recipe payload validation.
//!
//! The validator is the only way to turn untrusted input into a [`NewRecipe`].
//! Fields are checked in schema order and the first failure is reported.
//! Unknown fields are dropped.

use serde_json::{Map, Value};
use url::Url;

use crate::domain::{Difficulty, NewRecipe};

pub const NAME_MAX_CHARS: usize = 100;
pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 5.0;

/// The first offending field and why it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{field}\" {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    fn required(field: &str) -> Self {
        Self::new(field, "is required")
    }
}

type Result<T> = std::result::Result<T, ValidationError>;

/// Validate and normalize a create/update payload.
///
/// The same full-document rules apply to both operations. Defaults are filled
/// in for `tags`, `image` and `rating` when the client leaves them out.
pub fn validate_recipe(input: &Value) -> Result<NewRecipe> {
    let fields = input
        .as_object()
        .map(Fields)
        .ok_or_else(|| ValidationError::new("value", "must be of type object"))?;

    let name = fields.required_text("name", true)?;
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(ValidationError::new(
            "name",
            format!("length must be less than or equal to {NAME_MAX_CHARS} characters long"),
        ));
    }

    let ingredients = fields
        .text_list("ingredients")?
        .ok_or_else(|| ValidationError::required("ingredients"))?;
    if ingredients.is_empty() {
        return Err(ValidationError::new(
            "ingredients",
            "must contain at least 1 items",
        ));
    }

    let instructions = fields.required_text("instructions", false)?;
    let prep_time_minutes = fields.required_count("prepTimeMinutes")?;
    let cook_time_minutes = fields.required_count("cookTimeMinutes")?;
    let servings = fields.required_count("servings")?;
    let difficulty = fields.difficulty("difficulty")?;
    let cuisine = fields.required_text("cuisine", true)?;
    let calories_per_serving = fields.required_count("caloriesPerServing")?;
    let tags = fields.text_list("tags")?.unwrap_or_default();
    let user_id = fields.optional_text("userId")?;
    let image = fields.image("image")?;
    let rating = fields.rating("rating")?;

    Ok(NewRecipe {
        name,
        ingredients,
        instructions,
        prep_time_minutes,
        cook_time_minutes,
        servings,
        difficulty,
        cuisine,
        calories_per_serving,
        tags,
        user_id,
        image,
        rating,
    })
}

struct Fields<'a>(&'a Map<String, Value>);

impl Fields<'_> {
    fn required_text(&self, key: &str, trim: bool) -> Result<String> {
        match self.0.get(key) {
            None => Err(ValidationError::required(key)),
            Some(Value::String(s)) => {
                let s = if trim { s.trim() } else { s.as_str() };
                if s.is_empty() {
                    Err(ValidationError::new(key, "is not allowed to be empty"))
                } else {
                    Ok(s.to_string())
                }
            }
            Some(_) => Err(ValidationError::new(key, "must be a string")),
        }
    }

    fn optional_text(&self, key: &str) -> Result<Option<String>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(_) => self.required_text(key, false).map(Some),
        }
    }

    fn text_list(&self, key: &str) -> Result<Option<Vec<String>>> {
        let items = match self.0.get(key) {
            None => return Ok(None),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(ValidationError::new(key, "must be an array")),
        };

        items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) if s.is_empty() => Err(ValidationError::new(
                    format!("{key}[{i}]"),
                    "is not allowed to be empty",
                )),
                Value::String(s) => Ok(s.clone()),
                _ => Err(ValidationError::new(
                    format!("{key}[{i}]"),
                    "must be a string",
                )),
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    /// Numbers may arrive as JSON numbers or numeric strings.
    fn number(&self, key: &str) -> Result<Option<f64>> {
        let parsed = match self.0.get(key) {
            None => return Ok(None),
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
        };

        match parsed {
            Some(n) if n.is_finite() => Ok(Some(n)),
            _ => Err(ValidationError::new(key, "must be a number")),
        }
    }

    /// Any finite number from 1 up; fractions are allowed.
    fn required_count(&self, key: &str) -> Result<f64> {
        let n = self
            .number(key)?
            .ok_or_else(|| ValidationError::required(key))?;

        if n < 1.0 {
            Err(ValidationError::new(
                key,
                "must be greater than or equal to 1",
            ))
        } else {
            Ok(n)
        }
    }

    fn difficulty(&self, key: &str) -> Result<Difficulty> {
        match self.0.get(key) {
            None => Err(ValidationError::required(key)),
            Some(value) => value.as_str().and_then(Difficulty::parse).ok_or_else(|| {
                let allowed: Vec<&str> = Difficulty::ALL.iter().map(Difficulty::as_str).collect();
                ValidationError::new(key, format!("must be one of [{}]", allowed.join(", ")))
            }),
        }
    }

    fn image(&self, key: &str) -> Result<Option<String>> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.is_empty() => {
                Err(ValidationError::new(key, "is not allowed to be empty"))
            }
            Some(Value::String(s)) => match Url::parse(s) {
                Ok(_) => Ok(Some(s.clone())),
                Err(_) => Err(ValidationError::new(key, "must be a valid uri")),
            },
            Some(_) => Err(ValidationError::new(key, "must be a string")),
        }
    }

    fn rating(&self, key: &str) -> Result<f64> {
        let rating = self.number(key)?.unwrap_or(RATING_MIN);

        if rating < RATING_MIN {
            Err(ValidationError::new(
                key,
                format!("must be greater than or equal to {RATING_MIN}"),
            ))
        } else if rating > RATING_MAX {
            Err(ValidationError::new(
                key,
                format!("must be less than or equal to {RATING_MAX}"),
            ))
        } else {
            Ok(rating)
        }
    }
}
