//! Domain entities - the core business objects.

mod id;
mod recipe;

pub use id::{InvalidRecipeId, RecipeId};
pub use recipe::{Difficulty, NewRecipe, Recipe, timestamp_now};
