//! # Larder Client
//!
//! Client-side access to the recipe catalog API: a thin HTTP wrapper
//! ([`HttpRecipeApi`]) and a store ([`RecipeStore`]) that keeps the fetched
//! recipes, pagination, loading flag and last error for a UI to render.

pub mod api;
pub mod draft;
pub mod error;
pub mod store;

pub use api::{HttpRecipeApi, RecipeApi};
pub use draft::RecipeDraft;
pub use error::ClientError;
pub use store::RecipeStore;
