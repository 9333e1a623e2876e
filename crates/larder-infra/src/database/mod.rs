//! Document store connection management and the MongoDB repository.

#[cfg(feature = "mongodb")]
mod connections;
#[cfg(feature = "mongodb")]
mod document;
#[cfg(feature = "mongodb")]
mod mongo_repo;

#[cfg(feature = "mongodb")]
pub use connections::{DatabaseConfig, DatabaseConnections};
#[cfg(feature = "mongodb")]
pub use document::RecipeDocument;
#[cfg(feature = "mongodb")]
pub use mongo_repo::{MongoRecipeRepository, RECIPES_COLLECTION};

#[cfg(feature = "mongodb")]
#[cfg(test)]
mod tests;
