//! # Larder Infrastructure
//!
//! Concrete implementations of the ports defined in `larder-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `mongodb` - MongoDB document store support

pub mod database;
pub mod memory;

pub use memory::InMemoryRecipeRepository;

#[cfg(feature = "mongodb")]
pub use database::{DatabaseConfig, DatabaseConnections, MongoRecipeRepository};
