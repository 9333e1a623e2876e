//! Application state - shared across all handlers.

use std::sync::Arc;

use larder_core::ports::RecipeRepository;
use larder_infra::InMemoryRecipeRepository;

#[cfg(feature = "mongodb")]
use anyhow::Context;
#[cfg(feature = "mongodb")]
use larder_infra::database::{DatabaseConnections, MongoRecipeRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<dyn RecipeRepository>,
}

impl AppState {
    pub fn new(recipes: Arc<dyn RecipeRepository>) -> Self {
        Self { recipes }
    }

    /// Build the application state with the configured repository.
    ///
    /// A configured store that cannot be reached is a startup error; without
    /// one the server runs on the in-memory repository.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        #[cfg(feature = "mongodb")]
        let recipes: Arc<dyn RecipeRepository> = match &config.database {
            Some(db_config) => {
                let connections = DatabaseConnections::init(db_config)
                    .await
                    .context("Failed to connect to MongoDB")?;
                Arc::new(MongoRecipeRepository::new(&connections.main))
            }
            None => {
                tracing::warn!("MONGO_URI not set. Running without database (in-memory mode).");
                Arc::new(InMemoryRecipeRepository::new())
            }
        };

        #[cfg(not(feature = "mongodb"))]
        let recipes: Arc<dyn RecipeRepository> = {
            let _ = config;
            tracing::info!("Running without mongodb feature - using in-memory repository");
            Arc::new(InMemoryRecipeRepository::new())
        };

        tracing::info!("Application state initialized");

        Ok(Self::new(recipes))
    }
}
