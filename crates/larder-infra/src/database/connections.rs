use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

/// Database used when neither the configuration nor the URI names one.
pub const DEFAULT_DATABASE: &str = "recipeapp";

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Overrides the database named in the URI.
    pub database: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub server_selection_timeout: Duration,
    pub connect_timeout: Duration,
    pub app_name: Option<String>,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: None,
            max_pool_size: 100,
            min_pool_size: 0,
            server_selection_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(10),
            app_name: None,
        }
    }
}

/// Pooled connection to the document store.
///
/// The database handle shares the driver's connection pool and is cheap to
/// clone; handlers reach it through the repository.
#[derive(Clone)]
pub struct DatabaseConnections {
    /// Database holding the recipe collection.
    pub main: Database,
}

impl DatabaseConnections {
    /// Connect and ping the server so a bad URI fails at startup, not on the
    /// first request.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        tracing::info!("Initializing document store connection...");

        let mut options = ClientOptions::parse(&config.url).await?;
        options.max_pool_size = Some(config.max_pool_size);
        options.min_pool_size = Some(config.min_pool_size);
        options.server_selection_timeout = Some(config.server_selection_timeout);
        options.connect_timeout = Some(config.connect_timeout);
        if config.app_name.is_some() {
            options.app_name = config.app_name.clone();
        }

        let database = config
            .database
            .clone()
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let hosts: Vec<String> = options.hosts.iter().map(ToString::to_string).collect();

        let client = Client::with_options(options)?;
        let main = client.database(&database);
        main.run_command(doc! { "ping": 1 }).await?;

        tracing::info!(
            hosts = ?hosts,
            database = %database,
            "Document store connected (pool: {})",
            config.max_pool_size
        );

        Ok(Self { main })
    }
}
