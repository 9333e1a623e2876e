//! HTTP access to the recipe endpoints.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use larder_core::domain::Recipe;
use larder_shared::ApiResponse;

use crate::draft::RecipeDraft;
use crate::error::ClientError;

/// Base URL used when `RECIPE_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

/// The recipe API surface, one method per endpoint.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    async fn get_all_recipes(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<ApiResponse<Vec<Recipe>>, ClientError>;

    async fn get_recipe_by_id(&self, id: &str) -> Result<ApiResponse<Recipe>, ClientError>;

    async fn create_recipe(&self, draft: &RecipeDraft) -> Result<ApiResponse<Recipe>, ClientError>;

    async fn update_recipe(
        &self,
        id: &str,
        draft: &RecipeDraft,
    ) -> Result<ApiResponse<Recipe>, ClientError>;

    async fn delete_recipe(&self, id: &str) -> Result<ApiResponse<Recipe>, ClientError>;
}

/// `reqwest`-backed implementation of [`RecipeApi`].
#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecipeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment configuration.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("RECIPE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode the envelope.
    ///
    /// Error statuses still carry an envelope; its `message` becomes the
    /// [`ClientError::Api`] message.
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse<T>, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<ApiResponse<T>>().await?);
        }

        let message = match response.json::<ApiResponse<serde_json::Value>>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };
        tracing::error!(status = status.as_u16(), message = %message, "API error");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn get_all_recipes(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<ApiResponse<Vec<Recipe>>, ClientError> {
        let url = self.url(&format!("/recipes?page={page}&limit={limit}"));
        self.send(self.client.get(url)).await
    }

    async fn get_recipe_by_id(&self, id: &str) -> Result<ApiResponse<Recipe>, ClientError> {
        self.send(self.client.get(self.url(&format!("/recipes/{id}"))))
            .await
    }

    async fn create_recipe(&self, draft: &RecipeDraft) -> Result<ApiResponse<Recipe>, ClientError> {
        self.send(self.client.post(self.url("/recipes")).json(draft))
            .await
    }

    async fn update_recipe(
        &self,
        id: &str,
        draft: &RecipeDraft,
    ) -> Result<ApiResponse<Recipe>, ClientError> {
        self.send(
            self.client
                .put(self.url(&format!("/recipes/{id}")))
                .json(draft),
        )
        .await
    }

    async fn delete_recipe(&self, id: &str) -> Result<ApiResponse<Recipe>, ClientError> {
        self.send(self.client.delete(self.url(&format!("/recipes/{id}"))))
            .await
    }
}
