//! The response envelope returned by every endpoint.

use serde::{Deserialize, Serialize};

/// Uniform `{success, message, data?, error?, pagination?}` wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationInfo>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
            pagination: None,
        }
    }

    pub fn with_pagination(mut self, pagination: PaginationInfo) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

impl ApiResponse<()> {
    /// A failure with no payload.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: None,
            pagination: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_recipes: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_recipes: 0,
            has_next: false,
            has_prev: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_omits_empty_fields() {
        let body = serde_json::to_value(ApiResponse::failure("Route not found")).unwrap();
        assert_eq!(body, json!({"success": false, "message": "Route not found"}));
    }

    #[test]
    fn test_pagination_block_is_camel_case() {
        let body = serde_json::to_value(
            ApiResponse::ok(vec![1, 2], "ok").with_pagination(PaginationInfo {
                current_page: 1,
                total_pages: 3,
                total_recipes: 25,
                has_next: true,
                has_prev: false,
            }),
        )
        .unwrap();

        assert_eq!(body["pagination"]["totalPages"], 3);
        assert_eq!(body["pagination"]["totalRecipes"], 25);
        assert_eq!(body["pagination"]["hasNext"], true);
        assert_eq!(body["data"], json!([1, 2]));
    }

    #[test]
    fn test_error_envelope_decodes_without_data() {
        let body = json!({"success": false, "message": "Validation error", "error": "\"name\" is required"});
        let decoded: ApiResponse<Vec<u8>> = serde_json::from_value(body).unwrap();

        assert!(!decoded.success);
        assert_eq!(decoded.data, None);
        assert_eq!(decoded.error.as_deref(), Some("\"name\" is required"));
    }
}
