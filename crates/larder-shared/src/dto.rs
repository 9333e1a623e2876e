//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Query string of `GET /recipes`.
///
/// Values stay raw strings so that garbage falls back to defaults instead of
/// failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListQuery {
    /// Collect from decoded query pairs. Each key is read on its own and the
    /// first occurrence of a repeated key wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        pairs
            .into_iter()
            .fold(Self::default(), |mut query, (key, value)| {
                match key.as_str() {
                    "page" if query.page.is_none() => query.page = Some(value),
                    "limit" if query.limit.is_none() => query.limit = Some(value),
                    _ => {}
                }
                query
            })
    }
}
