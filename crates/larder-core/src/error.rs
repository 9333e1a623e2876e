//! Repository-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// Not-found is not an error here: lookups return `Option` so handlers can
/// answer 404 without inspecting error variants.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Document serialization failed: {0}")]
    Serialization(String),
}
