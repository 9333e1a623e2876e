use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Length of a recipe identifier in hex characters (12 bytes).
pub const RECIPE_ID_LEN: usize = 24;

/// Identifier of a stored recipe: 24 hexadecimal characters, kept lowercase.
///
/// An id that does not match this format can never be constructed, so every
/// repository call receives an id the store is able to look up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecipeId(String);

/// Rejected identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid recipe ID format: {0:?}")]
pub struct InvalidRecipeId(pub String);

impl RecipeId {
    /// Parse a raw path segment into an identifier.
    pub fn parse(raw: &str) -> Result<Self, InvalidRecipeId> {
        if raw.len() == RECIPE_ID_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(InvalidRecipeId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RecipeId {
    type Err = InvalidRecipeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RecipeId {
    type Error = InvalidRecipeId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RecipeId> for String {
    fn from(id: RecipeId) -> Self {
        id.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
