//! # Larder Core
//!
//! The domain layer of the recipe catalog.
//! This crate contains the recipe schema, its validator and the repository
//! port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod validation;

pub use error::RepoError;
pub use pagination::{Page, PageRequest};
pub use validation::{ValidationError, validate_recipe};
