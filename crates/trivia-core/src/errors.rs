//! Error types for the pure dashboard layer.
//!
//! Fetch failures are owned by `trivia-client`. The core only fails when a
//! selection trigger cannot be resolved against the loaded data.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// The data needed to resolve a request has not finished loading.
    #[error("{0} not loaded yet")]
    NotLoaded(&'static str),
}
