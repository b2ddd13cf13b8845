//! Error types surfaced by unit creation and scenario loading.
//!
//! Nothing here is retried internally: a failed spawn aborts that attempt
//! and the error travels up to whoever drives the controller.

use thiserror::Error;

use crate::enums::UnitCategory;

/// Failure to instantiate a unit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpawnError {
    /// The catalog has no prototype entity under the lookup key.
    #[error("resource unavailable: {key} (catalog entry: {entry})")]
    ResourceUnavailable {
        /// `category/name` lookup key.
        key: String,
        /// Debug rendering of the raw catalog entry, or `none`.
        entry: String,
    },
    /// Unknown category, or a name absent from the constructor registry.
    #[error("invalid unit specification for {category}: {data}")]
    InvalidUnitSpecification { category: String, data: String },
}

impl SpawnError {
    pub fn resource_unavailable(category: UnitCategory, name: &str, entry: String) -> Self {
        SpawnError::ResourceUnavailable {
            key: format!("{category}/{name}"),
            entry,
        }
    }

    pub fn invalid_specification(category: UnitCategory, data: impl Into<String>) -> Self {
        SpawnError::InvalidUnitSpecification {
            category: category.to_string(),
            data: data.into(),
        }
    }
}

/// Failure to load or validate authored scenario data.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario: {0}")]
    Json(#[from] serde_json::Error),
    /// A fragment's path cannot be driven (empty, or starts with a pause).
    #[error("wave {wave} fragment {fragment}: {reason}")]
    InvalidPath {
        wave: usize,
        fragment: usize,
        reason: String,
    },
}
