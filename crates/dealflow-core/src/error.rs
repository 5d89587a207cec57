//! Error types for the Dealflow core crate.
//!
//! This module defines the error types raised at the untrusted-input
//! boundary, providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Dealflow core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The submitted category tag is not one of the four marketplace
    /// categories.
    #[error("Unsupported property category: {tag}")]
    UnsupportedCategory {
        /// The tag as it arrived from the form.
        tag: String,
    },

    /// A required form field was absent or blank.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },
}

impl CoreError {
    /// Creates an unsupported-category error.
    #[must_use]
    pub fn unsupported_category(tag: impl Into<String>) -> Self {
        Self::UnsupportedCategory { tag: tag.into() }
    }

    /// Creates a missing-field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
