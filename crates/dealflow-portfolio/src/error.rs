//! Error types for portfolio operations.

use thiserror::Error;
use uuid::Uuid;

use dealflow_analytics::AnalyticsError;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// No entry with the given id.
    #[error("No portfolio entry with id {id}")]
    EntryNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// Underwriting failed for the submitted figures.
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
}

impl PortfolioError {
    /// Creates a missing-field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an entry-not-found error.
    #[must_use]
    pub fn entry_not_found(id: Uuid) -> Self {
        Self::EntryNotFound { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_includes_id() {
        let id = Uuid::new_v4();
        let err = PortfolioError::entry_not_found(id);
        assert!(err.to_string().contains(&id.to_string()));
    }
}
