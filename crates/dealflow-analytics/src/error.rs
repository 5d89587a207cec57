//! Error types for the underwriting calculators.

use dealflow_core::types::{CalculatorFamily, PropertyKind};
use thiserror::Error;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors raised by the underwriting dispatcher.
///
/// The calculators themselves are total functions and never error;
/// the only failure mode is handing the dispatcher figures of the wrong
/// shape for the category.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// The figures' family does not match the property category.
    #[error("{got} figures cannot underwrite a {kind} property (expected {expected} figures)")]
    FigureMismatch {
        /// The property category submitted.
        kind: PropertyKind,
        /// The family that category underwrites as.
        expected: CalculatorFamily,
        /// The family of the figures actually supplied.
        got: CalculatorFamily,
    },
}

impl AnalyticsError {
    /// Creates a figure-mismatch error for the given category and figures.
    #[must_use]
    pub fn figure_mismatch(kind: PropertyKind, got: CalculatorFamily) -> Self {
        Self::FigureMismatch {
            kind,
            expected: kind.family(),
            got,
        }
    }
}
