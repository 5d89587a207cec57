//! Portfolio builder for fluent construction.

use uuid::Uuid;

use crate::error::{PortfolioError, PortfolioResult};
use crate::portfolio::Portfolio;

/// Builder for constructing a [`Portfolio`].
///
/// # Example
///
/// ```rust
/// use dealflow_portfolio::prelude::*;
///
/// let portfolio = PortfolioBuilder::new()
///     .id("PORT001")
///     .name("Sunbelt Holdings")
///     .build()?;
/// assert!(portfolio.is_empty());
/// # Ok::<(), dealflow_portfolio::PortfolioError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    id: Option<String>,
    name: Option<String>,
}

impl PortfolioBuilder {
    /// Creates a new portfolio builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the portfolio ID. A fresh UUID is generated when not set.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the portfolio name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::MissingField`] when no name was set.
    pub fn build(self) -> PortfolioResult<Portfolio> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| PortfolioError::missing_field("name"))?;
        let id = self.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        Ok(Portfolio::from_parts(id, name))
    }
}
