//! Portfolio entry with metrics computed at creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dealflow_analytics::{compute_metrics, Metrics};
use dealflow_core::types::{CalculatorFamily, Figures, PropertyKind};

use crate::error::PortfolioResult;

/// A property in the portfolio.
///
/// Entries are created once and never mutated: the metrics always
/// describe the figures the entry was created with. Changing a property's
/// figures means creating a replacement entry (new id, new timestamp);
/// see [`crate::Portfolio::revise_property`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    id: Uuid,
    name: String,
    kind: PropertyKind,
    figures: Figures,
    metrics: Metrics,
    date_added: DateTime<Utc>,
}

impl PortfolioEntry {
    /// Creates an entry, computing its metrics from the figures.
    ///
    /// # Errors
    ///
    /// Returns an analytics error when the figures' family does not match
    /// the category.
    pub fn new(
        name: impl Into<String>,
        kind: PropertyKind,
        figures: Figures,
        added_at: DateTime<Utc>,
    ) -> PortfolioResult<Self> {
        let metrics = compute_metrics(kind, &figures)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            figures,
            metrics,
            date_added: added_at,
        })
    }

    /// The entry's unique id.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The property name as submitted.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The property category.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// The calculator family the entry underwrites as.
    #[must_use]
    pub const fn family(&self) -> CalculatorFamily {
        self.kind.family()
    }

    /// The figures the entry was created with.
    #[must_use]
    pub const fn figures(&self) -> &Figures {
        &self.figures
    }

    /// The metrics computed at creation.
    #[must_use]
    pub const fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// When the entry was added.
    #[must_use]
    pub const fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }

    /// Builds the replacement entry for revised figures.
    ///
    /// Same name and category; fresh id, metrics, and timestamp.
    pub(crate) fn revised(
        &self,
        figures: Figures,
        revised_at: DateTime<Utc>,
    ) -> PortfolioResult<Self> {
        Self::new(self.name.clone(), self.kind, figures, revised_at)
    }
}
