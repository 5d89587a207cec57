//! Portfolio struct and core methods.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dealflow_core::types::{Figures, PropertyKind};

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{PortfolioEntry, PortfolioSummary};

/// An investor's property portfolio.
///
/// Owns the immutable computed entries. Mutation is add / revise /
/// remove; an entry's figures and metrics never change in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Unique identifier for the portfolio.
    pub id: String,

    /// Portfolio name.
    pub name: String,

    /// Property entries, in the order they were added.
    entries: Vec<PortfolioEntry>,
}

impl Portfolio {
    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> super::PortfolioBuilder {
        super::PortfolioBuilder::new().name(name)
    }

    pub(crate) fn from_parts(id: String, name: String) -> Self {
        Self {
            id,
            name,
            entries: Vec::new(),
        }
    }

    /// Underwrites a property and adds it to the portfolio.
    ///
    /// Metrics are computed once, here; the resulting entry is immutable.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::MissingField`] for a blank name and an
    /// analytics error when the figures' family does not match the
    /// category.
    pub fn add_property(
        &mut self,
        name: impl Into<String>,
        kind: PropertyKind,
        figures: Figures,
        added_at: DateTime<Utc>,
    ) -> PortfolioResult<&PortfolioEntry> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PortfolioError::missing_field("name"));
        }
        let entry = PortfolioEntry::new(name, kind, figures, added_at)?;
        debug!(
            "portfolio {}: added {} entry {} ({})",
            self.id,
            entry.family(),
            entry.id(),
            entry.name()
        );
        let index = self.entries.len();
        self.entries.push(entry);
        Ok(&self.entries[index])
    }

    /// Replaces an entry with one recomputed from revised figures.
    ///
    /// The replacement keeps the entry's name and category but gets a
    /// fresh id, metrics, and timestamp; the original entry is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::EntryNotFound`] for an unknown id and an
    /// analytics error when the revised figures' family does not match
    /// the entry's category.
    pub fn revise_property(
        &mut self,
        id: Uuid,
        figures: Figures,
        revised_at: DateTime<Utc>,
    ) -> PortfolioResult<&PortfolioEntry> {
        let position = self
            .entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or(PortfolioError::EntryNotFound { id })?;
        let replacement = self.entries[position].revised(figures, revised_at)?;
        debug!(
            "portfolio {}: revised entry {} -> {}",
            self.id,
            id,
            replacement.id()
        );
        self.entries[position] = replacement;
        Ok(&self.entries[position])
    }

    /// Removes an entry, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::EntryNotFound`] for an unknown id.
    pub fn remove_property(&mut self, id: Uuid) -> PortfolioResult<PortfolioEntry> {
        let position = self
            .entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or(PortfolioError::EntryNotFound { id })?;
        debug!("portfolio {}: removed entry {}", self.id, id);
        Ok(self.entries.remove(position))
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn entry(&self, id: Uuid) -> Option<&PortfolioEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// All entries, in the order they were added.
    #[must_use]
    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the portfolio has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Computes the dashboard summary.
    #[must_use]
    pub fn summary(&self) -> PortfolioSummary {
        PortfolioSummary::from_entries(&self.entries)
    }
}
