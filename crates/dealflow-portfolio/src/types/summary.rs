//! Derived dashboard aggregates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use dealflow_analytics::Metrics;
use dealflow_core::types::PropertyKind;

use super::PortfolioEntry;

/// Aggregates the dashboard header shows for a portfolio.
///
/// Computed on demand from the entries; never stored. Income entries
/// contribute their annual cash flow, flips and land their projected
/// gross profit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Number of entries.
    pub entry_count: usize,
    /// Entries per category, in marketplace display order.
    pub counts_by_kind: Vec<(PropertyKind, usize)>,
    /// Sum of purchase prices across all entries.
    pub total_purchase_price: Decimal,
    /// Sum of annual cash flow across income entries.
    pub total_annual_cash_flow: Decimal,
    /// Sum of projected gross profit across flip and land entries.
    pub total_projected_profit: Decimal,
}

impl PortfolioSummary {
    /// Computes the summary for a set of entries.
    #[must_use]
    pub fn from_entries(entries: &[PortfolioEntry]) -> Self {
        let counts_by_kind = PropertyKind::ALL
            .iter()
            .map(|kind| {
                let count = entries.iter().filter(|e| e.kind() == *kind).count();
                (*kind, count)
            })
            .collect();

        let mut total_purchase_price = Decimal::ZERO;
        let mut total_annual_cash_flow = Decimal::ZERO;
        let mut total_projected_profit = Decimal::ZERO;
        for entry in entries {
            total_purchase_price += entry.figures().purchase_price();
            match entry.metrics() {
                Metrics::Income(m) => total_annual_cash_flow += m.cash_flow,
                Metrics::Flip(m) => total_projected_profit += m.gross_profit,
                Metrics::Land(m) => total_projected_profit += m.gross_profit,
            }
        }

        Self {
            entry_count: entries.len(),
            counts_by_kind,
            total_purchase_price,
            total_annual_cash_flow,
            total_projected_profit,
        }
    }

    /// Number of entries in the given category.
    #[must_use]
    pub fn count_for(&self, kind: PropertyKind) -> usize {
        self.counts_by_kind
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, count)| *count)
    }
}
