//! Residential fix-and-flip underwriting.
//!
//! Derives the flip metric set: the full cost stack, gross profit, ROI,
//! profit margin, spread, equity gain, and the 70% rule check.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use dealflow_core::types::{assumptions, FlipFigures};

/// Computed metrics for a fix-and-flip.
///
/// All values are unrounded `Decimal`; `roi` and `profit_margin` are
/// percentages, e.g. `14.00` for 14%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipMetrics {
    /// Purchase price, as entered.
    pub purchase_price: Decimal,
    /// Rehab budget, as entered.
    pub rehab_budget: Decimal,
    /// Holding costs after default substitution.
    pub holding_costs: Decimal,
    /// After-repair value, as entered.
    pub arv: Decimal,
    /// Selling costs after default substitution.
    pub selling_costs: Decimal,
    /// Purchase + rehab + holding.
    pub total_cost: Decimal,
    /// Total cost plus selling costs.
    pub total_investment: Decimal,
    /// ARV less total investment.
    pub gross_profit: Decimal,
    /// Return on investment: gross profit over total cost, as a percentage.
    pub roi: Decimal,
    /// Gross profit over ARV, as a percentage.
    pub profit_margin: Decimal,
    /// ARV less purchase price.
    pub spread: Decimal,
    /// ARV less total cost.
    pub equity_gain: Decimal,
    /// Maximum purchase price under the 70% rule:
    /// `ARV x 0.70 - rehab budget`.
    pub max_purchase_price_70_rule: Decimal,
    /// Whether the purchase price is at or below the 70%-rule ceiling
    /// (inclusive boundary).
    pub seventy_rule_pass: bool,
}

impl FlipMetrics {
    /// Estimated project timeline quoted on flip listings.
    #[must_use]
    pub const fn estimated_timeline(&self) -> &'static str {
        assumptions::FLIP_TIMELINE
    }
}

/// Underwrites a fix-and-flip.
///
/// A zero total cost zeroes ROI and a zero ARV zeroes profit margin. A
/// zero ARV also drives the 70%-rule ceiling to `-rehab_budget`, which
/// trivially fails any positive purchase price; that follows from the
/// formula and is intentionally not special-cased.
#[must_use]
pub fn compute(figures: &FlipFigures) -> FlipMetrics {
    let purchase_price = figures.purchase_price;
    let rehab_budget = figures.rehab_budget;
    let holding_costs = figures.holding_costs_or_default();
    let arv = figures.arv;
    let selling_costs = figures.selling_costs_or_default();

    let total_cost = purchase_price + rehab_budget + holding_costs;
    let total_investment = total_cost + selling_costs;
    let gross_profit = arv - total_investment;

    let roi = if total_cost > Decimal::ZERO {
        gross_profit / total_cost * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let profit_margin = if arv > Decimal::ZERO {
        gross_profit / arv * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let max_purchase_price_70_rule = arv * assumptions::SEVENTY_RULE_RATIO - rehab_budget;

    FlipMetrics {
        purchase_price,
        rehab_budget,
        holding_costs,
        arv,
        selling_costs,
        total_cost,
        total_investment,
        gross_profit,
        roi,
        profit_margin,
        spread: arv - purchase_price,
        equity_gain: arv - total_cost,
        seventy_rule_pass: purchase_price <= max_purchase_price_70_rule,
        max_purchase_price_70_rule,
    }
}
