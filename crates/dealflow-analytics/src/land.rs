//! Vacant land underwriting.
//!
//! Derives per-acre figures, ROI on total investment, and a simple
//! (non-compounded) annualized return over the holding period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use dealflow_core::types::LandFigures;

/// Computed metrics for a vacant land parcel.
///
/// All values are unrounded `Decimal`; `roi` and `annualized_return` are
/// percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandMetrics {
    /// Purchase price, as entered.
    pub purchase_price: Decimal,
    /// Parcel size in acres, as entered.
    pub acres: Decimal,
    /// Purchase price per acre.
    pub price_per_acre: Decimal,
    /// Development costs, as entered.
    pub development_costs: Decimal,
    /// Projected value at disposition, as entered.
    pub projected_value: Decimal,
    /// Projected value per acre.
    pub projected_value_per_acre: Decimal,
    /// Purchase price plus development costs.
    pub total_investment: Decimal,
    /// Projected value less total investment.
    pub gross_profit: Decimal,
    /// Gross profit per acre.
    pub profit_per_acre: Decimal,
    /// Return on investment: gross profit over total investment, as a
    /// percentage.
    pub roi: Decimal,
    /// ROI divided by the holding period in years (simple, not
    /// compounded).
    pub annualized_return: Decimal,
    /// Holding period in years after default substitution.
    pub holding_period_years: Decimal,
}

/// Underwrites a vacant land parcel.
///
/// Per-acre figures are guarded on a positive acreage, ROI on a positive
/// total investment, and the annualized return on a positive holding
/// period; each resolves to zero otherwise.
#[must_use]
pub fn compute(figures: &LandFigures) -> LandMetrics {
    let purchase_price = figures.purchase_price;
    let acres = figures.acres;
    let holding_period_years = figures.holding_period_or_default();

    let per_acre = |amount: Decimal| {
        if acres > Decimal::ZERO {
            amount / acres
        } else {
            Decimal::ZERO
        }
    };

    let total_investment = purchase_price + figures.development_costs;
    let gross_profit = figures.projected_value - total_investment;

    let roi = if total_investment > Decimal::ZERO {
        gross_profit / total_investment * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let annualized_return = if holding_period_years > Decimal::ZERO {
        roi / holding_period_years
    } else {
        Decimal::ZERO
    };

    LandMetrics {
        purchase_price,
        acres,
        price_per_acre: per_acre(purchase_price),
        development_costs: figures.development_costs,
        projected_value: figures.projected_value,
        projected_value_per_acre: per_acre(figures.projected_value),
        total_investment,
        gross_profit,
        profit_per_acre: per_acre(gross_profit),
        roi,
        annualized_return,
        holding_period_years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn mesa_parcel() -> LandFigures {
        LandFigures::new(dec!(550_000), dec!(5.5), dec!(950_000))
    }

    #[test]
    fn test_mesa_parcel_worksheet() {
        let m = compute(&mesa_parcel());
        assert_eq!(m.price_per_acre, dec!(100_000));
        assert_eq!(m.total_investment, dec!(550_000));
        assert_eq!(m.gross_profit, dec!(400_000));
        assert_eq!(m.roi.round_dp(2), dec!(72.73));
        assert_eq!(m.annualized_return.round_dp(2), dec!(24.24));
        assert_eq!(m.profit_per_acre.round_dp(0), dec!(72_727));
        assert_eq!(m.projected_value_per_acre.round_dp(0), dec!(172_727));
    }

    #[test]
    fn test_development_costs_reduce_profit() {
        let figures = mesa_parcel().with_development_costs(dec!(150_000));
        let m = compute(&figures);
        assert_eq!(m.total_investment, dec!(700_000));
        assert_eq!(m.gross_profit, dec!(250_000));
        assert_eq!(m.roi.round_dp(2), dec!(35.71));
    }

    #[test]
    fn test_zero_acreage_zeroes_per_acre_figures() {
        let m = compute(&LandFigures::new(dec!(80_000), Decimal::ZERO, dec!(120_000)));
        assert_eq!(m.price_per_acre, Decimal::ZERO);
        assert_eq!(m.profit_per_acre, Decimal::ZERO);
        assert_eq!(m.projected_value_per_acre, Decimal::ZERO);
        // ROI is unaffected by acreage.
        assert_eq!(m.roi, dec!(50));
    }

    #[test]
    fn test_free_parcel_zeroes_roi() {
        let m = compute(&LandFigures::new(Decimal::ZERO, dec!(2), dec!(60_000)));
        assert_eq!(m.total_investment, Decimal::ZERO);
        assert_eq!(m.roi, Decimal::ZERO);
        assert_eq!(m.annualized_return, Decimal::ZERO);
        assert_eq!(m.gross_profit, dec!(60_000));
    }

    #[test]
    fn test_zero_holding_period_zeroes_annualized() {
        let figures = mesa_parcel().with_holding_period(Decimal::ZERO);
        let m = compute(&figures);
        assert!(m.roi > Decimal::ZERO);
        assert_eq!(m.annualized_return, Decimal::ZERO);
    }

    #[test]
    fn test_simple_not_compounded() {
        // Annualized return is a straight division of ROI by years.
        let m = compute(&mesa_parcel().with_holding_period(dec!(5)));
        assert_eq!(m.annualized_return, m.roi / dec!(5));
    }
}
