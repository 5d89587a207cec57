//! Display records for the dashboard.
//!
//! The metrics structs carry unrounded numbers; this module is the
//! presentation-formatting step that renders them into the record the UI
//! layer binds to: currency-like metrics rounded to whole dollars,
//! rate-like metrics as two-decimal percent strings, pass-through inputs
//! unrounded, with camelCase keys.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Map, Value};

use crate::dispatch::Metrics;
use crate::flip::FlipMetrics;
use crate::income::IncomeMetrics;
use crate::land::LandMetrics;

/// Rounds a currency amount to whole dollars, half away from zero.
///
/// Saturates at the `i64` range for amounts no property will ever carry.
#[must_use]
pub fn round_currency(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_else(|| {
            if value.is_sign_negative() {
                i64::MIN
            } else {
                i64::MAX
            }
        })
}

/// Formats a rate to exactly two decimal places, half away from zero.
#[must_use]
pub fn two_decimals(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn amount(value: Decimal) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

fn dollars(value: Decimal) -> Value {
    Value::from(round_currency(value))
}

fn rate(value: Decimal) -> Value {
    Value::from(two_decimals(value))
}

/// Renders computed metrics into the dashboard display record.
///
/// Keys and value shapes match what the portfolio cards bind to:
/// unrounded numbers for the entered figures, whole-dollar integers for
/// derived amounts, two-decimal strings for rates, a boolean for the
/// 70%-rule flag, and the timeline label for flips.
///
/// # Example
///
/// ```rust
/// use dealflow_analytics::{compute_metrics, report::display_record};
/// use dealflow_core::types::{Figures, FlipFigures, PropertyKind};
/// use rust_decimal_macros::dec;
///
/// let figures = Figures::Flip(FlipFigures::new(dec!(285_000), dec!(65_000), dec!(450_000)));
/// let metrics = compute_metrics(PropertyKind::ResidentialFlip, &figures)?;
/// let record = display_record(&metrics);
/// assert_eq!(record["roi"], "14.00");
/// assert_eq!(record["grossProfit"], 51_400);
/// # Ok::<(), dealflow_analytics::AnalyticsError>(())
/// ```
#[must_use]
pub fn display_record(metrics: &Metrics) -> Map<String, Value> {
    match metrics {
        Metrics::Income(m) => income_record(m),
        Metrics::Flip(m) => flip_record(m),
        Metrics::Land(m) => land_record(m),
    }
}

fn income_record(m: &IncomeMetrics) -> Map<String, Value> {
    let mut record = Map::new();
    record.insert("purchasePrice".into(), amount(m.purchase_price));
    record.insert("monthlyRent".into(), amount(m.monthly_rent));
    record.insert("annualIncome".into(), amount(m.annual_income));
    record.insert("annualExpenses".into(), amount(m.annual_expenses));
    record.insert("downPayment".into(), amount(m.down_payment));
    record.insert("loanAmount".into(), amount(m.loan_amount));
    record.insert("annualDebtService".into(), amount(m.annual_debt_service));
    record.insert("noi".into(), dollars(m.noi));
    record.insert("capRate".into(), rate(m.cap_rate));
    record.insert("cashFlow".into(), dollars(m.cash_flow));
    record.insert("monthlyCashFlow".into(), dollars(m.monthly_cash_flow));
    record.insert("cashOnCash".into(), rate(m.cash_on_cash));
    record.insert("grossYield".into(), rate(m.gross_yield));
    record.insert("dscr".into(), rate(m.dscr));
    record.insert("year5Value".into(), dollars(m.year5_value));
    record.insert("year10Value".into(), dollars(m.year10_value));
    record.insert("totalYear5Return".into(), dollars(m.total_year5_return));
    record.insert("totalYear10Return".into(), dollars(m.total_year10_return));
    record
}

fn flip_record(m: &FlipMetrics) -> Map<String, Value> {
    let mut record = Map::new();
    record.insert("purchasePrice".into(), amount(m.purchase_price));
    record.insert("rehabBudget".into(), amount(m.rehab_budget));
    record.insert("holdingCosts".into(), amount(m.holding_costs));
    record.insert("arv".into(), amount(m.arv));
    record.insert("sellingCosts".into(), amount(m.selling_costs));
    record.insert("totalCost".into(), dollars(m.total_cost));
    record.insert("totalInvestment".into(), dollars(m.total_investment));
    record.insert("grossProfit".into(), dollars(m.gross_profit));
    record.insert("roi".into(), rate(m.roi));
    record.insert("profitMargin".into(), rate(m.profit_margin));
    record.insert("spread".into(), dollars(m.spread));
    record.insert("equityGain".into(), dollars(m.equity_gain));
    record.insert(
        "maxPurchasePrice70Rule".into(),
        dollars(m.max_purchase_price_70_rule),
    );
    record.insert("seventyRulePass".into(), Value::from(m.seventy_rule_pass));
    record.insert(
        "estimatedTimeline".into(),
        Value::from(m.estimated_timeline()),
    );
    record
}

fn land_record(m: &LandMetrics) -> Map<String, Value> {
    let mut record = Map::new();
    record.insert("purchasePrice".into(), amount(m.purchase_price));
    record.insert("acres".into(), amount(m.acres));
    record.insert("pricePerAcre".into(), dollars(m.price_per_acre));
    record.insert("developmentCosts".into(), amount(m.development_costs));
    record.insert("projectedValue".into(), amount(m.projected_value));
    record.insert(
        "projectedValuePerAcre".into(),
        dollars(m.projected_value_per_acre),
    );
    record.insert("totalInvestment".into(), dollars(m.total_investment));
    record.insert("grossProfit".into(), dollars(m.gross_profit));
    record.insert("profitPerAcre".into(), dollars(m.profit_per_acre));
    record.insert("roi".into(), rate(m.roi));
    record.insert("annualizedReturn".into(), rate(m.annualized_return));
    record.insert("holdingPeriod".into(), amount(m.holding_period_years));
    record
}
