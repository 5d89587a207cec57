//! The untrusted wizard-submission boundary.
//!
//! The onboarding wizard posts every field as free text. This module
//! coerces that text into typed [`Figures`] without ever raising on a bad
//! number: unparseable amounts become zero, and blank defaulted fields
//! stay blank so the domain default is substituted downstream. Callers
//! that want validation must check before building figures.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{CalculatorFamily, Figures, FlipFigures, IncomeFigures, LandFigures, PropertyKind};

/// Coerces raw form text into an amount.
///
/// Missing, blank, or unparseable input yields zero; this is defined
/// behavior, not an accident. Whitespace is trimmed and `$` and thousands
/// separators are stripped before parsing, so `"$2,500,000"` parses.
///
/// # Example
///
/// ```rust
/// use dealflow_core::form::coerce;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(coerce(Some("$2,500,000")), dec!(2500000));
/// assert_eq!(coerce(Some("not a number")), dec!(0));
/// assert_eq!(coerce(None), dec!(0));
/// ```
#[must_use]
pub fn coerce(raw: Option<&str>) -> Decimal {
    coerce_opt(raw).unwrap_or(Decimal::ZERO)
}

/// Coerces raw form text into an optional amount.
///
/// `None` for missing, blank, or unparseable input. Used for the
/// defaulted fields, where every one of those cases substitutes the house
/// assumption (the wizard's historical behavior).
#[must_use]
pub fn coerce_opt(raw: Option<&str>) -> Option<Decimal> {
    let cleaned: String = raw?
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<Decimal>().ok()
}

/// A raw property submission from the onboarding wizard.
///
/// Every numeric field arrives as text exactly as typed. Fields that do
/// not apply to the submitted category are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyForm {
    /// Category wire tag (`"commercial"`, `"multifamily"`,
    /// `"residential-flip"`, `"vacant-land"`).
    pub category: String,
    /// Property name or address line.
    pub name: String,
    /// Purchase price (all categories).
    pub purchase_price: Option<String>,
    /// Monthly rent (income).
    pub monthly_rent: Option<String>,
    /// Annual operating expenses (income).
    pub annual_expenses: Option<String>,
    /// Down payment (income, defaulted).
    pub down_payment: Option<String>,
    /// Interest rate (income, defaulted).
    pub interest_rate: Option<String>,
    /// Loan term in years (income, defaulted).
    pub loan_term: Option<String>,
    /// Rehab budget (flip).
    pub rehab_budget: Option<String>,
    /// Holding costs (flip, defaulted).
    pub holding_costs: Option<String>,
    /// After-repair value (flip).
    pub arv: Option<String>,
    /// Selling costs (flip, defaulted).
    pub selling_costs: Option<String>,
    /// Acreage (land).
    pub acres: Option<String>,
    /// Development costs (land).
    pub development_costs: Option<String>,
    /// Projected value (land).
    pub projected_value: Option<String>,
    /// Holding period in years (land, defaulted).
    pub holding_period: Option<String>,
}

impl PropertyForm {
    /// Parses the category tag and coerces the fields that belong to it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedCategory`] for an unknown tag and
    /// [`CoreError::MissingField`] when the name is blank. Numeric fields
    /// never error; they coerce.
    pub fn into_figures(self) -> CoreResult<(PropertyKind, Figures)> {
        let kind: PropertyKind = self.category.parse()?;
        if self.name.trim().is_empty() {
            return Err(CoreError::missing_field("name"));
        }

        let figures = match kind.family() {
            CalculatorFamily::Income => {
                let mut figures = IncomeFigures::new(
                    coerce(self.purchase_price.as_deref()),
                    coerce(self.monthly_rent.as_deref()),
                    coerce(self.annual_expenses.as_deref()),
                );
                figures.down_payment = coerce_opt(self.down_payment.as_deref());
                figures.interest_rate = coerce_opt(self.interest_rate.as_deref());
                figures.loan_term_years =
                    coerce_opt(self.loan_term.as_deref()).and_then(|d| d.trunc().to_u32());
                Figures::Income(figures)
            }
            CalculatorFamily::Flip => {
                let mut figures = FlipFigures::new(
                    coerce(self.purchase_price.as_deref()),
                    coerce(self.rehab_budget.as_deref()),
                    coerce(self.arv.as_deref()),
                );
                figures.holding_costs = coerce_opt(self.holding_costs.as_deref());
                figures.selling_costs = coerce_opt(self.selling_costs.as_deref());
                Figures::Flip(figures)
            }
            CalculatorFamily::Land => {
                let mut figures = LandFigures::new(
                    coerce(self.purchase_price.as_deref()),
                    coerce(self.acres.as_deref()),
                    coerce(self.projected_value.as_deref()),
                );
                figures.development_costs = coerce(self.development_costs.as_deref());
                figures.holding_period_years = coerce_opt(self.holding_period.as_deref());
                Figures::Land(figures)
            }
        };

        Ok((kind, figures))
    }
}
