//! Raw underwriting figures as entered by the investor.
//!
//! Figures hold what the wizard collected, before any derivation. Amounts
//! are [`Decimal`] so the calculators stay exact and deterministic. Fields
//! the product substitutes a house assumption for are `Option` with an
//! explicit `_or_default` accessor; a `None` means "investor left it
//! blank".

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::assumptions;
use super::category::CalculatorFamily;

/// Figures for an income property (commercial or multifamily).
///
/// # Example
///
/// ```rust
/// use dealflow_core::types::IncomeFigures;
/// use rust_decimal_macros::dec;
///
/// let figures = IncomeFigures::new(dec!(2_500_000), dec!(18_500), dec!(75_000));
/// assert_eq!(figures.down_payment_or_default(), dec!(625_000));
/// assert_eq!(figures.interest_rate_or_default(), dec!(0.065));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeFigures {
    /// Purchase price.
    pub purchase_price: Decimal,
    /// Gross monthly rent across all units.
    pub monthly_rent: Decimal,
    /// Annual operating expenses (taxes, insurance, maintenance, management).
    pub annual_expenses: Decimal,
    /// Cash down payment. Blank substitutes 25% of purchase price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_payment: Option<Decimal>,
    /// Annual mortgage interest rate as a decimal. Blank substitutes 6.5%.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
    /// Loan term in whole years. Blank substitutes 30.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_term_years: Option<u32>,
}

impl IncomeFigures {
    /// Creates income figures with the defaulted fields left blank.
    #[must_use]
    pub const fn new(purchase_price: Decimal, monthly_rent: Decimal, annual_expenses: Decimal) -> Self {
        Self {
            purchase_price,
            monthly_rent,
            annual_expenses,
            down_payment: None,
            interest_rate: None,
            loan_term_years: None,
        }
    }

    /// Sets an explicit down payment.
    #[must_use]
    pub const fn with_down_payment(mut self, down_payment: Decimal) -> Self {
        self.down_payment = Some(down_payment);
        self
    }

    /// Sets an explicit interest rate (decimal, e.g. `0.065` for 6.5%).
    #[must_use]
    pub const fn with_interest_rate(mut self, rate: Decimal) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    /// Sets an explicit loan term in years.
    #[must_use]
    pub const fn with_loan_term(mut self, years: u32) -> Self {
        self.loan_term_years = Some(years);
        self
    }

    /// Down payment, substituting 25% of purchase price when blank.
    #[must_use]
    pub fn down_payment_or_default(&self) -> Decimal {
        self.down_payment
            .unwrap_or(self.purchase_price * assumptions::DOWN_PAYMENT_RATIO)
    }

    /// Interest rate, substituting 6.5% when blank.
    #[must_use]
    pub fn interest_rate_or_default(&self) -> Decimal {
        self.interest_rate.unwrap_or(assumptions::INTEREST_RATE)
    }

    /// Loan term in years, substituting 30 when blank.
    #[must_use]
    pub fn loan_term_or_default(&self) -> u32 {
        self.loan_term_years.unwrap_or(assumptions::LOAN_TERM_YEARS)
    }
}

/// Figures for a residential fix-and-flip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipFigures {
    /// Purchase price.
    pub purchase_price: Decimal,
    /// Renovation budget.
    pub rehab_budget: Decimal,
    /// Carrying costs over the hold. Blank substitutes six months at 1% of
    /// purchase price per month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holding_costs: Option<Decimal>,
    /// After-repair value: projected resale price once renovated.
    pub arv: Decimal,
    /// Agent commissions and closing costs at resale. Blank substitutes 7%
    /// of ARV.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_costs: Option<Decimal>,
}

impl FlipFigures {
    /// Creates flip figures with the defaulted fields left blank.
    #[must_use]
    pub const fn new(purchase_price: Decimal, rehab_budget: Decimal, arv: Decimal) -> Self {
        Self {
            purchase_price,
            rehab_budget,
            holding_costs: None,
            arv,
            selling_costs: None,
        }
    }

    /// Sets explicit holding costs.
    #[must_use]
    pub const fn with_holding_costs(mut self, holding_costs: Decimal) -> Self {
        self.holding_costs = Some(holding_costs);
        self
    }

    /// Sets explicit selling costs.
    #[must_use]
    pub const fn with_selling_costs(mut self, selling_costs: Decimal) -> Self {
        self.selling_costs = Some(selling_costs);
        self
    }

    /// Holding costs, substituting six months of carry at 1% of purchase
    /// price per month when blank.
    #[must_use]
    pub fn holding_costs_or_default(&self) -> Decimal {
        self.holding_costs.unwrap_or(
            self.purchase_price * assumptions::MONTHLY_CARRY_RATE * assumptions::FLIP_HOLD_MONTHS,
        )
    }

    /// Selling costs, substituting 7% of ARV when blank.
    #[must_use]
    pub fn selling_costs_or_default(&self) -> Decimal {
        self.selling_costs
            .unwrap_or(self.arv * assumptions::SELLING_COST_RATIO)
    }
}

/// Figures for vacant land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandFigures {
    /// Purchase price.
    pub purchase_price: Decimal,
    /// Parcel size in acres.
    pub acres: Decimal,
    /// Planned development spend (clearing, utilities, entitlement).
    pub development_costs: Decimal,
    /// Projected value at disposition.
    pub projected_value: Decimal,
    /// Intended hold in years. Blank substitutes 3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holding_period_years: Option<Decimal>,
}

impl LandFigures {
    /// Creates land figures with no development spend and a blank hold.
    #[must_use]
    pub const fn new(purchase_price: Decimal, acres: Decimal, projected_value: Decimal) -> Self {
        Self {
            purchase_price,
            acres,
            development_costs: Decimal::ZERO,
            projected_value,
            holding_period_years: None,
        }
    }

    /// Sets the development spend.
    #[must_use]
    pub const fn with_development_costs(mut self, development_costs: Decimal) -> Self {
        self.development_costs = development_costs;
        self
    }

    /// Sets an explicit holding period in years.
    #[must_use]
    pub const fn with_holding_period(mut self, years: Decimal) -> Self {
        self.holding_period_years = Some(years);
        self
    }

    /// Holding period, substituting 3 years when blank.
    #[must_use]
    pub fn holding_period_or_default(&self) -> Decimal {
        self.holding_period_years
            .unwrap_or(assumptions::LAND_HOLD_YEARS)
    }
}

/// Underwriting figures for any of the three calculator families.
///
/// This is the payload the dispatcher consumes together with a
/// [`super::PropertyKind`]; the variant must agree with the category's
/// family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family")]
pub enum Figures {
    /// Income property figures (commercial / multifamily).
    Income(IncomeFigures),
    /// Fix-and-flip figures.
    Flip(FlipFigures),
    /// Vacant land figures.
    Land(LandFigures),
}

impl Figures {
    /// Returns the calculator family these figures belong to.
    #[must_use]
    pub const fn family(&self) -> CalculatorFamily {
        match self {
            Figures::Income(_) => CalculatorFamily::Income,
            Figures::Flip(_) => CalculatorFamily::Flip,
            Figures::Land(_) => CalculatorFamily::Land,
        }
    }

    /// Returns the purchase price common to every family.
    #[must_use]
    pub const fn purchase_price(&self) -> Decimal {
        match self {
            Figures::Income(f) => f.purchase_price,
            Figures::Flip(f) => f.purchase_price,
            Figures::Land(f) => f.purchase_price,
        }
    }
}

impl From<IncomeFigures> for Figures {
    fn from(figures: IncomeFigures) -> Self {
        Figures::Income(figures)
    }
}

impl From<FlipFigures> for Figures {
    fn from(figures: FlipFigures) -> Self {
        Figures::Flip(figures)
    }
}

impl From<LandFigures> for Figures {
    fn from(figures: LandFigures) -> Self {
        Figures::Land(figures)
    }
}
