//! Income property underwriting (commercial / multifamily).
//!
//! Derives the rental-income metric set: NOI, cap rate, cash flow after
//! debt service, cash-on-cash return, gross yield, DSCR, and fixed-rate
//! appreciation projections at years 5 and 10.
//!
//! # Validation Target
//!
//! Acquisitions worksheet, Riverside Apartments:
//! purchase 2,500,000, rent 18,500/mo, expenses 75,000/yr, house
//! assumptions for financing.
//!
//! | Metric   | Worksheet |
//! |----------|-----------|
//! | NOI      | 147,000   |
//! | Cap Rate | 5.88%     |
//! | DSCR     | 1.03      |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use dealflow_core::types::{assumptions, IncomeFigures};

use crate::financing;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Computed metrics for an income property.
///
/// All values are unrounded `Decimal`; rounding and percent formatting
/// belong to the display layer. Rate-like fields (`cap_rate`,
/// `cash_on_cash`, `gross_yield`) are percentages, e.g. `5.88` for 5.88%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeMetrics {
    /// Purchase price, as entered.
    pub purchase_price: Decimal,
    /// Monthly rent, as entered.
    pub monthly_rent: Decimal,
    /// Gross annual rental income.
    pub annual_income: Decimal,
    /// Annual operating expenses, as entered.
    pub annual_expenses: Decimal,
    /// Down payment after default substitution.
    pub down_payment: Decimal,
    /// Financed amount. Negative when the down payment exceeds the
    /// purchase price; deliberately not clamped.
    pub loan_amount: Decimal,
    /// Annual mortgage debt service.
    pub annual_debt_service: Decimal,
    /// Net operating income: annual income less operating expenses.
    pub noi: Decimal,
    /// Cap rate: NOI over purchase price, as a percentage.
    pub cap_rate: Decimal,
    /// Annual cash flow after debt service.
    pub cash_flow: Decimal,
    /// Monthly cash flow after debt service.
    pub monthly_cash_flow: Decimal,
    /// Cash-on-cash return: cash flow over down payment, as a percentage.
    pub cash_on_cash: Decimal,
    /// Gross yield: annual income over purchase price, as a percentage.
    pub gross_yield: Decimal,
    /// Debt service coverage ratio: NOI over annual debt service.
    pub dscr: Decimal,
    /// Projected value after 5 years of 3% appreciation.
    pub year5_value: Decimal,
    /// Projected value after 10 years of 3% appreciation.
    pub year10_value: Decimal,
    /// Cumulative cash flow plus appreciation through year 5.
    pub total_year5_return: Decimal,
    /// Cumulative cash flow plus appreciation through year 10.
    pub total_year10_return: Decimal,
}

/// Underwrites an income property.
///
/// Every division is guarded: a zero purchase price zeroes the rate
/// metrics, a zero down payment zeroes cash-on-cash, and a loan that
/// never existed (`loan_amount <= 0`) zeroes debt service and DSCR.
#[must_use]
pub fn compute(figures: &IncomeFigures) -> IncomeMetrics {
    let purchase_price = figures.purchase_price;
    let down_payment = figures.down_payment_or_default();
    let loan_amount = purchase_price - down_payment;

    let payment = financing::monthly_payment(
        loan_amount,
        figures.interest_rate_or_default(),
        figures.loan_term_or_default(),
    );
    let annual_debt_service = payment * MONTHS_PER_YEAR;

    let annual_income = figures.monthly_rent * MONTHS_PER_YEAR;
    let noi = annual_income - figures.annual_expenses;
    let cap_rate = if purchase_price > Decimal::ZERO {
        noi / purchase_price * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let cash_flow = noi - annual_debt_service;
    let cash_on_cash = if down_payment > Decimal::ZERO {
        cash_flow / down_payment * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let gross_yield = if purchase_price > Decimal::ZERO {
        annual_income / purchase_price * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let dscr = if annual_debt_service > Decimal::ZERO {
        noi / annual_debt_service
    } else {
        Decimal::ZERO
    };

    let year5_value =
        financing::appreciated_value(purchase_price, assumptions::APPRECIATION_RATE, 5);
    let year10_value =
        financing::appreciated_value(purchase_price, assumptions::APPRECIATION_RATE, 10);

    IncomeMetrics {
        purchase_price,
        monthly_rent: figures.monthly_rent,
        annual_income,
        annual_expenses: figures.annual_expenses,
        down_payment,
        loan_amount,
        annual_debt_service,
        noi,
        cap_rate,
        cash_flow,
        monthly_cash_flow: cash_flow / MONTHS_PER_YEAR,
        cash_on_cash,
        gross_yield,
        dscr,
        year5_value,
        year10_value,
        total_year5_return: cash_flow * dec!(5) + (year5_value - purchase_price),
        total_year10_return: cash_flow * dec!(10) + (year10_value - purchase_price),
    }
}
