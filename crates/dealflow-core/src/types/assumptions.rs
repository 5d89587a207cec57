//! Underwriting assumption constants.
//!
//! These are the house assumptions substituted when the investor leaves an
//! optional figure blank, plus the fixed rates the calculators apply. They
//! mirror the figures the acquisitions team quotes on the wizard's helper
//! text, so changing one here changes the product's stated assumption.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default down payment as a fraction of purchase price (25%).
pub const DOWN_PAYMENT_RATIO: Decimal = dec!(0.25);

/// Default annual mortgage interest rate (6.5%).
pub const INTEREST_RATE: Decimal = dec!(0.065);

/// Default loan term in years.
pub const LOAN_TERM_YEARS: u32 = 30;

/// Monthly carrying cost for a flip, as a fraction of purchase price (1%).
pub const MONTHLY_CARRY_RATE: Decimal = dec!(0.01);

/// Assumed months a flip is held before resale.
pub const FLIP_HOLD_MONTHS: Decimal = dec!(6);

/// Default selling costs as a fraction of after-repair value (7%).
pub const SELLING_COST_RATIO: Decimal = dec!(0.07);

/// Default holding period for vacant land, in years.
pub const LAND_HOLD_YEARS: Decimal = dec!(3);

/// Assumed annual appreciation rate for income property (3%).
pub const APPRECIATION_RATE: Decimal = dec!(0.03);

/// The 70% rule ratio: maximum purchase price as a fraction of ARV.
pub const SEVENTY_RULE_RATIO: Decimal = dec!(0.70);

/// Estimated timeline quoted for a residential flip.
pub const FLIP_TIMELINE: &str = "6-8 months";
