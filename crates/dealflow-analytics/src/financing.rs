//! Financing math shared by the calculators.
//!
//! Pure helpers for amortizing-loan payments and compound appreciation.
//! Both are total: out-of-domain inputs resolve to a defined value rather
//! than erroring, matching the tolerant posture of the whole engine.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Monthly payment on a fully amortizing loan.
///
/// Standard annuity formula with a monthly rate of `annual_rate / 12` and
/// `term_years * 12` level payments:
///
/// ```text
/// payment = L * r * (1 + r)^n / ((1 + r)^n - 1)
/// ```
///
/// A non-positive loan amount or a zero term yields zero (nothing is
/// borrowed, or nothing amortizes). A non-positive rate degenerates to
/// straight-line principal repayment, where the annuity formula would
/// divide by zero.
///
/// # Example
///
/// ```rust
/// use dealflow_analytics::financing::monthly_payment;
/// use rust_decimal_macros::dec;
///
/// let payment = monthly_payment(dec!(1_875_000), dec!(0.065), 30);
/// assert_eq!(payment.round_dp(2), dec!(11851.28));
/// ```
#[must_use]
pub fn monthly_payment(loan_amount: Decimal, annual_rate: Decimal, term_years: u32) -> Decimal {
    if loan_amount <= Decimal::ZERO || term_years == 0 {
        return Decimal::ZERO;
    }
    let payments = i64::from(term_years) * 12;
    if annual_rate <= Decimal::ZERO {
        return loan_amount / Decimal::from(payments);
    }
    let monthly_rate = annual_rate / MONTHS_PER_YEAR;
    let growth = (Decimal::ONE + monthly_rate).powi(payments);
    loan_amount * monthly_rate * growth / (growth - Decimal::ONE)
}

/// Value of `base` after compounding at `annual_rate` for `years`.
#[must_use]
pub fn appreciated_value(base: Decimal, annual_rate: Decimal, years: u32) -> Decimal {
    base * (Decimal::ONE + annual_rate).powi(i64::from(years))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_year_payment() {
        // 1.875M at 6.5% over 30 years.
        let payment = monthly_payment(dec!(1_875_000), dec!(0.065), 30);
        assert_eq!(payment.round_dp(2), dec!(11851.28));
    }

    #[test]
    fn test_nothing_borrowed_is_zero() {
        assert_eq!(monthly_payment(Decimal::ZERO, dec!(0.065), 30), Decimal::ZERO);
        assert_eq!(
            monthly_payment(dec!(-100_000), dec!(0.065), 30),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_zero_term_is_zero() {
        assert_eq!(monthly_payment(dec!(500_000), dec!(0.065), 0), Decimal::ZERO);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = monthly_payment(dec!(360_000), Decimal::ZERO, 30);
        assert_eq!(payment, dec!(1_000));
    }

    #[test]
    fn test_appreciation_compounds() {
        let value = appreciated_value(dec!(2_500_000), dec!(0.03), 5);
        assert_eq!(value.round_dp(2), dec!(2898185.19));
        // Zero years leaves the base untouched.
        assert_eq!(
            appreciated_value(dec!(2_500_000), dec!(0.03), 0),
            dec!(2_500_000)
        );
    }
}
