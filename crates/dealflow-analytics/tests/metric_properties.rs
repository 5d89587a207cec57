//! Property-based tests for calculator invariants.
//!
//! These verify the guarantees the engine makes for arbitrary figures:
//! - Determinism: identical figures, identical metrics
//! - Guarded divisions: a non-positive divisor always yields exactly zero
//! - Default substitution: blank fields take the house assumptions
//! - 70% rule: the pass flag agrees with the inclusive ceiling comparison

use proptest::prelude::*;
use rust_decimal::Decimal;

use dealflow_analytics::{compute_metrics, Metrics};
use dealflow_core::types::{Figures, FlipFigures, IncomeFigures, LandFigures, PropertyKind};

/// An arbitrary dollar amount in cents, up to one billion dollars.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// A small arbitrary acreage in hundredths of an acre.
fn acreage() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

proptest! {
    #[test]
    fn income_metrics_are_deterministic(
        price in amount(),
        rent in amount(),
        expenses in amount(),
    ) {
        let figures = Figures::Income(IncomeFigures::new(price, rent, expenses));
        let first = compute_metrics(PropertyKind::Commercial, &figures).unwrap();
        let second = compute_metrics(PropertyKind::Commercial, &figures).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn zero_price_income_zeroes_every_rate(rent in amount(), expenses in amount()) {
        let figures = Figures::Income(IncomeFigures::new(Decimal::ZERO, rent, expenses));
        match compute_metrics(PropertyKind::Multifamily, &figures).unwrap() {
            Metrics::Income(m) => {
                prop_assert_eq!(m.cap_rate, Decimal::ZERO);
                prop_assert_eq!(m.gross_yield, Decimal::ZERO);
                prop_assert_eq!(m.cash_on_cash, Decimal::ZERO);
                prop_assert_eq!(m.dscr, Decimal::ZERO);
            }
            _ => prop_assert!(false, "expected income metrics"),
        }
    }

    #[test]
    fn income_defaults_substitute_exactly(price in amount()) {
        let figures = IncomeFigures::new(price, Decimal::ZERO, Decimal::ZERO);
        prop_assert_eq!(
            figures.down_payment_or_default(),
            price * Decimal::new(25, 2)
        );
    }

    #[test]
    fn flip_identities_hold(
        price in amount(),
        rehab in amount(),
        arv in amount(),
    ) {
        let figures = FlipFigures::new(price, rehab, arv);
        match compute_metrics(PropertyKind::ResidentialFlip, &Figures::Flip(figures)).unwrap() {
            Metrics::Flip(m) => {
                prop_assert_eq!(m.total_investment, m.total_cost + m.selling_costs);
                prop_assert_eq!(m.gross_profit, m.arv - m.total_investment);
                prop_assert_eq!(m.spread, m.arv - m.purchase_price);
                prop_assert_eq!(
                    m.seventy_rule_pass,
                    m.purchase_price <= m.max_purchase_price_70_rule
                );
                if m.total_cost == Decimal::ZERO {
                    prop_assert_eq!(m.roi, Decimal::ZERO);
                }
            }
            _ => prop_assert!(false, "expected flip metrics"),
        }
    }

    #[test]
    fn land_per_acre_guards_hold(
        price in amount(),
        development in amount(),
        projected in amount(),
        acres in acreage(),
    ) {
        let figures = LandFigures::new(price, acres, projected)
            .with_development_costs(development);
        match compute_metrics(PropertyKind::VacantLand, &Figures::Land(figures)).unwrap() {
            Metrics::Land(m) => {
                if acres == Decimal::ZERO {
                    prop_assert_eq!(m.price_per_acre, Decimal::ZERO);
                    prop_assert_eq!(m.profit_per_acre, Decimal::ZERO);
                } else {
                    prop_assert_eq!(m.price_per_acre, price / acres);
                }
                // Simple annualization over the 3-year default hold.
                prop_assert_eq!(m.annualized_return, m.roi / Decimal::new(3, 0));
            }
            _ => prop_assert!(false, "expected land metrics"),
        }
    }
}
