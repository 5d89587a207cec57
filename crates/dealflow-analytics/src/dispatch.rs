//! Category dispatch for the underwriting calculators.
//!
//! Routes a property category to its calculator family with an exhaustive
//! match, so adding a category is a compile-time checked change rather
//! than a silent fallthrough.

use serde::{Deserialize, Serialize};

use dealflow_core::types::{CalculatorFamily, Figures, PropertyKind};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::flip::{self, FlipMetrics};
use crate::income::{self, IncomeMetrics};
use crate::land::{self, LandMetrics};

/// Computed underwriting metrics for any calculator family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family")]
pub enum Metrics {
    /// Income property metrics (commercial / multifamily).
    Income(IncomeMetrics),
    /// Fix-and-flip metrics.
    Flip(FlipMetrics),
    /// Vacant land metrics.
    Land(LandMetrics),
}

impl Metrics {
    /// Returns the calculator family that produced these metrics.
    #[must_use]
    pub const fn family(&self) -> CalculatorFamily {
        match self {
            Metrics::Income(_) => CalculatorFamily::Income,
            Metrics::Flip(_) => CalculatorFamily::Flip,
            Metrics::Land(_) => CalculatorFamily::Land,
        }
    }
}

/// Computes underwriting metrics for a property.
///
/// Pure and deterministic: identical `(kind, figures)` always produce an
/// identical [`Metrics`] value, and the call has no side effects, so it is
/// safe to invoke concurrently.
///
/// # Errors
///
/// Returns [`AnalyticsError::FigureMismatch`] when the figures' family
/// does not agree with the category (e.g. flip figures for a vacant-land
/// listing). Unknown categories cannot reach this function; they are
/// rejected when the wire tag is parsed into a [`PropertyKind`].
///
/// # Example
///
/// ```rust
/// use dealflow_analytics::{compute_metrics, Metrics};
/// use dealflow_core::types::{Figures, LandFigures, PropertyKind};
/// use rust_decimal_macros::dec;
///
/// let figures = Figures::Land(LandFigures::new(dec!(550_000), dec!(5.5), dec!(950_000)));
/// let metrics = compute_metrics(PropertyKind::VacantLand, &figures)?;
/// match metrics {
///     Metrics::Land(m) => assert_eq!(m.price_per_acre, dec!(100_000)),
///     _ => unreachable!(),
/// }
/// # Ok::<(), dealflow_analytics::AnalyticsError>(())
/// ```
pub fn compute_metrics(kind: PropertyKind, figures: &Figures) -> AnalyticsResult<Metrics> {
    match (kind, figures) {
        (PropertyKind::Commercial | PropertyKind::Multifamily, Figures::Income(f)) => {
            Ok(Metrics::Income(income::compute(f)))
        }
        (PropertyKind::ResidentialFlip, Figures::Flip(f)) => Ok(Metrics::Flip(flip::compute(f))),
        (PropertyKind::VacantLand, Figures::Land(f)) => Ok(Metrics::Land(land::compute(f))),
        (kind, figures) => Err(AnalyticsError::figure_mismatch(kind, figures.family())),
    }
}
