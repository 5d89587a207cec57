//! # Dealflow Analytics
//!
//! Underwriting calculators for the Dealflow real estate investment
//! marketplace.
//!
//! Three stateless sub-calculators derive standard underwriting metrics
//! from raw investor-entered figures, keyed by property category:
//!
//! - **Income** ([`income`]): NOI, cap rate, cash-on-cash return, DSCR,
//!   gross yield, and 3%-appreciation projections for commercial and
//!   multifamily property
//! - **Flip** ([`flip`]): cost stack, ROI, profit margin, equity gain, and
//!   the 70% rule for residential fix-and-flips
//! - **Land** ([`land`]): per-acre figures, ROI, and simple annualized
//!   return for vacant land
//!
//! The [`dispatch`] module routes a [`PropertyKind`] to its calculator
//! with an exhaustive match, and [`report`] renders the numeric metrics
//! into the display record the dashboard consumes.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every calculation is stateless and deterministic;
//!   identical figures always produce identical metrics
//! - **Exact arithmetic**: all values are `Decimal`, so `NaN` and
//!   `Infinity` are unrepresentable and guarded divisions resolve to an
//!   exact zero
//! - **Numbers first, formatting last**: the metrics structs carry
//!   unrounded numbers; rounding and percent formatting happen only in the
//!   display layer
//!
//! ## Example
//!
//! ```rust
//! use dealflow_analytics::prelude::*;
//! use dealflow_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let figures = Figures::Income(IncomeFigures::new(
//!     dec!(2_500_000),
//!     dec!(18_500),
//!     dec!(75_000),
//! ));
//! let metrics = compute_metrics(PropertyKind::Multifamily, &figures)?;
//! match &metrics {
//!     Metrics::Income(m) => assert_eq!(m.noi, dec!(147_000)),
//!     _ => unreachable!(),
//! }
//! # Ok::<(), dealflow_analytics::AnalyticsError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]

pub mod dispatch;
pub mod error;
pub mod financing;
pub mod flip;
pub mod income;
pub mod land;
pub mod report;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dispatch::{compute_metrics, Metrics};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::flip::FlipMetrics;
    pub use crate::income::IncomeMetrics;
    pub use crate::land::LandMetrics;
    pub use crate::report::display_record;
}

// Re-export commonly used items at crate root
pub use dispatch::{compute_metrics, Metrics};
pub use error::{AnalyticsError, AnalyticsResult};
