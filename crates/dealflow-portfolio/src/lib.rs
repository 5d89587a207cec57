//! # Dealflow Portfolio
//!
//! Portfolio collection for the Dealflow underwriting engine.
//!
//! A portfolio owns immutable [`PortfolioEntry`] records: the figures an
//! investor submitted, the metrics computed from them at submission time,
//! and a timestamp. Metrics are never recalculated in place; revising a
//! property's figures produces a replacement entry with a fresh id and
//! timestamp.
//!
//! ## Design Philosophy
//!
//! - **Entries are immutable**: an entry's metrics always describe the
//!   figures it was created with
//! - **Clock-free core**: timestamps are injected by the caller, so the
//!   collection itself stays deterministic and testable
//! - **Aggregation is derived**: dashboard summaries are computed from
//!   the entries on demand, never stored
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use dealflow_core::types::{Figures, LandFigures, PropertyKind};
//! use dealflow_portfolio::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let mut portfolio = Portfolio::builder("Sunbelt Holdings").build()?;
//! let figures = Figures::Land(LandFigures::new(dec!(550_000), dec!(5.5), dec!(950_000)));
//! let entry = portfolio.add_property(
//!     "Mesa Verde Parcel",
//!     PropertyKind::VacantLand,
//!     figures,
//!     Utc::now(),
//! )?;
//! assert_eq!(entry.kind(), PropertyKind::VacantLand);
//! # Ok::<(), dealflow_portfolio::PortfolioError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod portfolio;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::portfolio::{Portfolio, PortfolioBuilder};
    pub use crate::types::{PortfolioEntry, PortfolioSummary};
}

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use portfolio::{Portfolio, PortfolioBuilder};
pub use types::{PortfolioEntry, PortfolioSummary};
