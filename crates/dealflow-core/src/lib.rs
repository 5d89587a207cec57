//! # Dealflow Core
//!
//! Core types and abstractions for the Dealflow real estate underwriting
//! engine.
//!
//! This crate provides the foundational building blocks used throughout
//! Dealflow:
//!
//! - **Types**: Domain-specific types like [`PropertyKind`],
//!   [`types::Figures`], and the underwriting assumption constants
//! - **Form Boundary**: Tolerant coercion of untrusted wizard input into
//!   typed figures
//! - **Errors**: Structured error handling with context
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: The four marketplace categories are a closed enum, so
//!   dispatching on them is compile-time checked
//! - **Explicit Defaults**: Every defaulted figure has a named
//!   `_or_default` accessor instead of relying on falsy coercion
//! - **Tolerant Boundary**: Raw form input never raises on bad numbers;
//!   unparseable amounts coerce to zero by design
//!
//! ## Example
//!
//! ```rust
//! use dealflow_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let figures = IncomeFigures::new(dec!(2_500_000), dec!(18_500), dec!(75_000));
//! assert_eq!(figures.down_payment_or_default(), dec!(625_000));
//! assert_eq!(PropertyKind::Multifamily.family(), CalculatorFamily::Income);
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
#![allow(clippy::match_same_arms)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod form;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::form::PropertyForm;
    pub use crate::types::{
        CalculatorFamily, Figures, FlipFigures, IncomeFigures, LandFigures, PropertyKind,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CalculatorFamily, Figures, PropertyKind};
