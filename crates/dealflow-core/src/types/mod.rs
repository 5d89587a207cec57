//! Domain types for real estate underwriting.
//!
//! This module provides type-safe representations of the marketplace
//! domain:
//!
//! - [`PropertyKind`]: The four marketplace property categories
//! - [`CalculatorFamily`]: The three underwriting calculator families
//! - [`Figures`]: Raw user-entered underwriting figures per family
//! - [`assumptions`]: The named underwriting assumption constants

pub mod assumptions;
mod category;
mod figures;

pub use category::{CalculatorFamily, PropertyKind};
pub use figures::{Figures, FlipFigures, IncomeFigures, LandFigures};
