//! Property category and calculator family types.
//!
//! The marketplace offers four property categories. Two of them
//! (commercial and multifamily) underwrite identically as income
//! property, so the categories map onto three calculator families.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The four marketplace property categories.
///
/// Categories are a closed set: dispatching on them is an exhaustive
/// match, and an unknown wire tag is rejected when parsing rather than
/// falling through silently.
///
/// # Example
///
/// ```rust
/// use dealflow_core::types::{CalculatorFamily, PropertyKind};
///
/// let kind: PropertyKind = "residential-flip".parse().unwrap();
/// assert_eq!(kind, PropertyKind::ResidentialFlip);
/// assert_eq!(kind.family(), CalculatorFamily::Flip);
/// assert!("mobile-home-park".parse::<PropertyKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    /// Commercial income property (office, retail, industrial).
    #[serde(rename = "commercial")]
    Commercial,
    /// Multifamily income property (5+ units).
    #[serde(rename = "multifamily")]
    Multifamily,
    /// Residential fix-and-flip.
    #[serde(rename = "residential-flip")]
    ResidentialFlip,
    /// Vacant land held for development or resale.
    #[serde(rename = "vacant-land")]
    VacantLand,
}

impl PropertyKind {
    /// All categories in marketplace display order.
    pub const ALL: [PropertyKind; 4] = [
        PropertyKind::Commercial,
        PropertyKind::Multifamily,
        PropertyKind::ResidentialFlip,
        PropertyKind::VacantLand,
    ];

    /// Returns the kebab-case wire tag.
    ///
    /// This matches the tag stored on marketplace listings and submitted
    /// by the onboarding wizard.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Commercial => "commercial",
            PropertyKind::Multifamily => "multifamily",
            PropertyKind::ResidentialFlip => "residential-flip",
            PropertyKind::VacantLand => "vacant-land",
        }
    }

    /// Returns the human-readable label used by the category picker.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            PropertyKind::Commercial => "Commercial",
            PropertyKind::Multifamily => "Multifamily",
            PropertyKind::ResidentialFlip => "Residential Flip",
            PropertyKind::VacantLand => "Vacant Land",
        }
    }

    /// Returns the calculator family this category underwrites as.
    ///
    /// Commercial and multifamily properties share the income-property
    /// calculator; the other two categories each have their own.
    #[must_use]
    pub const fn family(&self) -> CalculatorFamily {
        match self {
            PropertyKind::Commercial | PropertyKind::Multifamily => CalculatorFamily::Income,
            PropertyKind::ResidentialFlip => CalculatorFamily::Flip,
            PropertyKind::VacantLand => CalculatorFamily::Land,
        }
    }

    /// Returns true if the category produces rental income.
    #[must_use]
    pub const fn is_income_producing(&self) -> bool {
        matches!(self, PropertyKind::Commercial | PropertyKind::Multifamily)
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commercial" => Ok(PropertyKind::Commercial),
            "multifamily" => Ok(PropertyKind::Multifamily),
            "residential-flip" => Ok(PropertyKind::ResidentialFlip),
            "vacant-land" => Ok(PropertyKind::VacantLand),
            other => Err(CoreError::unsupported_category(other)),
        }
    }
}

/// The three underwriting calculator families.
///
/// Every [`PropertyKind`] maps onto exactly one family; the dashboard
/// badges entries with the family label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorFamily {
    /// Rental income underwriting (NOI, cap rate, DSCR).
    Income,
    /// Fix-and-flip underwriting (ROI, 70% rule).
    Flip,
    /// Vacant land underwriting (per-acre figures, annualized return).
    Land,
}

impl CalculatorFamily {
    /// Returns the dashboard badge label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            CalculatorFamily::Income => "INCOME",
            CalculatorFamily::Flip => "FLIP",
            CalculatorFamily::Land => "LAND",
        }
    }
}

impl fmt::Display for CalculatorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
