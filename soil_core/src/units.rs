//! # Unit Types
//!
//! Closed unit selections and type-safe quantity wrappers.
//!
//! ## Design Philosophy
//!
//! Unit selections are enums rather than free strings, so an invalid unit is
//! unrepresentable instead of silently defaulting. Quantities are simple
//! newtype wrappers around `f64` because:
//! - The calculator works in a small, fixed set of units
//! - JSON serialization stays clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## US Customary Units (Primary)
//!
//! The engine normalizes everything to feet before deriving quantities, as
//! topsoil is sold in US customary units:
//! - Footprint: square feet (sq ft)
//! - Volume: cubic feet (cu ft), cubic yards (cu yd = 27 cu ft)
//! - Weight: short tons
//!
//! ## Example
//!
//! ```rust
//! use soil_core::units::{AreaUnit, CuFt, CuYd};
//!
//! // One cubic yard is 27 cubic feet
//! let volume = CuFt(54.0);
//! let yards: CuYd = volume.into();
//! assert_eq!(yards.0, 2.0);
//!
//! // Square-yard footprints scale by 9 when normalized to square feet
//! assert_eq!(AreaUnit::Yards.sqft_factor(), 9.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Unit Selections
// ============================================================================

/// Unit of the length and width inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    /// Feet (footprint in square feet)
    #[default]
    Feet,
    /// Yards (1 sq yd = 9 sq ft)
    Yards,
    /// Meters (1 sq m = 10.764 sq ft)
    Meters,
}

impl AreaUnit {
    /// All area units, in UI selection order
    pub const ALL: [AreaUnit; 3] = [AreaUnit::Feet, AreaUnit::Yards, AreaUnit::Meters];

    /// Square feet per square unit of this measure
    pub fn sqft_factor(&self) -> f64 {
        match self {
            AreaUnit::Feet => 1.0,
            AreaUnit::Yards => 9.0,
            AreaUnit::Meters => 10.764,
        }
    }

    /// Human-readable name for UI display
    pub fn display_name(&self) -> &'static str {
        match self {
            AreaUnit::Feet => "Feet",
            AreaUnit::Yards => "Yards",
            AreaUnit::Meters => "Meters",
        }
    }
}

impl std::fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Unit of the depth input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DepthUnit {
    /// Inches (1 in = 1/12 ft)
    #[default]
    Inches,
    /// Feet
    Feet,
    /// Yards (1 yd = 3 ft)
    Yards,
}

impl DepthUnit {
    /// All depth units, in UI selection order
    pub const ALL: [DepthUnit; 3] = [DepthUnit::Inches, DepthUnit::Feet, DepthUnit::Yards];

    /// Feet per unit of this measure
    pub fn feet_factor(&self) -> f64 {
        match self {
            DepthUnit::Inches => 1.0 / 12.0,
            DepthUnit::Feet => 1.0,
            DepthUnit::Yards => 3.0,
        }
    }

    /// Human-readable name for UI display
    pub fn display_name(&self) -> &'static str {
        match self {
            DepthUnit::Inches => "Inches",
            DepthUnit::Feet => "Feet",
            DepthUnit::Yards => "Yards",
        }
    }
}

impl std::fmt::Display for DepthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Area Quantities
// ============================================================================

/// Footprint area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

// ============================================================================
// Volume Quantities
// ============================================================================

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuFt(pub f64);

/// Volume in cubic yards (1 cu yd = 27 cu ft)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuYd(pub f64);

impl From<CuFt> for CuYd {
    fn from(cuft: CuFt) -> Self {
        CuYd(cuft.0 / 27.0)
    }
}

impl From<CuYd> for CuFt {
    fn from(cuyd: CuYd) -> Self {
        CuFt(cuyd.0 * 27.0)
    }
}

// ============================================================================
// Weight Quantities
// ============================================================================

/// Weight in short tons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tons(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(SqFt);
impl_arithmetic!(CuFt);
impl_arithmetic!(CuYd);
impl_arithmetic!(Tons);
