//! # Topsoil Calculation
//!
//! Converts a rectangular footprint and a fill depth into bulk topsoil
//! quantities: volume in cubic yards, retail bag count, and estimated weight.
//!
//! Dimensions arrive as the raw strings a form collects. Validation is
//! ordered and stops at the first failure: missing fields, then unparseable
//! numbers, then non-positive values. Fields are checked in length, width,
//! depth order at every step.
//!
//! ## Example
//!
//! ```rust
//! use soil_core::calculations::topsoil::{calculate, TopsoilInput};
//! use soil_core::units::{AreaUnit, DepthUnit};
//!
//! let input = TopsoilInput {
//!     length: "3".to_string(),
//!     width: "3".to_string(),
//!     depth: "1".to_string(),
//!     area_unit: AreaUnit::Yards,
//!     depth_unit: DepthUnit::Feet,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.volume_cubic_yards, 3.0);
//! assert_eq!(result.bag_count, 162);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult, Dimension};
use crate::material::MaterialProfile;
use crate::units::{AreaUnit, CuFt, CuYd, DepthUnit, SqFt};

/// Raw input for a topsoil calculation, as collected from a form.
///
/// The three dimensions are kept as strings; `Default` is the cleared form
/// state (empty dimensions, feet/inches).
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": "10",
///   "width": "10",
///   "depth": "3",
///   "area_unit": "feet",
///   "depth_unit": "inches"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopsoilInput {
    /// Footprint length, in `area_unit`
    pub length: String,

    /// Footprint width, in `area_unit`
    pub width: String,

    /// Fill depth, in `depth_unit`
    pub depth: String,

    /// Unit of length and width
    pub area_unit: AreaUnit,

    /// Unit of depth
    pub depth_unit: DepthUnit,
}

impl TopsoilInput {
    /// Validate and parse the dimension fields.
    ///
    /// Applied in order, first failure wins:
    /// 1. `MissingField` if any dimension is empty (whitespace counts as empty)
    /// 2. `NotANumber` if any dimension fails to parse as a float
    /// 3. `NonPositive` if any dimension is zero, negative, or not finite
    pub fn validate(&self) -> CalcResult<Dimensions> {
        let fields = [
            (Dimension::Length, self.length.as_str()),
            (Dimension::Width, self.width.as_str()),
            (Dimension::Depth, self.depth.as_str()),
        ];

        for (dim, raw) in fields {
            if raw.trim().is_empty() {
                return Err(CalcError::missing_field(dim));
            }
        }

        let mut parsed = [0.0_f64; 3];
        for (i, (dim, raw)) in fields.iter().enumerate() {
            let value: f64 = raw
                .trim()
                .parse()
                .map_err(|_| CalcError::not_a_number(*dim, *raw))?;
            // f64::from_str accepts "NaN"; report it like any other non-number
            if value.is_nan() {
                return Err(CalcError::not_a_number(*dim, *raw));
            }
            parsed[i] = value;
        }

        for (i, (dim, _)) in fields.iter().enumerate() {
            if !parsed[i].is_finite() || parsed[i] <= 0.0 {
                return Err(CalcError::non_positive(*dim, parsed[i]));
            }
        }

        Ok(Dimensions {
            length: parsed[0],
            width: parsed[1],
            depth: parsed[2],
        })
    }
}

/// Validated, positive dimensions in the input's units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub depth: f64,
}

impl Dimensions {
    /// Footprint area normalized to square feet
    pub fn footprint_sqft(&self, unit: AreaUnit) -> SqFt {
        SqFt(self.length * self.width * unit.sqft_factor())
    }

    /// Depth normalized to feet
    pub fn depth_ft(&self, unit: DepthUnit) -> f64 {
        self.depth * unit.feet_factor()
    }
}

/// Derived topsoil quantities.
///
/// ## JSON Example
///
/// ```json
/// {
///   "volume_cubic_yards": 0.93,
///   "bag_count": 50,
///   "weight_tons": 1.3
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TopsoilResult {
    /// Volume in cubic yards, rounded to 2 decimal places
    pub volume_cubic_yards: f64,

    /// Whole retail bags needed (0.5 cu ft each), rounded up
    pub bag_count: u64,

    /// Estimated weight in short tons, rounded to 2 decimal places
    pub weight_tons: f64,
}

/// Round to 2 decimal places for display quantities
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calculate topsoil quantities for a rectangular bed.
///
/// Pure and deterministic: the input is only read, and the function returns
/// exactly one of a result or a validation error.
///
/// # Arguments
///
/// * `input` - Raw dimensions and unit selections
///
/// # Returns
///
/// * `Ok(TopsoilResult)` - Derived quantities
/// * `Err(CalcError)` - First validation failure
pub fn calculate(input: &TopsoilInput) -> CalcResult<TopsoilResult> {
    let dims = input.validate()?;

    let footprint = dims.footprint_sqft(input.area_unit);
    let volume_cuft = CuFt(footprint.0 * dims.depth_ft(input.depth_unit));
    let volume_cuyd: CuYd = volume_cuft.into();

    let topsoil = MaterialProfile::topsoil();

    // Weight is derived from the unrounded volume, then rounded for display
    Ok(TopsoilResult {
        volume_cubic_yards: round2(volume_cuyd.0),
        bag_count: topsoil.bags(volume_cuft),
        weight_tons: round2(topsoil.weight(volume_cuyd).0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(length: &str, width: &str, depth: &str) -> TopsoilInput {
        TopsoilInput {
            length: length.to_string(),
            width: width.to_string(),
            depth: depth.to_string(),
            ..TopsoilInput::default()
        }
    }

    #[test]
    fn test_garden_bed_in_feet_and_inches() {
        // 10 ft x 10 ft footprint, 3 in deep:
        // 100 sq ft * 0.25 ft = 25 cu ft
        let result = calculate(&input("10", "10", "3")).unwrap();
        assert_eq!(result.volume_cubic_yards, 0.93);
        assert_eq!(result.bag_count, 50);
        assert_eq!(result.weight_tons, 1.30);
    }

    #[test]
    fn test_yard_footprint_with_foot_depth() {
        // 3 yd x 3 yd = 81 sq ft, 1 ft deep = 81 cu ft = 3 cu yd
        let mut topsoil = input("3", "3", "1");
        topsoil.area_unit = AreaUnit::Yards;
        topsoil.depth_unit = DepthUnit::Feet;

        let result = calculate(&topsoil).unwrap();
        assert_eq!(result.volume_cubic_yards, 3.0);
        assert_eq!(result.bag_count, 162);
        assert_eq!(result.weight_tons, 4.2);
    }

    #[test]
    fn test_metric_footprint() {
        // 1 m x 1 m = 10.764 sq ft, 1 ft deep
        let mut topsoil = input("1", "1", "1");
        topsoil.area_unit = AreaUnit::Meters;
        topsoil.depth_unit = DepthUnit::Feet;

        let result = calculate(&topsoil).unwrap();
        assert_eq!(result.volume_cubic_yards, round2(10.764 / 27.0));
        assert_eq!(result.bag_count, 22); // ceil(10.764 / 0.5)
    }

    #[test]
    fn test_all_feet_identity() {
        // With feet everywhere, volume is just l*w*d / 27
        let mut topsoil = input("6", "4.5", "2");
        topsoil.depth_unit = DepthUnit::Feet;

        let result = calculate(&topsoil).unwrap();
        assert_eq!(result.volume_cubic_yards, round2(6.0 * 4.5 * 2.0 / 27.0));
    }

    #[test]
    fn test_yard_depth() {
        // 9 sq ft footprint, 1 yd deep = 27 cu ft = 1 cu yd
        let mut topsoil = input("3", "3", "1");
        topsoil.depth_unit = DepthUnit::Yards;

        let result = calculate(&topsoil).unwrap();
        assert_eq!(result.volume_cubic_yards, 1.0);
        assert_eq!(result.bag_count, 54);
        assert_eq!(result.weight_tons, 1.4);
    }

    #[test]
    fn test_missing_field() {
        let err = calculate(&input("", "10", "3")).unwrap_err();
        assert_eq!(err, CalcError::missing_field(Dimension::Length));

        // Whitespace counts as empty
        let err = calculate(&input("10", "   ", "3")).unwrap_err();
        assert_eq!(err, CalcError::missing_field(Dimension::Width));

        let err = calculate(&input("10", "10", "")).unwrap_err();
        assert_eq!(err, CalcError::missing_field(Dimension::Depth));
    }

    #[test]
    fn test_missing_wins_over_parse_failure() {
        // Emptiness is checked for every field before any parsing, so the
        // empty depth is reported even though the length is unparseable
        let err = calculate(&input("abc", "10", "")).unwrap_err();
        assert_eq!(err, CalcError::missing_field(Dimension::Depth));
    }

    #[test]
    fn test_not_a_number() {
        let err = calculate(&input("10", "abc", "3")).unwrap_err();
        assert_eq!(err.error_code(), "NOT_A_NUMBER");
        assert_eq!(err.field(), Dimension::Width);
        assert_eq!(err.to_string(), "Please enter valid numbers");
    }

    #[test]
    fn test_nan_string_is_not_a_number() {
        // f64::from_str parses "NaN" successfully; it still reads as garbage
        let err = calculate(&input("NaN", "10", "3")).unwrap_err();
        assert_eq!(err.error_code(), "NOT_A_NUMBER");
    }

    #[test]
    fn test_parse_failure_wins_over_non_positive() {
        // Length is non-positive, width is unparseable; parsing runs first
        // on length (fine), then width fails before positivity is checked
        let err = calculate(&input("-5", "abc", "3")).unwrap_err();
        assert_eq!(err, CalcError::not_a_number(Dimension::Width, "abc"));
    }

    #[test]
    fn test_non_positive() {
        let err = calculate(&input("0", "10", "3")).unwrap_err();
        assert_eq!(err, CalcError::non_positive(Dimension::Length, 0.0));

        let err = calculate(&input("10", "-2.5", "3")).unwrap_err();
        assert_eq!(err, CalcError::non_positive(Dimension::Width, -2.5));
    }

    #[test]
    fn test_infinite_input_rejected() {
        let err = calculate(&input("inf", "10", "3")).unwrap_err();
        assert_eq!(err.error_code(), "NON_POSITIVE");
    }

    #[test]
    fn test_monotonic_in_each_dimension() {
        let base = calculate(&input("10", "10", "3")).unwrap();

        let longer = calculate(&input("11", "10", "3")).unwrap();
        assert!(longer.volume_cubic_yards > base.volume_cubic_yards);
        assert!(longer.bag_count >= base.bag_count);
        assert!(longer.weight_tons > base.weight_tons);

        let wider = calculate(&input("10", "11", "3")).unwrap();
        assert!(wider.volume_cubic_yards > base.volume_cubic_yards);

        let deeper = calculate(&input("10", "10", "4")).unwrap();
        assert!(deeper.volume_cubic_yards > base.volume_cubic_yards);
        assert!(deeper.bag_count > base.bag_count);
    }

    #[test]
    fn test_deterministic_and_input_untouched() {
        let topsoil = input("10", "10", "3");
        let first = calculate(&topsoil).unwrap();
        let second = calculate(&topsoil).unwrap();
        assert_eq!(first, second);
        assert_eq!(topsoil, input("10", "10", "3"));
    }

    #[test]
    fn test_default_is_cleared_form() {
        let cleared = TopsoilInput::default();
        assert_eq!(cleared.length, "");
        assert_eq!(cleared.width, "");
        assert_eq!(cleared.depth, "");
        assert_eq!(cleared.area_unit, AreaUnit::Feet);
        assert_eq!(cleared.depth_unit, DepthUnit::Inches);
    }

    #[test]
    fn test_input_accepts_surrounding_whitespace() {
        let result = calculate(&input(" 10 ", "10", "3")).unwrap();
        assert_eq!(result.bag_count, 50);
    }

    #[test]
    fn test_serialization() {
        let topsoil = input("10", "10", "3");
        let json = serde_json::to_string_pretty(&topsoil).unwrap();
        let roundtrip: TopsoilInput = serde_json::from_str(&json).unwrap();
        assert_eq!(topsoil, roundtrip);

        let result = calculate(&topsoil).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: TopsoilResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
