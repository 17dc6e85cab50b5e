//! # Bulk-Material Properties
//!
//! Physical constants for the materials the calculator estimates. Currently
//! only topsoil is defined; the profile struct keeps the constants next to
//! the material they describe rather than scattered through the math.
//!
//! ## Example
//!
//! ```rust
//! use soil_core::material::MaterialProfile;
//! use soil_core::units::CuFt;
//!
//! let topsoil = MaterialProfile::topsoil();
//! // 25 cubic feet of topsoil fills 50 half-cubic-foot bags
//! assert_eq!(topsoil.bags(CuFt(25.0)), 50);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{CuFt, CuYd, Tons};

/// Physical constants for one bulk material.
///
/// Weight is an estimate; real-world density varies with moisture and
/// composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProfile {
    /// Volume of one retail bag
    pub bag_volume_cuft: CuFt,

    /// Density in short tons per cubic yard
    pub density_tons_per_cuyd: f64,
}

impl MaterialProfile {
    /// Screened topsoil: 0.5 cu ft bags, roughly 1.4 tons per cubic yard
    pub fn topsoil() -> Self {
        MaterialProfile {
            bag_volume_cuft: CuFt(0.5),
            density_tons_per_cuyd: 1.4,
        }
    }

    /// Number of bags needed to hold `volume`, rounded up to whole bags
    pub fn bags(&self, volume: CuFt) -> u64 {
        (volume.0 / self.bag_volume_cuft.0).ceil() as u64
    }

    /// Estimated weight of `volume` of this material
    pub fn weight(&self, volume: CuYd) -> Tons {
        Tons(volume.0 * self.density_tons_per_cuyd)
    }
}
