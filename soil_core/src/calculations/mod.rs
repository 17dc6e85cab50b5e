//! # Quantity Takeoff Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Raw input as collected from a form (JSON-serializable)
//! - `*Result` - Derived quantities (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Inputs carry dimensions as the raw strings the user typed; validation and
//! parsing live inside the calculation so every front end gets identical
//! behavior.
//!
//! ## Available Calculations
//!
//! - [`topsoil`] - Rectangular-bed topsoil volume, bag count, and weight

pub mod topsoil;

// Re-export commonly used types
pub use topsoil::{TopsoilInput, TopsoilResult};
