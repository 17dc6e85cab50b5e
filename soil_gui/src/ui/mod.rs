//! UI module for the Groundwork GUI
//!
//! # Panel Structure
//! - `header` - Application title row
//! - `input_panel` - Dimension fields, unit pick lists, Reset/Calculate actions
//! - `results_panel` - Validation error or derived quantities
//! - `status_bar` - Bottom status messages

pub mod header;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
