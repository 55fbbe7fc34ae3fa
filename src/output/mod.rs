//! Output formatting for run reports.
//!
//! This module provides formatters for displaying a [`RunReport`] in
//! different formats:
//! - Terminal: human-readable summary with colors
//! - JSON: machine-readable serialization
//!
//! [`RunReport`]: crate::RunReport

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::format_report;
