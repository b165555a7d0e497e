//! Long-line highlighting logic
//!
//! - `long_lines`: per-view overlay reconciliation and the toggles
//! - `status`: status-line summary
//! - `actions`: host event and command dispatch

pub mod actions;
pub mod long_lines;
pub mod status;
