//! Low-level primitives and utilities
//!
//! Text measurement helpers shared by the highlighter, the in-memory host
//! and the status summary. Pure Rust, no platform dependencies.

pub mod display_width;
