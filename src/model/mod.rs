//! Host model
//!
//! `host` defines the capabilities the highlighter consumes from an editor.
//! `memory_host` is a complete in-memory implementation used by the
//! command-line front end and the tests.

pub mod host;
pub mod memory_host;
