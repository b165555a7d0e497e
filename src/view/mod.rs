//! View layer
//!
//! Presentation-side types shared with the host: overlay handles,
//! namespaces, faces and the column patterns overlays match.

pub mod overlay;
