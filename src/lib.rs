// Long-line highlighting library - exposes all core modules for testing

// Core types and config are always available (needed for schema generation)
pub mod config;
pub mod partial_config;

// Runtime-only modules (require the "runtime" feature)
#[cfg(feature = "runtime")]
pub mod config_io;

// Core modules - always available (pure Rust, no platform dependencies)
pub mod app;
pub mod model;
pub mod primitives;
pub mod view;

// Runtime-only services (logging setup for the binary)
#[cfg(feature = "runtime")]
pub mod services;

pub use app::actions::{Action, HostEvent};
pub use app::long_lines::{LongLineHighlighter, ViewState};
pub use app::status::{long_line_stats, status_summary, LongLineStats};
pub use config::LongLinesConfig;
pub use model::host::{BufferId, EditorHost, ViewId};
pub use model::memory_host::InMemoryHost;
pub use view::overlay::{ColumnRange, OverlayFace, OverlayHandle, OverlayNamespace};
