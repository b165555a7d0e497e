//! Overlay types for long-line highlighting
//!
//! An overlay is a highlight region owned by the host. The highlighter only
//! ever holds the opaque `OverlayHandle` the host returned and must hand it
//! back through `remove_overlay` exactly once.

use std::fmt;

/// Opaque handle to an overlay created by the host
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayHandle(String);

impl OverlayHandle {
    pub fn from_string(handle: String) -> Self {
        Self(handle)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverlayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Groups overlays by owner so a host can tell them apart
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverlayNamespace(String);

impl OverlayNamespace {
    pub fn from_string(namespace: String) -> Self {
        Self(namespace)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn long_lines_namespace() -> OverlayNamespace {
    OverlayNamespace::from_string("long-lines".to_string())
}

/// Highlight style of a long-line overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayFace {
    /// Text inside the margin band just past the width limit
    Warning,
    /// Text beyond the margin band
    Error,
}

impl OverlayFace {
    /// Overlays with a higher priority win where they overlap
    pub fn priority(&self) -> i32 {
        match self {
            Self::Warning => 50,
            Self::Error => 100,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for OverlayFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of 1-based display columns an overlay matches
///
/// A character matches when the display column at which it starts is
/// strictly greater than `after` and, if `before` is set, strictly less
/// than `before`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnRange {
    pub after: usize,
    pub before: Option<usize>,
}

impl ColumnRange {
    /// Columns `limit+1 ..= limit+margin`
    ///
    /// A margin reaching past the largest column leaves the band unbounded.
    pub fn warning_band(limit: usize, margin: usize) -> Self {
        Self {
            after: limit,
            before: limit
                .checked_add(margin)
                .and_then(|last| last.checked_add(1)),
        }
    }

    /// Columns past `limit+margin`, unbounded
    ///
    /// Saturates, so a huge margin leaves no column in the band.
    pub fn error_band(limit: usize, margin: usize) -> Self {
        Self {
            after: limit.saturating_add(margin),
            before: None,
        }
    }

    pub fn contains(&self, column: usize) -> bool {
        column > self.after && self.before.map_or(true, |before| column < before)
    }

    /// No column can match (a zero-width warning band)
    pub fn is_empty(&self) -> bool {
        match self.before {
            Some(before) => before <= self.after.saturating_add(1),
            None => self.after == usize::MAX,
        }
    }

    /// First matching column
    pub fn first_column(&self) -> usize {
        self.after.saturating_add(1)
    }

    /// Last matching column, `None` when unbounded
    pub fn last_column(&self) -> Option<usize> {
        self.before.map(|before| before.saturating_sub(1))
    }
}

impl fmt::Display for ColumnRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.before {
            Some(before) => write!(f, "({}, {})", self.after, before),
            None => write!(f, "({}, ∞)", self.after),
        }
    }
}
