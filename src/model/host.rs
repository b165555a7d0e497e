//! Editor host capabilities
//!
//! The highlighter never touches editor internals directly. Everything it
//! needs - overlay creation and removal, the configured wrap width, and
//! display-column measurement - goes through `EditorHost`.

use std::fmt;

use crate::view::overlay::{ColumnRange, OverlayFace, OverlayHandle, OverlayNamespace};

/// Unique identifier for a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub usize);

/// Unique identifier for a view (an on-screen presentation of a buffer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub usize);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buffer {}", self.0)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view {}", self.0)
    }
}

/// Capabilities an editor provides to the long-line highlighter
pub trait EditorHost {
    /// Create a highlight overlay over `columns` in every line of `view`
    fn add_overlay(
        &mut self,
        view: ViewId,
        namespace: &OverlayNamespace,
        face: OverlayFace,
        columns: ColumnRange,
    ) -> OverlayHandle;

    /// Release an overlay previously returned by `add_overlay`
    fn remove_overlay(&mut self, view: ViewId, handle: &OverlayHandle);

    /// Configured wrap width of the view's buffer; `<= 0` means no limit
    fn width_limit(&self, view: ViewId) -> i64;

    /// Configured wrap width of a buffer; `<= 0` means no limit
    fn buffer_width_limit(&self, buffer: BufferId) -> i64;

    fn line_count(&self, buffer: BufferId) -> usize;

    /// Number of chars in a line, excluding the line terminator
    fn line_char_count(&self, buffer: BufferId, line: usize) -> usize;

    /// 1-based display column at which the char at `char_offset` starts
    ///
    /// An offset equal to the line length yields the line's width plus one.
    fn display_column(&self, buffer: BufferId, line: usize, char_offset: usize) -> usize;

    /// Display width of a whole line
    fn line_display_width(&self, buffer: BufferId, line: usize) -> usize {
        let end = self.line_char_count(buffer, line);
        self.display_column(buffer, line, end).saturating_sub(1)
    }
}
