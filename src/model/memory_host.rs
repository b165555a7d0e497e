//! In-memory editor host
//!
//! Holds buffers as plain line vectors, maps views onto buffers and keeps the
//! overlay table the highlighter writes into. Every overlay add and remove is
//! counted so leaks and double releases show up in `stats()`.

use std::collections::HashMap;
use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::model::host::{BufferId, EditorHost, ViewId};
use crate::primitives::display_width::{
    display_column, grapheme_advance, str_display_width, trim_line_ending, DEFAULT_TAB_SIZE,
};
use crate::view::overlay::{ColumnRange, OverlayFace, OverlayHandle, OverlayNamespace};

/// Buffer contents plus the per-buffer settings the highlighter reads
#[derive(Debug, Clone)]
pub struct MemoryBuffer {
    lines: Vec<String>,
    /// Wrap width; `<= 0` means no limit
    pub width_limit: i64,
    pub tab_size: usize,
}

impl MemoryBuffer {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn line(&self, line: usize) -> &str {
        self.lines.get(line).map(String::as_str).unwrap_or("")
    }
}

/// An overlay as stored in the host's table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub view: ViewId,
    pub namespace: OverlayNamespace,
    pub face: OverlayFace,
    pub columns: ColumnRange,
    /// Creation order, used to list overlays deterministically
    seq: u64,
}

/// Counters over the host's overlay calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayStats {
    pub added: usize,
    pub removed: usize,
    /// `remove_overlay` calls for handles the host doesn't know (double release)
    pub unknown_removals: usize,
}

/// A run of chars in one line sharing the same highlight face
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Char range within the line
    pub chars: Range<usize>,
    pub face: OverlayFace,
}

#[derive(Debug, Default)]
pub struct InMemoryHost {
    buffers: HashMap<BufferId, MemoryBuffer>,
    views: HashMap<ViewId, BufferId>,
    overlays: HashMap<OverlayHandle, Overlay>,
    next_buffer_id: usize,
    next_view_id: usize,
    next_overlay_seq: u64,
    stats: OverlayStats,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a buffer from text, splitting on `\n` / `\r\n`
    pub fn open_buffer(&mut self, text: &str, width_limit: i64) -> BufferId {
        let lines = text.lines().map(|l| l.to_string()).collect();
        self.open_buffer_lines(lines, width_limit)
    }

    pub fn open_buffer_lines(&mut self, lines: Vec<String>, width_limit: i64) -> BufferId {
        let id = BufferId(self.next_buffer_id);
        self.next_buffer_id += 1;
        let lines = lines
            .into_iter()
            .map(|l| trim_line_ending(&l).to_string())
            .collect();
        self.buffers.insert(
            id,
            MemoryBuffer {
                lines,
                width_limit,
                tab_size: DEFAULT_TAB_SIZE,
            },
        );
        id
    }

    /// Open a new view onto `buffer`; `None` if the buffer doesn't exist
    pub fn open_view(&mut self, buffer: BufferId) -> Option<ViewId> {
        if !self.buffers.contains_key(&buffer) {
            return None;
        }
        let id = ViewId(self.next_view_id);
        self.next_view_id += 1;
        self.views.insert(id, buffer);
        Some(id)
    }

    /// Forget a view. Overlays the view still holds stay in the table and
    /// count as leaked.
    pub fn close_view(&mut self, view: ViewId) {
        self.views.remove(&view);
    }

    pub fn buffer(&self, buffer: BufferId) -> Option<&MemoryBuffer> {
        self.buffers.get(&buffer)
    }

    pub fn buffer_for_view(&self, view: ViewId) -> Option<BufferId> {
        self.views.get(&view).copied()
    }

    pub fn set_width_limit(&mut self, buffer: BufferId, width_limit: i64) {
        if let Some(buf) = self.buffers.get_mut(&buffer) {
            buf.width_limit = width_limit;
        }
    }

    pub fn set_tab_size(&mut self, buffer: BufferId, tab_size: usize) {
        if let Some(buf) = self.buffers.get_mut(&buffer) {
            buf.tab_size = tab_size;
        }
    }

    /// Replace the text of one line; appends if `line` is one past the end
    pub fn set_line(&mut self, buffer: BufferId, line: usize, text: &str) {
        if let Some(buf) = self.buffers.get_mut(&buffer) {
            let text = trim_line_ending(text).to_string();
            if line < buf.lines.len() {
                buf.lines[line] = text;
            } else if line == buf.lines.len() {
                buf.lines.push(text);
            }
        }
    }

    pub fn stats(&self) -> OverlayStats {
        self.stats
    }

    /// Number of overlays currently in the table, across all views
    pub fn live_overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Overlays belonging to `view`, in creation order
    pub fn overlays_for_view(&self, view: ViewId) -> Vec<(&OverlayHandle, &Overlay)> {
        let mut overlays: Vec<_> = self
            .overlays
            .iter()
            .filter(|(_, overlay)| overlay.view == view)
            .collect();
        overlays.sort_by_key(|(_, overlay)| overlay.seq);
        overlays
    }

    pub fn overlay(&self, handle: &OverlayHandle) -> Option<&Overlay> {
        self.overlays.get(handle)
    }

    /// Resolve the view's overlays against one line of its buffer
    ///
    /// Each grapheme cluster is matched by the display column at which it
    /// starts; all chars of the cluster share that face. Where overlays
    /// overlap the higher-priority face wins.
    pub fn highlighted_spans(&self, view: ViewId, line: usize) -> Vec<HighlightSpan> {
        let Some(buffer_id) = self.buffer_for_view(view) else {
            return Vec::new();
        };
        let overlays = self.overlays_for_view(view);
        if overlays.is_empty() {
            return Vec::new();
        }

        let Some(buf) = self.buffers.get(&buffer_id) else {
            return Vec::new();
        };

        let mut spans: Vec<HighlightSpan> = Vec::new();
        let mut column = 0;
        let mut offset = 0;
        for g in buf.line(line).graphemes(true) {
            let len = g.chars().count();
            let start_column = column + 1;
            column += grapheme_advance(g, column, buf.tab_size);
            let chars = offset..offset + len;
            offset += len;

            let face = overlays
                .iter()
                .filter(|(_, overlay)| overlay.columns.contains(start_column))
                .map(|(_, overlay)| overlay.face)
                .max_by_key(|face| face.priority());
            let Some(face) = face else {
                continue;
            };
            match spans.last_mut() {
                Some(last) if last.face == face && last.chars.end == chars.start => {
                    last.chars.end = chars.end;
                }
                _ => spans.push(HighlightSpan { chars, face }),
            }
        }
        spans
    }

    /// Highest-priority face applied anywhere in the line, if any
    pub fn line_face(&self, view: ViewId, line: usize) -> Option<OverlayFace> {
        self.highlighted_spans(view, line)
            .into_iter()
            .map(|span| span.face)
            .max_by_key(|face| face.priority())
    }
}

impl EditorHost for InMemoryHost {
    fn add_overlay(
        &mut self,
        view: ViewId,
        namespace: &OverlayNamespace,
        face: OverlayFace,
        columns: ColumnRange,
    ) -> OverlayHandle {
        let seq = self.next_overlay_seq;
        self.next_overlay_seq += 1;
        let handle = OverlayHandle::from_string(format!("overlay-{seq}"));
        self.overlays.insert(
            handle.clone(),
            Overlay {
                view,
                namespace: namespace.clone(),
                face,
                columns,
                seq,
            },
        );
        self.stats.added += 1;
        tracing::trace!("add_overlay {} on {}: {} {}", handle, view, face, columns);
        handle
    }

    fn remove_overlay(&mut self, view: ViewId, handle: &OverlayHandle) {
        match self.overlays.get(handle) {
            Some(overlay) if overlay.view == view => {
                self.overlays.remove(handle);
                self.stats.removed += 1;
                tracing::trace!("remove_overlay {} on {}", handle, view);
            }
            _ => {
                self.stats.unknown_removals += 1;
                tracing::warn!("remove_overlay: unknown overlay {} on {}", handle, view);
            }
        }
    }

    fn width_limit(&self, view: ViewId) -> i64 {
        self.buffer_for_view(view)
            .map(|buffer| self.buffer_width_limit(buffer))
            .unwrap_or(0)
    }

    fn buffer_width_limit(&self, buffer: BufferId) -> i64 {
        self.buffers.get(&buffer).map_or(0, |buf| buf.width_limit)
    }

    fn line_count(&self, buffer: BufferId) -> usize {
        self.buffers.get(&buffer).map_or(0, |buf| buf.lines.len())
    }

    fn line_char_count(&self, buffer: BufferId, line: usize) -> usize {
        self.buffers
            .get(&buffer)
            .map_or(0, |buf| buf.line(line).chars().count())
    }

    fn display_column(&self, buffer: BufferId, line: usize, char_offset: usize) -> usize {
        match self.buffers.get(&buffer) {
            Some(buf) => display_column(buf.line(line), char_offset, buf.tab_size),
            None => 1,
        }
    }

    fn line_display_width(&self, buffer: BufferId, line: usize) -> usize {
        self.buffers
            .get(&buffer)
            .map_or(0, |buf| str_display_width(buf.line(line), buf.tab_size))
    }
}
