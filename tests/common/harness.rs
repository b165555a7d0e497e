//! Test harness pairing an in-memory host with a highlighter

use long_lines::{
    BufferId, ColumnRange, InMemoryHost, LongLineHighlighter, LongLinesConfig, OverlayFace, ViewId,
};

pub struct HighlightHarness {
    pub host: InMemoryHost,
    pub highlighter: LongLineHighlighter,
}

impl HighlightHarness {
    pub fn new(config: LongLinesConfig) -> Self {
        super::tracing::init_tracing_from_env();
        Self {
            host: InMemoryHost::new(),
            highlighter: LongLineHighlighter::new(config.with_debug(true)),
        }
    }

    /// Open a buffer with `text` and one view onto it
    pub fn open(&mut self, text: &str, width_limit: i64) -> (BufferId, ViewId) {
        let buffer = self.host.open_buffer(text, width_limit);
        let view = self
            .host
            .open_view(buffer)
            .expect("buffer was just opened");
        (buffer, view)
    }

    pub fn open_view(&mut self, buffer: BufferId) -> ViewId {
        self.host.open_view(buffer).expect("buffer exists")
    }

    /// Faces and column ranges of the overlays the host holds for `view`
    pub fn overlays(&self, view: ViewId) -> Vec<(OverlayFace, ColumnRange)> {
        self.host
            .overlays_for_view(view)
            .into_iter()
            .map(|(_, overlay)| (overlay.face, overlay.columns))
            .collect()
    }

    /// Check the bookkeeping invariants across every tracked view
    pub fn assert_consistent(&self) {
        let mut held = 0;
        for view in self.highlighter.tracked_views() {
            let handles = self.highlighter.active_overlays(view);
            assert!(
                handles.is_empty() || handles.len() == 2,
                "{view} holds {} overlays",
                handles.len()
            );
            if handles.len() == 2 {
                let faces: Vec<_> = handles
                    .iter()
                    .map(|h| self.host.overlay(h).expect("held overlay is live").face)
                    .collect();
                assert_eq!(faces, vec![OverlayFace::Warning, OverlayFace::Error]);
            }
            held += handles.len();
        }
        assert_eq!(held, self.host.live_overlay_count(), "leaked overlays");
        assert_eq!(self.host.stats().unknown_removals, 0, "double release");
    }
}
