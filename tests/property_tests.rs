//! Property-based tests for overlay bookkeeping
//!
//! Random sequences of host events, toggles and setting changes must never
//! leave a view with anything but zero or two overlays, never leak an
//! overlay and never release one twice.

mod common;

use common::harness::HighlightHarness;
use long_lines::{Action, ColumnRange, HostEvent, LongLinesConfig, OverlayFace, ViewId};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    CursorMoved(usize),
    ToggleView(usize),
    ToggleGlobal(usize),
    SetMargin(usize, usize),
    SetWidthLimit(usize, i64),
    CloseView(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..3usize).prop_map(Op::CursorMoved),
        2 => (0..3usize).prop_map(Op::ToggleView),
        1 => (0..3usize).prop_map(Op::ToggleGlobal),
        1 => (0..3usize, margin_strategy()).prop_map(|(v, m)| Op::SetMargin(v, m)),
        1 => (0..3usize, -5..120i64).prop_map(|(v, l)| Op::SetWidthLimit(v, l)),
        1 => (0..3usize).prop_map(Op::CloseView),
    ]
}

/// Mostly small margins, sometimes ones at the top of the `usize` range
fn margin_strategy() -> impl Strategy<Value = usize> {
    prop_oneof![
        4 => 0..15usize,
        1 => (usize::MAX - 200)..=usize::MAX,
    ]
}

struct Scenario {
    h: HighlightHarness,
    views: Vec<ViewId>,
}

impl Scenario {
    fn new() -> Self {
        let mut h = HighlightHarness::new(LongLinesConfig::default());
        let (buffer_a, first) = h.open("alpha", 80);
        let second = h.open_view(buffer_a);
        let (_buffer_b, third) = h.open("beta", 40);
        Self {
            h,
            views: vec![first, second, third],
        }
    }

    fn apply(&mut self, op: &Op) {
        let h = &mut self.h;
        match *op {
            Op::CursorMoved(v) => h
                .highlighter
                .handle_event(&mut h.host, HostEvent::CursorMoved(self.views[v])),
            Op::ToggleView(v) => {
                h.highlighter
                    .execute_action(&mut h.host, self.views[v], Action::ToggleView)
            }
            Op::ToggleGlobal(v) => {
                h.highlighter
                    .execute_action(&mut h.host, self.views[v], Action::ToggleGlobal)
            }
            Op::SetMargin(v, margin) => h.highlighter.set_margin(&mut h.host, self.views[v], margin),
            Op::SetWidthLimit(v, limit) => {
                if let Some(buffer) = h.host.buffer_for_view(self.views[v]) {
                    h.host.set_width_limit(buffer, limit);
                }
                h.highlighter
                    .handle_event(&mut h.host, HostEvent::OptionChanged(self.views[v]));
            }
            Op::CloseView(v) => {
                let view = self.views[v];
                h.highlighter
                    .handle_event(&mut h.host, HostEvent::ViewClosed(view));
                // Reopen so later ops keep a live view in this slot
                if let Some(buffer) = h.host.buffer_for_view(view) {
                    h.host.close_view(view);
                    self.views[v] = h.host.open_view(buffer).expect("buffer exists");
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_zero_or_two_overlays_and_no_leaks(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut scenario = Scenario::new();
        for op in &ops {
            scenario.apply(op);
            scenario.h.assert_consistent();
        }
    }

    #[test]
    fn prop_refresh_after_any_sequence_is_stable(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut scenario = Scenario::new();
        for op in &ops {
            scenario.apply(op);
        }
        for view in scenario.views.clone() {
            scenario.h.highlighter.refresh(&mut scenario.h.host, view);
        }
        let stats = scenario.h.host.stats();
        for view in scenario.views.clone() {
            scenario.h.highlighter.refresh(&mut scenario.h.host, view);
        }
        prop_assert_eq!(scenario.h.host.stats(), stats);
    }

    #[test]
    fn prop_active_view_covers_expected_bands(limit in 1..200i64, margin in 0..30usize) {
        let mut h = HighlightHarness::new(LongLinesConfig::default().with_margin(margin));
        let (_buffer, view) = h.open("text", limit);
        h.highlighter.refresh(&mut h.host, view);

        let limit = limit as usize;
        prop_assert_eq!(
            h.overlays(view),
            vec![
                (OverlayFace::Warning, ColumnRange::warning_band(limit, margin)),
                (OverlayFace::Error, ColumnRange::error_band(limit, margin)),
            ]
        );
        let warning = ColumnRange::warning_band(limit, margin);
        let error = ColumnRange::error_band(limit, margin);
        for column in 1..(limit + margin + 5) {
            prop_assert!(!(warning.contains(column) && error.contains(column)));
            prop_assert_eq!(warning.contains(column), column > limit && column <= limit + margin);
            prop_assert_eq!(error.contains(column), column > limit + margin);
        }
    }

    #[test]
    fn prop_huge_margin_never_reaches_error(
        limit in 1..200i64,
        margin in (usize::MAX - 200)..=usize::MAX,
        extra in 1..60usize,
    ) {
        let mut h = HighlightHarness::new(LongLinesConfig::default().with_margin(margin));
        let (_buffer, view) = h.open(&"x".repeat(limit as usize + extra), limit);
        h.highlighter
            .handle_event(&mut h.host, HostEvent::CursorMoved(view));

        h.assert_consistent();
        prop_assert_eq!(h.host.line_face(view, 0), Some(OverlayFace::Warning));
        let error = ColumnRange::error_band(limit as usize, margin);
        prop_assert!((1..limit as usize + extra + 1).all(|column| !error.contains(column)));
    }
}
