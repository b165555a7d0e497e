//! Long-line highlighting
//!
//! For every view the highlighter keeps either no overlays (highlighting off
//! for that view) or exactly two: a `Warning` overlay over the margin band
//! just past the width limit and an `Error` overlay over everything beyond
//! it. `refresh` reconciles a view towards that state and is cheap enough to
//! run on every cursor move: when the view already holds overlays for the
//! current limit and margin it does nothing.

use std::collections::HashMap;

use crate::config::LongLinesConfig;
use crate::model::host::{EditorHost, ViewId};
use crate::view::overlay::{long_lines_namespace, ColumnRange, OverlayFace, OverlayHandle};

/// Width limit and margin a view's overlays were built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Geometry {
    limit: usize,
    margin: usize,
}

/// Per-view highlighting state
#[derive(Debug, Clone)]
pub struct ViewState {
    /// View-local toggle, on by default
    pub enabled: bool,
    /// Held overlays: empty, or `[warning, error]`
    overlays: Vec<OverlayHandle>,
    geometry: Option<Geometry>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            enabled: true,
            overlays: Vec::new(),
            geometry: None,
        }
    }
}

impl ViewState {
    pub fn overlays(&self) -> &[OverlayHandle] {
        &self.overlays
    }

    /// Width limit the held overlays were built for
    pub fn width_limit(&self) -> Option<usize> {
        self.geometry.map(|g| g.limit)
    }
}

pub struct LongLineHighlighter {
    config: LongLinesConfig,
    views: HashMap<ViewId, ViewState>,
}

impl LongLineHighlighter {
    pub fn new(config: LongLinesConfig) -> Self {
        Self {
            config,
            views: HashMap::new(),
        }
    }

    pub fn config(&self) -> &LongLinesConfig {
        &self.config
    }

    /// Bring `view`'s overlays in sync with the enable flags and the view's
    /// current width limit and margin.
    pub fn refresh<H: EditorHost>(&mut self, host: &mut H, view: ViewId) {
        let limit = usize::try_from(host.width_limit(view))
            .ok()
            .filter(|limit| *limit > 0);
        let debug = self.config.debug;
        let global_enabled = self.config.enabled;
        let margin = self.config.margin;
        let state = self.views.entry(view).or_default();

        let Some(limit) = limit.filter(|_| global_enabled && state.enabled) else {
            if !state.overlays.is_empty() {
                if debug {
                    tracing::debug!(
                        "long-lines: {} inactive (global={}, view={}), releasing {} overlays",
                        view,
                        global_enabled,
                        state.enabled,
                        state.overlays.len()
                    );
                }
                release_overlays(host, view, state);
            }
            return;
        };

        let geometry = Geometry { limit, margin };
        if !state.overlays.is_empty() {
            if state.geometry == Some(geometry) {
                return;
            }
            if debug {
                tracing::debug!(
                    "long-lines: {} settings changed {:?} -> {:?}, rebuilding",
                    view,
                    state.geometry,
                    geometry
                );
            }
            release_overlays(host, view, state);
        }

        let namespace = long_lines_namespace();
        let warning = host.add_overlay(
            view,
            &namespace,
            OverlayFace::Warning,
            ColumnRange::warning_band(limit, margin),
        );
        let error = host.add_overlay(
            view,
            &namespace,
            OverlayFace::Error,
            ColumnRange::error_band(limit, margin),
        );
        state.overlays.push(warning);
        state.overlays.push(error);
        state.geometry = Some(geometry);

        if debug {
            tracing::debug!(
                "long-lines: {} highlighting columns past {} (warning margin {})",
                view,
                limit,
                margin
            );
        }
    }

    /// Flip the view-local toggle, then refresh the view
    pub fn toggle_view<H: EditorHost>(&mut self, host: &mut H, view: ViewId) {
        let state = self.views.entry(view).or_default();
        state.enabled = !state.enabled;
        if self.config.debug {
            tracing::debug!("long-lines: {} toggled to {}", view, state.enabled);
        }
        self.refresh(host, view);
    }

    /// Flip the global toggle, then refresh the current view
    ///
    /// Other views pick up the change on their next refresh.
    pub fn toggle_global<H: EditorHost>(&mut self, host: &mut H, current: ViewId) {
        self.config.enabled = !self.config.enabled;
        if self.config.debug {
            tracing::debug!("long-lines: globally toggled to {}", self.config.enabled);
        }
        self.refresh(host, current);
    }

    /// Whether highlighting is on for `view` (global and view toggles)
    pub fn is_enabled(&self, view: ViewId) -> bool {
        self.config.enabled && self.views.get(&view).map_or(true, |state| state.enabled)
    }

    /// Replace the global config, then refresh the current view
    pub fn set_config<H: EditorHost>(
        &mut self,
        host: &mut H,
        current: ViewId,
        config: LongLinesConfig,
    ) {
        self.config = config;
        self.refresh(host, current);
    }

    pub fn set_margin<H: EditorHost>(&mut self, host: &mut H, current: ViewId, margin: usize) {
        self.config.margin = margin;
        self.refresh(host, current);
    }

    /// Release the view's overlays and drop its state
    pub fn close_view<H: EditorHost>(&mut self, host: &mut H, view: ViewId) {
        if let Some(mut state) = self.views.remove(&view) {
            release_overlays(host, view, &mut state);
        }
    }

    /// Release every overlay held by any view
    pub fn release_all<H: EditorHost>(&mut self, host: &mut H) {
        for (view, state) in self.views.iter_mut() {
            release_overlays(host, *view, state);
        }
    }

    pub fn view_state(&self, view: ViewId) -> Option<&ViewState> {
        self.views.get(&view)
    }

    /// Overlays currently held for `view`
    pub fn active_overlays(&self, view: ViewId) -> &[OverlayHandle] {
        self.views
            .get(&view)
            .map(|state| state.overlays.as_slice())
            .unwrap_or(&[])
    }

    /// Views with state, in id order
    pub fn tracked_views(&self) -> Vec<ViewId> {
        let mut views: Vec<_> = self.views.keys().copied().collect();
        views.sort();
        views
    }
}

impl Default for LongLineHighlighter {
    fn default() -> Self {
        Self::new(LongLinesConfig::default())
    }
}

fn release_overlays<H: EditorHost>(host: &mut H, view: ViewId, state: &mut ViewState) {
    for handle in state.overlays.drain(..) {
        host.remove_overlay(view, &handle);
    }
    state.geometry = None;
}
