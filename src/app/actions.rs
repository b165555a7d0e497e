//! Host events and user actions
//!
//! The host forwards its notifications as `HostEvent`s; user-invoked
//! commands arrive as `Action`s. Both are dispatched synchronously on the
//! host's event thread.

use crate::app::long_lines::LongLineHighlighter;
use crate::config::LongLinesConfig;
use crate::model::host::{EditorHost, ViewId};

/// Notifications from the host that can change a view's highlighting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The cursor moved in a view
    CursorMoved(ViewId),
    /// A view-local option (such as the wrap width) changed
    OptionChanged(ViewId),
    /// A view is about to close
    ViewClosed(ViewId),
    /// The global config was reassigned while `view` was current
    ConfigChanged {
        view: ViewId,
        config: LongLinesConfig,
    },
}

/// User-invocable long-lines commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Toggle highlighting in the current view
    ToggleView,
    /// Toggle highlighting everywhere
    ToggleGlobal,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[Action::ToggleView, Action::ToggleGlobal]
    }

    /// Stable command name
    pub fn name(&self) -> &'static str {
        match self {
            Action::ToggleView => "long_lines_toggle_view",
            Action::ToggleGlobal => "long_lines_toggle_global",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Action::ToggleView => "Toggle long-line highlighting in this view",
            Action::ToggleGlobal => "Toggle long-line highlighting in all views",
        }
    }

    pub fn from_name(name: &str) -> Option<Action> {
        Self::all().iter().copied().find(|action| action.name() == name)
    }
}

impl LongLineHighlighter {
    pub fn handle_event<H: EditorHost>(&mut self, host: &mut H, event: HostEvent) {
        match event {
            HostEvent::CursorMoved(view) | HostEvent::OptionChanged(view) => {
                self.refresh(host, view)
            }
            HostEvent::ViewClosed(view) => self.close_view(host, view),
            HostEvent::ConfigChanged { view, config } => self.set_config(host, view, config),
        }
    }

    pub fn execute_action<H: EditorHost>(&mut self, host: &mut H, active: ViewId, action: Action) {
        match action {
            Action::ToggleView => self.toggle_view(host, active),
            Action::ToggleGlobal => self.toggle_global(host, active),
        }
    }
}
