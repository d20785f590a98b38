//! View Router - The root composition's UI state
//!
//! The router holds exactly two pieces of state:
//! 1. Which view is selected (`current_view`)
//! 2. Whether the sidebar is open (`sidebar_open`)
//!
//! It then decides which [`Screen`] to show. Selection is never
//! validated: an unknown tag is stored as-is and resolves to the
//! "under construction" placeholder.
//!
//! This is pure domain logic - no I/O, no persistence.

use crate::model::view::{Screen, View};

/// The currently selected view tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSelection {
    Known(View),
    Unknown(String),
}

impl ViewSelection {
    pub fn from_tag(tag: &str) -> Self {
        match View::from_tag(tag) {
            Some(view) => ViewSelection::Known(view),
            None => ViewSelection::Unknown(tag.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            ViewSelection::Known(view) => view.tag(),
            ViewSelection::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, ViewSelection::Known(_))
    }
}

impl Default for ViewSelection {
    fn default() -> Self {
        ViewSelection::Known(View::default())
    }
}

/// Derived layout flags for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub sidebar_open: bool,
    /// The side control panel takes the sidebar's place while it is closed
    pub control_panel_visible: bool,
}

/// ViewRouter - Current view + sidebar flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    current_view: ViewSelection,
    sidebar_open: bool,
}

impl ViewRouter {
    /// Bridge view, sidebar open
    pub fn new() -> Self {
        Self {
            current_view: ViewSelection::default(),
            sidebar_open: true,
        }
    }

    /// Start somewhere other than the defaults
    pub fn starting_at(tag: &str, sidebar_open: bool) -> Self {
        Self {
            current_view: ViewSelection::from_tag(tag),
            sidebar_open,
        }
    }

    pub fn current_view(&self) -> &ViewSelection {
        &self.current_view
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Replace the current view unconditionally
    pub fn set_view(&mut self, tag: &str) -> &ViewSelection {
        self.current_view = ViewSelection::from_tag(tag);
        &self.current_view
    }

    /// Flip the sidebar flag, returning the new value
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    /// The bridge's mission panel jumps straight to mission control
    pub fn open_missions(&mut self) {
        self.current_view = ViewSelection::Known(View::Missions);
    }

    pub fn layout(&self) -> Layout {
        Layout {
            sidebar_open: self.sidebar_open,
            control_panel_visible: !self.sidebar_open,
        }
    }

    /// Decide which screen the current selection shows
    pub fn screen(&self) -> Screen {
        match &self.current_view {
            ViewSelection::Known(View::Bridge) => Screen::Bridge,
            ViewSelection::Known(View::Missions) => Screen::MissionControl,
            ViewSelection::Known(View::Logs) => Screen::AgentLogs,
            ViewSelection::Known(View::Chat) => Screen::Chat,
            other => Screen::UnderConstruction {
                title: capitalize(other.tag()),
            },
        }
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
