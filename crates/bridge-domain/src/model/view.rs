//! View - The named screens of the bridge console
//!
//! View is a Value Object. The catalogue below is what the sidebar
//! offers; anything else a caller asks for is still accepted by the
//! router and resolves to a placeholder screen.

/// The screens reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Command & control overview
    #[default]
    Bridge,
    Missions,
    Logs,
    Chat,
    Analytics,
    Crew,
    Settings,
}

impl View {
    /// Tag used when navigating, e.g. `missions`
    pub fn tag(&self) -> &'static str {
        match self {
            View::Bridge => "bridge",
            View::Missions => "missions",
            View::Logs => "logs",
            View::Chat => "chat",
            View::Analytics => "analytics",
            View::Crew => "crew",
            View::Settings => "settings",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            View::Bridge => "Bridge",
            View::Missions => "Mission Control",
            View::Logs => "Agent Logs",
            View::Chat => "Chat",
            View::Analytics => "Analytics",
            View::Crew => "Crew",
            View::Settings => "Settings",
        }
    }

    /// Sidebar subtitle
    pub fn description(&self) -> &'static str {
        match self {
            View::Bridge => "Command & Control Center",
            View::Missions => "Mission Management & Timeline",
            View::Logs => "Content Creation History",
            View::Chat => "Agent Communication Console",
            View::Analytics => "Content Performance Metrics",
            View::Crew => "Agent Management",
            View::Settings => "System Configuration",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.tag() == tag)
    }

    /// Sidebar order
    pub fn all() -> &'static [View] {
        &[
            View::Bridge,
            View::Missions,
            View::Logs,
            View::Chat,
            View::Analytics,
            View::Crew,
            View::Settings,
        ]
    }
}

impl core::fmt::Display for View {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// What the router asks the presentation layer to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Bridge,
    MissionControl,
    AgentLogs,
    Chat,
    /// Fallback for views without a dedicated screen, known or not
    UnderConstruction { title: String },
}

impl Screen {
    pub fn title(&self) -> String {
        match self {
            Screen::Bridge => View::Bridge.label().to_string(),
            Screen::MissionControl => View::Missions.label().to_string(),
            Screen::AgentLogs => View::Logs.label().to_string(),
            Screen::Chat => View::Chat.label().to_string(),
            Screen::UnderConstruction { title } => title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_round_trips_tags() {
        assert_eq!(View::all().len(), 7);
        for view in View::all() {
            assert_eq!(View::from_tag(view.tag()), Some(*view));
        }
        assert_eq!(View::from_tag("warp-drive"), None);
    }

    #[test]
    fn test_default_view_is_bridge() {
        assert_eq!(View::default(), View::Bridge);
    }
}
