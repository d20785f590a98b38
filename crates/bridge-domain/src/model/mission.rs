//! Mission - One tracked unit of work on the bridge
//!
//! A Mission is an Entity: its `id` is assigned once by the store and
//! survives every update. Everything else is replaceable through a
//! shallow-merge [`MissionPatch`].

use super::agent::AgentId;

/// Unique identifier for a Mission
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MissionId(String);

impl MissionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for MissionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a sub-task, unique within its mission
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The status label of a Mission (or Task)
///
/// This is a closed set of labels, not a state machine: any status
/// may be replaced by any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MissionStatus {
    #[default]
    Pending,
    InProgress,
    Active,
    Paused,
    Stopped,
    Completed,
}

impl MissionStatus {
    /// Wire tag, e.g. `in-progress`
    pub fn as_tag(&self) -> &'static str {
        match self {
            MissionStatus::Pending => "pending",
            MissionStatus::InProgress => "in-progress",
            MissionStatus::Active => "active",
            MissionStatus::Paused => "paused",
            MissionStatus::Stopped => "stopped",
            MissionStatus::Completed => "completed",
        }
    }

    /// Parse a wire tag. Returns `None` for anything outside the closed set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.as_tag() == tag)
    }

    pub fn all() -> &'static [MissionStatus] {
        &[
            MissionStatus::Pending,
            MissionStatus::InProgress,
            MissionStatus::Active,
            MissionStatus::Paused,
            MissionStatus::Stopped,
            MissionStatus::Completed,
        ]
    }
}

impl core::fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Tasks share the mission label set
pub type TaskStatus = MissionStatus;

/// Display priority. Has no behavioural effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_tag(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Completion percentage, always within 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Progress(u8);

impl Progress {
    pub const MAX: u8 = 100;

    pub fn new(value: u32) -> Result<Self, MissionError> {
        if value > Self::MAX as u32 {
            return Err(MissionError::ProgressOutOfRange { value });
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl core::fmt::Display for Progress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// ISO-8601 instant, as produced by a [`crate::Clock`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(iso8601: impl Into<String>) -> Self {
        Self(iso8601.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub start: Timestamp,
    pub estimated_completion: Option<Timestamp>,
}

impl Timeline {
    pub fn starting_at(start: Timestamp) -> Self {
        Self {
            start,
            estimated_completion: None,
        }
    }
}

/// A sub-item of a Mission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: TaskId::new(id),
            title: title.into(),
            status,
        }
    }
}

/// Caller-supplied fields for a new Mission.
///
/// No `id` field: the store assigns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionDraft {
    pub title: Option<String>,
    pub status: Option<MissionStatus>,
    pub priority: Option<Priority>,
    pub progress: Option<Progress>,
    pub agents: Option<Vec<AgentId>>,
    pub tasks: Option<Vec<Task>>,
    pub timeline: Option<Timeline>,
}

impl MissionDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(mut self, status: MissionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn with_agent(mut self, agent: AgentId) -> Self {
        self.agents.get_or_insert_with(Vec::new).push(agent);
        self
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.get_or_insert_with(Vec::new).push(task);
        self
    }

    pub fn with_timeline(mut self, timeline: Timeline) -> Self {
        self.timeline = Some(timeline);
        self
    }
}

/// Partial update. Present fields replace the stored value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionPatch {
    pub title: Option<String>,
    pub status: Option<MissionStatus>,
    pub priority: Option<Priority>,
    pub progress: Option<Progress>,
    pub agents: Option<Vec<AgentId>>,
    pub tasks: Option<Vec<Task>>,
    pub timeline: Option<Timeline>,
}

impl MissionPatch {
    pub fn status(status: MissionStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn progress(progress: Progress) -> Self {
        Self {
            progress: Some(progress),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Mission - The record tracked by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    id: MissionId,
    title: String,
    status: MissionStatus,
    priority: Priority,
    progress: Progress,
    agents: Vec<AgentId>,
    tasks: Vec<Task>,
    timeline: Timeline,
}

impl Mission {
    /// Build a mission from defaults overlaid with the draft.
    ///
    /// `now` becomes `timeline.start` unless the draft brings its own timeline.
    pub fn from_draft(id: MissionId, draft: MissionDraft, now: Timestamp) -> Self {
        Self {
            id,
            title: draft.title.unwrap_or_default(),
            status: draft.status.unwrap_or_default(),
            priority: draft.priority.unwrap_or_default(),
            progress: draft.progress.unwrap_or_default(),
            agents: draft.agents.unwrap_or_default(),
            tasks: draft.tasks.unwrap_or_default(),
            timeline: draft.timeline.unwrap_or_else(|| Timeline::starting_at(now)),
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> &MissionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> MissionStatus {
        self.status
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn agents(&self) -> &[AgentId] {
        &self.agents
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    // ========== Mutations ==========

    /// Shallow merge. `id` is never touched.
    pub fn apply(&mut self, patch: MissionPatch) {
        let MissionPatch {
            title,
            status,
            priority,
            progress,
            agents,
            tasks,
            timeline,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(priority) = priority {
            self.priority = priority;
        }
        if let Some(progress) = progress {
            self.progress = progress;
        }
        if let Some(agents) = agents {
            self.agents = agents;
        }
        if let Some(tasks) = tasks {
            self.tasks = tasks;
        }
        if let Some(timeline) = timeline {
            self.timeline = timeline;
        }
    }
}

/// Errors raised while building Mission values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissionError {
    ProgressOutOfRange { value: u32 },
}

impl core::fmt::Display for MissionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MissionError::ProgressOutOfRange { value } => {
                write!(f, "Progress must be between 0 and 100, got {}", value)
            }
        }
    }
}

impl std::error::Error for MissionError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Timestamp {
        Timestamp::new("2024-01-01T00:00:00Z")
    }

    #[test]
    fn test_draft_defaults() {
        let mission = Mission::from_draft(MissionId::new("m2"), MissionDraft::titled("X"), now());

        assert_eq!(mission.title(), "X");
        assert_eq!(mission.status(), MissionStatus::Pending);
        assert_eq!(mission.priority(), Priority::Medium);
        assert_eq!(mission.progress().value(), 0);
        assert!(mission.agents().is_empty());
        assert!(mission.tasks().is_empty());
        assert_eq!(mission.timeline().start, now());
        assert_eq!(mission.timeline().estimated_completion, None);
    }

    #[test]
    fn test_draft_overlays_defaults() {
        let timeline = Timeline {
            start: Timestamp::new("2023-06-01T00:00:00Z"),
            estimated_completion: Some(Timestamp::new("2023-07-01T00:00:00Z")),
        };
        let draft = MissionDraft::titled("Survey")
            .with_status(MissionStatus::Active)
            .with_priority(Priority::High)
            .with_agent(AgentId::new("agent-1"))
            .with_task(Task::new("t1", "Scan", MissionStatus::Pending))
            .with_timeline(timeline.clone());

        let mission = Mission::from_draft(MissionId::new("m9"), draft, now());

        assert_eq!(mission.status(), MissionStatus::Active);
        assert_eq!(mission.priority(), Priority::High);
        assert_eq!(mission.agents(), &[AgentId::new("agent-1")]);
        assert_eq!(mission.tasks().len(), 1);
        assert_eq!(mission.timeline(), &timeline);
    }

    #[test]
    fn test_patch_is_shallow_merge() {
        let mut mission = Mission::from_draft(
            MissionId::new("m1"),
            MissionDraft::titled("Alpha")
                .with_status(MissionStatus::InProgress)
                .with_progress(Progress::new(65).unwrap())
                .with_agent(AgentId::new("agent-1"))
                .with_agent(AgentId::new("agent-2")),
            now(),
        );
        let before = mission.clone();

        mission.apply(MissionPatch::status(MissionStatus::Completed));

        assert_eq!(mission.status(), MissionStatus::Completed);
        assert_eq!(mission.id(), before.id());
        assert_eq!(mission.title(), before.title());
        assert_eq!(mission.progress(), before.progress());
        assert_eq!(mission.agents(), before.agents());
        assert_eq!(mission.timeline(), before.timeline());

        // Collections are replaced, not appended to
        mission.apply(MissionPatch {
            agents: Some(vec![AgentId::new("agent-3")]),
            ..MissionPatch::default()
        });
        assert_eq!(mission.agents(), &[AgentId::new("agent-3")]);
    }

    #[test]
    fn test_any_status_transition_allowed() {
        let mut mission = Mission::from_draft(MissionId::new("m1"), MissionDraft::default(), now());

        for status in MissionStatus::all() {
            mission.apply(MissionPatch::status(*status));
            assert_eq!(mission.status(), *status);
        }
        mission.apply(MissionPatch::status(MissionStatus::Pending));
        assert_eq!(mission.status(), MissionStatus::Pending);
    }

    #[test]
    fn test_status_tags() {
        assert_eq!(MissionStatus::InProgress.as_tag(), "in-progress");
        assert_eq!(MissionStatus::from_tag("paused"), Some(MissionStatus::Paused));
        assert_eq!(MissionStatus::from_tag("idle"), None);
        assert_eq!(Priority::from_tag("low"), Some(Priority::Low));
        assert_eq!(Priority::from_tag("urgent"), None);
    }

    #[test]
    fn test_progress_range() {
        assert_eq!(Progress::new(100).unwrap().value(), 100);
        assert_eq!(
            Progress::new(101),
            Err(MissionError::ProgressOutOfRange { value: 101 })
        );
    }
}
