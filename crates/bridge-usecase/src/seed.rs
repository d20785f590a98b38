//! Demonstration data for a fresh session

use bridge_domain::{
    AgentId, Mission, MissionDraft, MissionId, MissionStatus, Priority, Progress, Task, Timeline,
    Timestamp,
};

/// Id of the seeded demonstration mission
pub const DEMO_MISSION_ID: &str = "m1";

/// The missions every new session starts with
pub fn demo_missions() -> Vec<Mission> {
    let draft = MissionDraft::titled("Content Optimization Alpha")
        .with_status(MissionStatus::InProgress)
        .with_priority(Priority::High)
        .with_progress(Progress::new(65).unwrap_or_default())
        .with_agent(AgentId::new("agent-1"))
        .with_agent(AgentId::new("agent-2"))
        .with_timeline(Timeline {
            start: Timestamp::new("2024-01-01T00:00:00Z"),
            estimated_completion: Some(Timestamp::new("2024-01-15T00:00:00Z")),
        })
        .with_task(Task::new("t1", "Analyze Content", MissionStatus::Completed))
        .with_task(Task::new(
            "t2",
            "Generate Recommendations",
            MissionStatus::InProgress,
        ))
        .with_task(Task::new("t3", "Implement Changes", MissionStatus::Pending));

    let start = Timestamp::new("2024-01-01T00:00:00Z");
    vec![Mission::from_draft(MissionId::new(DEMO_MISSION_ID), draft, start)]
}
