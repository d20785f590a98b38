//! Wire shapes for missions
//!
//! The domain types carry no serde derives, so everything that crosses
//! a JSON boundary goes through these DTOs. Status and priority travel as
//! their lowercase tags (`in-progress`, `high`).

use serde::{Deserialize, Serialize};

use bridge_domain::{
    AgentId, Mission, MissionDraft, MissionPatch, MissionStatus, Priority, Progress, Task, TaskId,
    Timeline, Timestamp,
};

use crate::error::{AdapterError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDto {
    pub id: String,
    pub title: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineDto {
    pub start: String,
    #[serde(default)]
    pub estimated_completion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionDto {
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub progress: u8,
    pub agents: Vec<String>,
    pub tasks: Vec<TaskDto>,
    pub timeline: TimelineDto,
}

/// Fields a caller may set; used for both create and update payloads.
///
/// `id` is not part of this shape, so a payload carrying one is rejected
/// rather than silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MissionFieldsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<TaskDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<TimelineDto>,
}

pub fn parse_status(tag: &str) -> Result<MissionStatus> {
    MissionStatus::from_tag(tag).ok_or_else(|| AdapterError::InvalidStatus(tag.to_string()))
}

pub fn parse_priority(tag: &str) -> Result<Priority> {
    Priority::from_tag(tag).ok_or_else(|| AdapterError::InvalidPriority(tag.to_string()))
}

impl From<&Mission> for MissionDto {
    fn from(mission: &Mission) -> Self {
        Self {
            id: mission.id().to_string(),
            title: mission.title().to_string(),
            status: mission.status().as_tag().to_string(),
            priority: mission.priority().as_tag().to_string(),
            progress: mission.progress().value(),
            agents: mission.agents().iter().map(|a| a.to_string()).collect(),
            tasks: mission.tasks().iter().map(TaskDto::from).collect(),
            timeline: TimelineDto::from(mission.timeline()),
        }
    }
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.as_str().to_string(),
            title: task.title.clone(),
            status: task.status.as_tag().to_string(),
        }
    }
}

impl From<&Timeline> for TimelineDto {
    fn from(timeline: &Timeline) -> Self {
        Self {
            start: timeline.start.to_string(),
            estimated_completion: timeline.estimated_completion.as_ref().map(|t| t.to_string()),
        }
    }
}

impl TryFrom<TaskDto> for Task {
    type Error = AdapterError;

    fn try_from(dto: TaskDto) -> Result<Self> {
        Ok(Task {
            id: TaskId::new(dto.id),
            title: dto.title,
            status: parse_status(&dto.status)?,
        })
    }
}

impl From<TimelineDto> for Timeline {
    fn from(dto: TimelineDto) -> Self {
        Timeline {
            start: Timestamp::new(dto.start),
            estimated_completion: dto.estimated_completion.map(Timestamp::new),
        }
    }
}

impl TryFrom<MissionFieldsDto> for MissionPatch {
    type Error = AdapterError;

    fn try_from(dto: MissionFieldsDto) -> Result<Self> {
        Ok(MissionPatch {
            title: dto.title,
            status: dto.status.as_deref().map(parse_status).transpose()?,
            priority: dto.priority.as_deref().map(parse_priority).transpose()?,
            progress: dto.progress.map(Progress::new).transpose()?,
            agents: dto
                .agents
                .map(|agents| agents.into_iter().map(AgentId::new).collect()),
            tasks: dto
                .tasks
                .map(|tasks| tasks.into_iter().map(Task::try_from).collect::<Result<_>>())
                .transpose()?,
            timeline: dto.timeline.map(Timeline::from),
        })
    }
}

impl TryFrom<MissionFieldsDto> for MissionDraft {
    type Error = AdapterError;

    fn try_from(dto: MissionFieldsDto) -> Result<Self> {
        let patch = MissionPatch::try_from(dto)?;
        Ok(MissionDraft {
            title: patch.title,
            status: patch.status,
            priority: patch.priority,
            progress: patch.progress,
            agents: patch.agents,
            tasks: patch.tasks,
            timeline: patch.timeline,
        })
    }
}

/// Parse a JSON object of mission fields into a patch
pub fn patch_from_json(json: &str) -> Result<MissionPatch> {
    let dto: MissionFieldsDto = serde_json::from_str(json)?;
    MissionPatch::try_from(dto)
}

/// Pretty JSON array of missions
pub fn missions_to_json(missions: &[Mission]) -> Result<String> {
    let dtos: Vec<MissionDto> = missions.iter().map(MissionDto::from).collect();
    Ok(serde_json::to_string_pretty(&dtos)?)
}
