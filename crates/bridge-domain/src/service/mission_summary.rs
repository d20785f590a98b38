//! Mission Summary - Aggregate figures for the bridge overview

use crate::model::mission::{Mission, MissionStatus};
use crate::repository::mission_repository::{MissionRepository, RepositoryError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MissionSummary {
    pub total: usize,
    /// One entry per status, in `MissionStatus::all()` order
    pub by_status: Vec<(MissionStatus, usize)>,
    /// Mean progress, rounded down. Zero when there are no missions.
    pub average_progress: u8,
}

impl MissionSummary {
    pub fn from_missions(missions: &[Mission]) -> Self {
        let by_status = MissionStatus::all()
            .iter()
            .map(|status| {
                let n = missions.iter().filter(|m| m.status() == *status).count();
                (*status, n)
            })
            .collect();

        let average_progress = if missions.is_empty() {
            0
        } else {
            let sum: usize = missions.iter().map(|m| m.progress().value() as usize).sum();
            (sum / missions.len()) as u8
        };

        Self {
            total: missions.len(),
            by_status,
            average_progress,
        }
    }

    /// Per-status counts come from the repository
    pub fn from_repository(repo: &dyn MissionRepository) -> Result<Self, RepositoryError> {
        let by_status = MissionStatus::all()
            .iter()
            .map(|status| Ok((*status, repo.count_by_status(*status)?)))
            .collect::<Result<Vec<_>, RepositoryError>>()?;

        let missions = repo.list_all()?;
        Ok(Self {
            total: missions.len(),
            by_status,
            average_progress: Self::from_missions(&missions).average_progress,
        })
    }

    pub fn count(&self, status: MissionStatus) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}
