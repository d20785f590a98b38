//! Test doubles for the domain ports

use bridge_domain::{
    Clock, Mission, MissionId, MissionIdGenerator, MissionRepository, RepositoryError, Timestamp,
};

use crate::seed::demo_missions;
use crate::store::MissionStore;

pub const NOW: &str = "2024-03-01T12:00:00Z";

#[derive(Default)]
pub struct VecRepo {
    missions: Vec<Mission>,
}

impl MissionRepository for VecRepo {
    fn insert(&mut self, mission: Mission) -> Result<(), RepositoryError> {
        if self.missions.iter().any(|m| m.id() == mission.id()) {
            return Err(RepositoryError::Duplicate {
                id: mission.id().to_string(),
            });
        }
        self.missions.push(mission);
        Ok(())
    }

    fn replace(&mut self, mission: &Mission) -> Result<(), RepositoryError> {
        match self.missions.iter_mut().find(|m| m.id() == mission.id()) {
            Some(slot) => {
                *slot = mission.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound {
                id: mission.id().to_string(),
            }),
        }
    }

    fn remove(&mut self, id: &MissionId) -> Result<Option<Mission>, RepositoryError> {
        let pos = self.missions.iter().position(|m| m.id() == id);
        Ok(pos.map(|i| self.missions.remove(i)))
    }

    fn find_by_id(&self, id: &MissionId) -> Result<Option<Mission>, RepositoryError> {
        Ok(self.missions.iter().find(|m| m.id() == id).cloned())
    }

    fn list_all(&self) -> Result<Vec<Mission>, RepositoryError> {
        Ok(self.missions.clone())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.missions.len())
    }
}

/// `m1`, `m2`, ... starting from one
#[derive(Default)]
pub struct Counter(u64);

impl MissionIdGenerator for Counter {
    fn next_id(&mut self) -> MissionId {
        self.0 += 1;
        MissionId::new(format!("m{}", self.0))
    }
}

pub struct StoppedClock;

impl Clock for StoppedClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(NOW)
    }
}

pub fn empty_store() -> MissionStore {
    MissionStore::new(VecRepo::default(), Counter::default(), StoppedClock)
}

pub fn seeded_store() -> MissionStore {
    let mut store = empty_store();
    store.seed(demo_missions()).unwrap();
    store
}
