//! Mission Store - The authoritative set of missions for one session
//!
//! The store owns its ports and never shares them:
//!
//! ```text
//! MissionStore
//!   ├── MissionRepository   (where records live, insertion-ordered)
//!   ├── MissionIdGenerator  (fresh ids, never reused)
//!   └── Clock               (timeline.start for new missions)
//! ```
//!
//! `update` and `delete` on an id that isn't stored are not errors: they
//! return `Ok(None)` and leave the collection untouched, so the caller can
//! tell a miss from a hit without having to handle a failure.

use std::collections::HashSet;

use bridge_domain::{
    Clock, Mission, MissionDraft, MissionId, MissionIdGenerator, MissionPatch, MissionRepository,
    MissionSummary, RepositoryError,
};
use tracing::{debug, info, warn};

use crate::error::Result;

pub struct MissionStore {
    repository: Box<dyn MissionRepository + Send>,
    ids: Box<dyn MissionIdGenerator + Send>,
    clock: Box<dyn Clock + Send>,
    active: Option<MissionId>,
}

impl MissionStore {
    pub fn new(
        repository: impl MissionRepository + Send + 'static,
        ids: impl MissionIdGenerator + Send + 'static,
        clock: impl Clock + Send + 'static,
    ) -> Self {
        Self {
            repository: Box::new(repository),
            ids: Box::new(ids),
            clock: Box::new(clock),
            active: None,
        }
    }

    /// Load records that already carry ids (the session seed)
    ///
    /// All or nothing: if any id repeats or is already stored, nothing is inserted.
    pub fn seed(&mut self, missions: Vec<Mission>) -> Result<()> {
        let mut ids = HashSet::with_capacity(missions.len());
        for mission in &missions {
            if !ids.insert(mission.id()) || self.repository.exists(mission.id())? {
                return Err(RepositoryError::Duplicate {
                    id: mission.id().to_string(),
                }
                .into());
            }
        }

        let n = missions.len();
        for mission in missions {
            self.repository.insert(mission)?;
        }
        debug!(count = n, "Seeded mission store");
        Ok(())
    }

    /// Create a mission from defaults overlaid with `draft`
    pub fn create(&mut self, draft: MissionDraft) -> Result<Mission> {
        let id = self.allocate_id()?;
        let mission = Mission::from_draft(id, draft, self.clock.now());
        self.repository.insert(mission.clone())?;

        info!(mission_id = %mission.id(), title = mission.title(), "Mission created");
        Ok(mission)
    }

    /// Shallow-merge `patch` into the stored mission
    ///
    /// Returns the updated record, or `None` if no mission has this id.
    pub fn update(&mut self, id: &MissionId, patch: MissionPatch) -> Result<Option<Mission>> {
        let Some(mut mission) = self.repository.find_by_id(id)? else {
            warn!(mission_id = %id, "Update ignored: no such mission");
            return Ok(None);
        };

        mission.apply(patch);
        self.repository.replace(&mission)?;

        debug!(mission_id = %id, status = %mission.status(), "Mission updated");
        Ok(Some(mission))
    }

    /// Permanently remove a mission
    ///
    /// Returns the removed record, or `None` if no mission has this id.
    pub fn delete(&mut self, id: &MissionId) -> Result<Option<Mission>> {
        let removed = self.repository.remove(id)?;

        match &removed {
            Some(_) => {
                if self.active.as_ref() == Some(id) {
                    self.active = None;
                }
                info!(mission_id = %id, "Mission deleted");
            }
            None => warn!(mission_id = %id, "Delete ignored: no such mission"),
        }
        Ok(removed)
    }

    pub fn get(&self, id: &MissionId) -> Result<Option<Mission>> {
        Ok(self.repository.find_by_id(id)?)
    }

    /// All missions in insertion order
    pub fn list(&self) -> Result<Vec<Mission>> {
        Ok(self.repository.list_all()?)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.repository.count()?)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Select the mission the console is focused on
    ///
    /// An unknown id clears the selection.
    pub fn set_active_mission(&mut self, id: &MissionId) -> Result<Option<Mission>> {
        let mission = self.repository.find_by_id(id)?;
        self.active = mission.as_ref().map(|m| m.id().clone());
        Ok(mission)
    }

    /// The selected mission as currently stored
    pub fn current_mission(&self) -> Result<Option<Mission>> {
        match &self.active {
            Some(id) => Ok(self.repository.find_by_id(id)?),
            None => Ok(None),
        }
    }

    pub fn summary(&self) -> Result<MissionSummary> {
        Ok(MissionSummary::from_repository(&*self.repository)?)
    }

    fn allocate_id(&mut self) -> Result<MissionId> {
        // Seeded records were not issued by the generator, so skip over them
        loop {
            let id = self.ids.next_id();
            if !self.repository.exists(&id)? {
                return Ok(id);
            }
            debug!(mission_id = %id, "Generated id already stored, drawing another");
        }
    }
}

impl core::fmt::Debug for MissionStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MissionStore")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::seed::demo_missions;
    use crate::testing::{empty_store, seeded_store};
    use bridge_domain::{MissionStatus, Priority, Progress};
    use std::collections::HashSet;

    #[test]
    fn test_create_fills_defaults() {
        let mut store = empty_store();

        let mission = store.create(MissionDraft::titled("X")).unwrap();

        assert_eq!(mission.title(), "X");
        assert_eq!(mission.status(), MissionStatus::Pending);
        assert_eq!(mission.progress().value(), 0);
        assert!(mission.agents().is_empty());
        assert!(mission.tasks().is_empty());
        assert_eq!(mission.timeline().start.as_str(), crate::testing::NOW);
        assert_eq!(store.list().unwrap(), vec![mission]);
    }

    #[test]
    fn test_create_without_title_succeeds() {
        let mut store = empty_store();

        let mission = store.create(MissionDraft::default()).unwrap();
        assert_eq!(mission.title(), "");
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_ids_unique_across_deletes() {
        let mut store = empty_store();
        let mut seen = HashSet::new();

        for round in 0..5 {
            let a = store.create(MissionDraft::titled(format!("a{round}"))).unwrap();
            let b = store.create(MissionDraft::titled(format!("b{round}"))).unwrap();
            assert!(seen.insert(a.id().clone()));
            assert!(seen.insert(b.id().clone()));

            // Shrinking the collection must not lead to an id being handed out again
            store.delete(a.id()).unwrap();
        }

        let ids: HashSet<_> = store.list().unwrap().iter().map(|m| m.id().clone()).collect();
        assert_eq!(ids.len(), store.len().unwrap());
    }

    #[test]
    fn test_create_skips_seeded_ids() {
        let mut store = seeded_store();

        // The fake generator starts at m1, which the seed already uses
        let mission = store.create(MissionDraft::titled("New")).unwrap();
        assert_ne!(mission.id().as_str(), "m1");
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_update_merges_and_preserves() {
        let mut store = seeded_store();
        let id = MissionId::new("m1");
        let before = store.get(&id).unwrap().unwrap();

        let updated = store
            .update(&id, MissionPatch::status(MissionStatus::Completed))
            .unwrap()
            .unwrap();

        assert_eq!(updated.status(), MissionStatus::Completed);
        let after = store.get(&id).unwrap().unwrap();
        assert_eq!(after, updated);
        assert_eq!(after.title(), before.title());
        assert_eq!(after.priority(), before.priority());
        assert_eq!(after.progress(), before.progress());
        assert_eq!(after.agents(), before.agents());
        assert_eq!(after.tasks(), before.tasks());
        assert_eq!(after.timeline(), before.timeline());
    }

    #[test]
    fn test_update_preserves_order() {
        let mut store = seeded_store();
        let second = store.create(MissionDraft::titled("Second")).unwrap();
        let third = store.create(MissionDraft::titled("Third")).unwrap();

        store
            .update(second.id(), MissionPatch::status(MissionStatus::Paused))
            .unwrap();

        let order: Vec<_> = store.list().unwrap().iter().map(|m| m.id().clone()).collect();
        assert_eq!(
            order,
            vec![MissionId::new("m1"), second.id().clone(), third.id().clone()]
        );
    }

    #[test]
    fn test_update_unknown_id_is_reported_noop() {
        let mut store = seeded_store();
        let before = store.list().unwrap();

        let result = store
            .update(&MissionId::new("missing"), MissionPatch::status(MissionStatus::Stopped))
            .unwrap();

        assert_eq!(result, None);
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut once = seeded_store();
        let mut twice = seeded_store();
        let id = MissionId::new("m1");
        let patch = MissionPatch::progress(Progress::new(50).unwrap());

        once.update(&id, patch.clone()).unwrap();
        twice.update(&id, patch.clone()).unwrap();
        twice.update(&id, patch).unwrap();

        assert_eq!(once.list().unwrap(), twice.list().unwrap());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = seeded_store();
        let other = store.create(MissionDraft::titled("Other")).unwrap();
        let id = MissionId::new("m1");

        let removed = store.delete(&id).unwrap();

        assert_eq!(removed.map(|m| m.id().clone()), Some(id.clone()));
        assert_eq!(store.len().unwrap(), 1);
        assert_eq!(store.get(&id).unwrap(), None);
        assert_eq!(store.list().unwrap(), vec![other]);
    }

    #[test]
    fn test_delete_unknown_id_is_reported_noop() {
        let mut store = seeded_store();
        let before = store.list().unwrap();

        assert_eq!(store.delete(&MissionId::new("m404")).unwrap(), None);
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn test_active_mission_tracks_updates_and_deletes() {
        let mut store = seeded_store();
        let id = MissionId::new("m1");

        assert_eq!(store.current_mission().unwrap(), None);
        assert!(store.set_active_mission(&id).unwrap().is_some());

        store
            .update(&id, MissionPatch::status(MissionStatus::Paused))
            .unwrap();
        assert_eq!(
            store.current_mission().unwrap().map(|m| m.status()),
            Some(MissionStatus::Paused)
        );

        store.delete(&id).unwrap();
        assert_eq!(store.current_mission().unwrap(), None);
    }

    #[test]
    fn test_active_mission_unknown_id_clears() {
        let mut store = seeded_store();

        store.set_active_mission(&MissionId::new("m1")).unwrap();
        assert_eq!(store.set_active_mission(&MissionId::new("nope")).unwrap(), None);
        assert_eq!(store.current_mission().unwrap(), None);
    }

    #[test]
    fn test_summary() {
        let mut store = seeded_store();
        store
            .create(MissionDraft::titled("Low").with_priority(Priority::Low))
            .unwrap();

        let summary = store.summary().unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.count(MissionStatus::InProgress), 1);
        assert_eq!(summary.count(MissionStatus::Pending), 1);
    }

    #[test]
    fn test_seed_twice_is_duplicate() {
        let mut store = seeded_store();
        assert!(store.seed(demo_missions()).is_err());
    }

    #[test]
    fn test_seed_with_repeated_id_inserts_nothing() {
        let mut store = empty_store();
        let mut missions = demo_missions();
        missions.extend(demo_missions());

        let err = store.seed(missions).unwrap_err();

        assert_eq!(
            err,
            StoreError::Repository(RepositoryError::Duplicate {
                id: "m1".to_string()
            })
        );
        assert!(store.is_empty().unwrap());
    }
}
