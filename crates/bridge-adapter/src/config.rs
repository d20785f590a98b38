//! Configuration for the bridge console

use std::path::Path;

use serde::{Deserialize, Serialize};

use bridge_domain::{Clock, MissionIdGenerator};
use bridge_usecase::seed::demo_missions;
use bridge_usecase::{MissionProvider, MissionStore};

use crate::clock::SystemClock;
use crate::error::{AdapterError, Result};
use crate::identity::{SequentialIdGenerator, UuidIdGenerator};
use crate::repository::in_memory::InMemoryMissionRepository;

/// How new mission ids are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `m2`, `m3`, ...
    #[default]
    Sequential,
    /// `m-<uuid>`
    Uuid,
}

/// Console configuration (`bridge.json` / `bridge.yaml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BridgeConfig {
    pub id_strategy: IdStrategy,

    /// Start the session with the demonstration mission
    pub seed_demo: bool,

    /// View tag shown at startup
    pub default_view: String,

    pub sidebar_open: bool,

    /// Used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            seed_demo: true,
            default_view: "bridge".to_string(),
            sidebar_open: true,
            log_filter: "info".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Load configuration from a JSON or YAML file, chosen by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let config: Self = match extension {
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            other => {
                return Err(AdapterError::Config(format!(
                    "unsupported config format '{}' for {}",
                    other,
                    path.display()
                )))
            }
        };
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// `from_file` when a path is given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Wire a provider over the in-memory adapters
    pub fn build_provider(&self) -> MissionProvider {
        let seed = if self.seed_demo {
            demo_missions()
        } else {
            Vec::new()
        };

        let store = match self.id_strategy {
            IdStrategy::Sequential => new_store(SequentialIdGenerator::default(), SystemClock),
            IdStrategy::Uuid => new_store(UuidIdGenerator, SystemClock),
        };
        MissionProvider::new(store, seed)
    }
}

fn new_store(
    ids: impl MissionIdGenerator + Send + 'static,
    clock: impl Clock + Send + 'static,
) -> MissionStore {
    MissionStore::new(InMemoryMissionRepository::new(), ids, clock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_domain::{MissionDraft, MissionId, MissionPatch, MissionStatus, Priority};
    use std::collections::HashSet;
    use std::io::Write;

    fn write_config(suffix: &str, body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_json_config() {
        let file = write_config(
            ".json",
            r#"{ "idStrategy": "uuid", "seedDemo": false, "sidebarOpen": false }"#,
        );

        let config = BridgeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert!(!config.seed_demo);
        assert!(!config.sidebar_open);
        // Missing keys fall back to defaults
        assert_eq!(config.default_view, "bridge");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_yaml_config() {
        let file = write_config(".yaml", "defaultView: missions\nlogFilter: debug\n");

        let config = BridgeConfig::from_file(file.path()).unwrap();
        assert_eq!(config.default_view, "missions");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_config(".toml", "seedDemo = false");

        assert!(matches!(
            BridgeConfig::from_file(file.path()),
            Err(AdapterError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(
            BridgeConfig::load(Some(path.as_path())),
            Err(AdapterError::Io(_))
        ));
        assert_eq!(BridgeConfig::load(None).unwrap(), BridgeConfig::default());
    }

    #[test]
    fn test_default_provider_runs_session_scenario() {
        let provider = BridgeConfig::default().build_provider();
        let ctx = provider.handle().use_missions().unwrap();
        let m1 = MissionId::new("m1");

        let seeded = ctx.missions().unwrap();
        assert_eq!(seeded.len(), 1);
        assert_eq!(seeded[0].status(), MissionStatus::InProgress);
        assert_eq!(seeded[0].progress().value(), 65);

        let created = ctx
            .create_mission(MissionDraft::titled("New").with_priority(Priority::Medium))
            .unwrap();
        assert_eq!(ctx.missions().unwrap().len(), 2);
        assert_ne!(created.id(), &m1);

        ctx.update_mission(&m1, MissionPatch::status(MissionStatus::Completed))
            .unwrap();
        let m = ctx.get_mission(&m1).unwrap().unwrap();
        assert_eq!(m.status(), MissionStatus::Completed);
        assert_eq!(m.progress().value(), 65);

        ctx.delete_mission(&m1).unwrap();
        assert_eq!(ctx.missions().unwrap(), vec![created]);
    }

    #[test]
    fn test_created_start_is_now() {
        let provider = BridgeConfig::default().build_provider();
        let ctx = provider.context();
        let before = chrono::Utc::now();

        let mission = ctx.create_mission(MissionDraft::titled("X")).unwrap();

        let start = crate::clock::parse_timestamp(&mission.timeline().start).unwrap();
        assert!((start - before).num_seconds().abs() <= 5);
        assert_eq!(mission.status(), MissionStatus::Pending);
        assert_eq!(mission.progress().value(), 0);
        assert!(mission.agents().is_empty());
        assert!(mission.tasks().is_empty());
    }

    #[test]
    fn test_ids_unique_after_deletes_with_real_adapters() {
        for strategy in [IdStrategy::Sequential, IdStrategy::Uuid] {
            let config = BridgeConfig {
                id_strategy: strategy,
                ..BridgeConfig::default()
            };
            let provider = config.build_provider();
            let ctx = provider.context();
            let mut seen: HashSet<MissionId> = HashSet::new();
            seen.insert(MissionId::new("m1"));

            for i in 0..10 {
                let m = ctx.create_mission(MissionDraft::titled(format!("{i}"))).unwrap();
                assert!(seen.insert(m.id().clone()), "id {} reused", m.id());
                if i % 2 == 0 {
                    ctx.delete_mission(m.id()).unwrap();
                }
            }
        }
    }

    #[test]
    fn test_unseeded_provider_starts_empty() {
        let config = BridgeConfig {
            seed_demo: false,
            ..BridgeConfig::default()
        };
        let provider = config.build_provider();
        assert!(provider.context().missions().unwrap().is_empty());
    }
}
