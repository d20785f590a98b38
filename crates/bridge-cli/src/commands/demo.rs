//! bridge demo command
//!
//! Plays a short scripted session against a fresh provider:
//! create a mission, complete the seeded one, then delete it.

use std::io::Write;

use bridge_adapter::BridgeConfig;
use bridge_domain::{MissionDraft, MissionId, MissionPatch, MissionStatus, Priority};
use bridge_usecase::seed::DEMO_MISSION_ID;
use clap::Args;
use tracing::info;

use crate::render;

#[derive(Debug, Args)]
pub struct DemoCommand {
    /// Title for the mission the demo creates
    #[arg(long, default_value = "New")]
    pub title: String,
}

impl DemoCommand {
    pub fn run(&self, config: &BridgeConfig, json: bool) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout();
        self.run_to(config, json, &mut stdout)
    }

    pub fn run_to(
        &self,
        config: &BridgeConfig,
        json: bool,
        out: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let provider = config.build_provider();
        let missions = provider.handle().use_missions()?;
        // Whether the demo mission is present depends on the config
        let seeded = missions
            .get_mission(&MissionId::new(DEMO_MISSION_ID))?
            .map(|m| m.id().clone());

        info!(count = missions.missions()?.len(), "Session started");

        let created = missions.create_mission(
            MissionDraft::titled(self.title.as_str()).with_priority(Priority::Medium),
        )?;
        info!(mission_id = %created.id(), "Created mission");

        if let Some(seeded) = seeded {
            if let Some(m) =
                missions.update_mission(&seeded, MissionPatch::status(MissionStatus::Completed))?
            {
                info!(mission_id = %m.id(), progress = m.progress().value(), "Completed seeded mission");
            }
            missions.delete_mission(&seeded)?;
            info!(remaining = missions.missions()?.len(), "Deleted seeded mission");
        }

        render::missions(out, &missions.missions()?, json)
    }
}
