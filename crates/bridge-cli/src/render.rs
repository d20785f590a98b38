//! Plain-text output for missions and screens

use std::io::Write;

use bridge_adapter::dto::missions_to_json;
use bridge_domain::{Mission, MissionStatus, MissionSummary, Priority, Screen, View, ViewSelection};
use console::style;

pub fn mission_line(mission: &Mission) -> String {
    let status = match mission.status() {
        MissionStatus::Completed => style(mission.status().as_tag()).green(),
        MissionStatus::Stopped | MissionStatus::Paused => style(mission.status().as_tag()).yellow(),
        _ => style(mission.status().as_tag()).cyan(),
    };
    let priority = match mission.priority() {
        Priority::High => style(mission.priority().as_tag()).red(),
        _ => style(mission.priority().as_tag()).dim(),
    };

    format!(
        "{:<8} {:<32} {:<12} {:<7} {:>4}  agents:{} tasks:{}",
        mission.id().as_str(),
        mission.title(),
        status,
        priority,
        mission.progress().to_string(),
        mission.agents().len(),
        mission.tasks().len(),
    )
}

pub fn mission_detail(out: &mut dyn Write, mission: &Mission) -> anyhow::Result<()> {
    writeln!(out, "{}", mission_line(mission))?;
    writeln!(out, "  started:  {}", mission.timeline().start)?;
    if let Some(eta) = &mission.timeline().estimated_completion {
        writeln!(out, "  eta:      {}", eta)?;
    }
    if !mission.agents().is_empty() {
        let agents: Vec<&str> = mission.agents().iter().map(|a| a.as_str()).collect();
        writeln!(out, "  agents:   {}", agents.join(", "))?;
    }
    for task in mission.tasks() {
        writeln!(out, "  - [{}] {} ({})", task.status, task.title, task.id.as_str())?;
    }
    Ok(())
}

pub fn missions(out: &mut dyn Write, missions: &[Mission], json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", missions_to_json(missions)?)?;
        return Ok(());
    }
    if missions.is_empty() {
        writeln!(out, "No missions.")?;
    }
    for mission in missions {
        writeln!(out, "{}", mission_line(mission))?;
    }
    Ok(())
}

pub fn summary(out: &mut dyn Write, summary: &MissionSummary) -> anyhow::Result<()> {
    writeln!(
        out,
        "{} missions, average progress {}%",
        summary.total, summary.average_progress
    )?;
    for (status, n) in summary.by_status.iter().filter(|(_, n)| *n > 0) {
        writeln!(out, "  {:<12} {}", status.as_tag(), n)?;
    }
    Ok(())
}

/// The sidebar catalogue, marking the current selection
pub fn views(out: &mut dyn Write, current: Option<&ViewSelection>) -> anyhow::Result<()> {
    for view in View::all() {
        let marker = match current {
            Some(ViewSelection::Known(v)) if v == view => ">",
            _ => " ",
        };
        writeln!(
            out,
            "{} {:<10} {:<16} {}",
            marker,
            view.tag(),
            view.label(),
            style(view.description()).dim()
        )?;
    }
    Ok(())
}

/// Header line plus whatever body the screen has
pub fn screen(
    out: &mut dyn Write,
    screen: &Screen,
    missions_now: &[Mission],
    json: bool,
) -> anyhow::Result<()> {
    writeln!(out, "{}", style(screen.title()).bold())?;
    match screen {
        Screen::Bridge => {
            summary(out, &MissionSummary::from_missions(missions_now))?;
            writeln!(out, "(/missions opens Mission Control)")?;
        }
        Screen::MissionControl => self::missions(out, missions_now, json)?,
        Screen::AgentLogs => writeln!(out, "{}", View::Logs.description())?,
        Screen::Chat => writeln!(out, "{}", View::Chat.description())?,
        Screen::UnderConstruction { .. } => writeln!(out, "This view is under development...")?,
    }
    Ok(())
}
