//! Interactive REPL mode
//!
//! One REPL run is one session: the provider and router live exactly as
//! long as the `InteractiveCli` does.

use std::io::{self, BufRead, Write};

use bridge_adapter::dto::{parse_priority, patch_from_json};
use bridge_adapter::BridgeConfig;
use bridge_domain::{MissionDraft, MissionId, ViewRouter};
use bridge_usecase::{MissionHandle, MissionProvider};
use tracing::{info, warn};

use crate::render;

pub struct InteractiveCli {
    // Keeps the session alive; `missions` is a weak handle to it
    _provider: MissionProvider,
    missions: MissionHandle,
    router: ViewRouter,
    json: bool,
    // Offer the dialoguer picker for `/active` without an id
    picker: bool,
}

impl InteractiveCli {
    pub fn new(config: &BridgeConfig, json: bool) -> Self {
        let provider = config.build_provider();
        let missions = provider.handle();
        Self {
            _provider: provider,
            missions,
            router: ViewRouter::starting_at(&config.default_view, config.sidebar_open),
            json,
            picker: console::Term::stdout().is_term(),
        }
    }

    /// Run the interactive REPL on stdin/stdout
    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        println!("Bridge console");
        println!("Type /help for commands, /quit to exit");
        println!();
        self.handle_line("/view", &mut stdout)?;

        loop {
            print!("[{}] > ", self.router.current_view().tag());
            stdout.flush()?;

            let mut input = String::new();
            if stdin.lock().read_line(&mut input)? == 0 {
                break;
            }

            match self.handle_line(input.trim(), &mut stdout) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => println!("Error: {:#}", e),
            }
        }

        Ok(())
    }

    /// Execute one line. Returns `true` when the session should end.
    pub fn handle_line(&mut self, input: &str, out: &mut dyn Write) -> anyhow::Result<bool> {
        if input.is_empty() {
            return Ok(false);
        }
        if !input.starts_with('/') {
            writeln!(out, "Commands start with '/'. Try /help")?;
            return Ok(false);
        }

        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };
        let ctx = self.missions.use_missions()?;

        match cmd {
            "/quit" | "/exit" | "/q" => {
                writeln!(out, "Goodbye!")?;
                return Ok(true);
            }
            "/help" | "/h" => {
                writeln!(out, "Commands:")?;
                writeln!(out, "  /views                 - List views")?;
                writeln!(out, "  /view [tag]            - Switch view, or show the current one")?;
                writeln!(out, "  /sidebar               - Toggle the sidebar")?;
                writeln!(out, "  /missions              - Open Mission Control")?;
                writeln!(out, "  /get <id>              - Show one mission")?;
                writeln!(out, "  /create <title> [prio] - Create a mission")?;
                writeln!(out, "  /update <id> <json>    - Merge fields into a mission")?;
                writeln!(out, "  /delete <id>           - Delete a mission")?;
                writeln!(out, "  /active [id]           - Focus a mission")?;
                writeln!(out, "  /status                - Show session state")?;
                writeln!(out, "  /quit                  - Exit")?;
            }
            "/views" => render::views(out, Some(self.router.current_view()))?,
            "/view" => {
                if !rest.is_empty() {
                    let selection = self.router.set_view(rest);
                    if selection.is_known() {
                        info!(view = rest, "Changing view");
                    } else {
                        warn!(view = rest, "Unknown view, showing placeholder");
                    }
                }
                render::screen(out, &self.router.screen(), &ctx.missions()?, self.json)?;
            }
            "/sidebar" => {
                let open = self.router.toggle_sidebar();
                let layout = self.router.layout();
                writeln!(
                    out,
                    "Sidebar {}{}",
                    if open { "open" } else { "closed" },
                    if layout.control_panel_visible {
                        ", control panel shown"
                    } else {
                        ""
                    }
                )?;
            }
            "/missions" => {
                self.router.open_missions();
                render::screen(out, &self.router.screen(), &ctx.missions()?, self.json)?;
            }
            "/get" => {
                let id = required(rest, "/get <id>")?;
                match ctx.get_mission(&MissionId::new(id))? {
                    Some(mission) if self.json => render::missions(out, &[mission], true)?,
                    Some(mission) => render::mission_detail(out, &mission)?,
                    None => writeln!(out, "No mission '{}'", id)?,
                }
            }
            "/create" => {
                let draft = parse_create(required(rest, "/create <title> [priority]")?);
                let mission = ctx.create_mission(draft)?;
                writeln!(out, "Created {}", render::mission_line(&mission))?;
            }
            "/update" => {
                let (id, json) = required(rest, "/update <id> <json>")?
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| anyhow::anyhow!("usage: /update <id> <json>"))?;
                let patch = patch_from_json(json.trim())?;
                if patch.is_empty() {
                    writeln!(out, "No fields given, nothing updated")?;
                    return Ok(false);
                }
                match ctx.update_mission(&MissionId::new(id), patch)? {
                    Some(mission) => writeln!(out, "Updated {}", render::mission_line(&mission))?,
                    None => writeln!(out, "No mission '{}', nothing updated", id)?,
                }
            }
            "/delete" => {
                let id = required(rest, "/delete <id>")?;
                match ctx.delete_mission(&MissionId::new(id))? {
                    Some(mission) => writeln!(out, "Deleted {}", mission.id())?,
                    None => writeln!(out, "No mission '{}', nothing deleted", id)?,
                }
            }
            "/active" => {
                let id = if rest.is_empty() {
                    let picked = if self.picker {
                        pick_mission(&ctx.missions()?)?
                    } else {
                        None
                    };
                    match picked {
                        Some(id) => id,
                        None => {
                            writeln!(out, "usage: /active <id>")?;
                            return Ok(false);
                        }
                    }
                } else {
                    MissionId::new(rest)
                };
                match ctx.set_active_mission(&id)? {
                    Some(mission) => writeln!(out, "Active: {}", render::mission_line(&mission))?,
                    None => writeln!(out, "No mission '{}', selection cleared", id)?,
                }
            }
            "/status" => {
                let layout = self.router.layout();
                writeln!(out, "Status:")?;
                writeln!(out, "  View:    {}", self.router.current_view().tag())?;
                writeln!(out, "  Sidebar: {}", if layout.sidebar_open { "open" } else { "closed" })?;
                match ctx.current_mission()? {
                    Some(mission) => writeln!(out, "  Active:  {}", mission.id())?,
                    None => writeln!(out, "  Active:  none")?,
                }
                render::summary(out, &ctx.summary()?)?;
            }
            _ => {
                writeln!(out, "Unknown command: {}", cmd)?;
            }
        }

        Ok(false)
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }
}

fn required<'a>(rest: &'a str, usage: &str) -> anyhow::Result<&'a str> {
    if rest.is_empty() {
        anyhow::bail!("usage: {}", usage);
    }
    Ok(rest)
}

/// `<title words...> [priority]`; a trailing priority tag is split off
fn parse_create(args: &str) -> MissionDraft {
    if let Some((title, last)) = args.rsplit_once(char::is_whitespace) {
        if let Ok(priority) = parse_priority(last) {
            return MissionDraft::titled(title.trim()).with_priority(priority);
        }
    }
    MissionDraft::titled(args)
}

fn pick_mission(missions: &[bridge_domain::Mission]) -> anyhow::Result<Option<MissionId>> {
    if missions.is_empty() {
        return Ok(None);
    }
    let items: Vec<String> = missions.iter().map(render::mission_line).collect();
    let choice = dialoguer::Select::new()
        .with_prompt("Select mission")
        .items(&items)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|i| missions[i].id().clone()))
}
