//! bridge views command

use clap::Args;

use crate::render;

#[derive(Debug, Args)]
pub struct ViewsCommand {}

impl ViewsCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout();
        render::views(&mut stdout, None)
    }
}
