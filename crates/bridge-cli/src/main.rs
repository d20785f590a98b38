//! Bridge CLI - Mission console for the bridge dashboard
//!
//! Usage:
//!   bridge                    - Start interactive mode
//!   bridge console            - Start interactive mode
//!   bridge demo               - Run a scripted mission session
//!   bridge views              - List the console views

use std::path::PathBuf;

use bridge_adapter::BridgeConfig;
use bridge_cli::commands::{DemoCommand, ViewsCommand};
use bridge_cli::interactive::InteractiveCli;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bridge")]
#[command(about = "Bridge - Mission and agent status console")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (.json, .yaml or .yml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print missions as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive console session
    Console,
    /// Scripted mission session
    Demo(DemoCommand),
    /// List views
    Views(ViewsCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = BridgeConfig::load(cli.config.as_deref())?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Demo(cmd)) => cmd.run(&config, cli.json),
        Some(Commands::Views(cmd)) => cmd.run(),
        Some(Commands::Console) | None => InteractiveCli::new(&config, cli.json).run(),
    }
}
