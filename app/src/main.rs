//! EventDesk command line
//!
//! Loads the route configuration, validates it, then replays navigations
//! against an in-memory history, printing one JSON result per step.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use eventdesk_core::{App, Config, HistoryMode};

#[derive(Parser, Debug)]
#[command(name = "eventdesk", version, about = "Resolve front-end routes for the event desk")]
struct Cli {
    /// JSON configuration file (built-in route table when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Represent paths in the URL fragment (`/#/booth`)
    #[arg(long)]
    hash: bool,

    /// Print the route table and proxy prefixes instead of navigating
    #[arg(long)]
    routes: bool,

    /// Paths to navigate to, in order; `back` presses the back button
    paths: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    eventdesk_core::init_logging();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    if cli.hash {
        config.history_mode = HistoryMode::Hash;
    }

    let app = App::in_memory(&config).context("invalid route configuration")?;

    if cli.routes {
        return print_json(&commands::routes(&app));
    }

    print_json(&commands::start(&app))?;
    for path in &cli.paths {
        match path.as_str() {
            "back" => print_json(&commands::back(&app))?,
            _ => print_json(&commands::navigate(&app, path))?,
        }
    }

    tracing::debug!(steps = cli.paths.len(), "Navigation replay finished");

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
