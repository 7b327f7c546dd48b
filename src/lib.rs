//! rSchedule library root.
//! Exposes the time parser, schedule model, layout engine and PDF renderer,
//! plus the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::generate::{GenerateRequest, Generated, generate};
pub use crate::core::layout::{Geometry, Layout, Warning, assign_lanes, layout};
pub use crate::core::schedule::{ScheduleModel, Snapshot};
pub use crate::utils::time::parse_time;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Generate { .. } => cli::commands::generate::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ init must work even when the existing file is broken
    if matches!(cli.command, Commands::Init { .. }) {
        return dispatch(&cli, &Config::default());
    }

    // 3️⃣ load config once, honoring --config
    let path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load(&path)?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
