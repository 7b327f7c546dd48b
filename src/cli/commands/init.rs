use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command: write a default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = cli
            .config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file);

        if path.exists() && !force {
            info(format!(
                "Configuration already present: {} (use --force to reset it)",
                path.display()
            ));
            return Ok(());
        }

        Config::init(&path)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
