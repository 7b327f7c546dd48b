use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = &cli.command {
        let file = cli
            .config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file);

        if *path {
            println!("{}", file.display());
        }

        // print is the default action
        if *print_config || !*path {
            println!("📄 Current configuration ({}):\n", file.display());
            println!("{}", cfg.to_yaml()?);
        }
    }
    Ok(())
}
