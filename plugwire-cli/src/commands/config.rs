//! Configuration inspection commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::{ConfigLoader, PlugwireConfig};

/// Config arguments
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective (merged) configuration
    Show,
    /// Show where configuration is read from
    Path,
}

/// Run config command
pub fn run(config: &PlugwireConfig, args: ConfigArgs) -> Result<i32> {
    match args.command {
        ConfigCommands::Show => {
            print!("{}", toml::to_string_pretty(config)?);
        }
        ConfigCommands::Path => {
            match ConfigLoader::user_config_path() {
                Some(path) => println!("User config:    {}", path.display()),
                None => println!("User config:    (unavailable)"),
            }
            println!(
                "Project config: {}",
                ConfigLoader::project_config_path().display()
            );
        }
    }
    Ok(0)
}
