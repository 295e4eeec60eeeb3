use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

use config::ConfigLoader;

#[derive(Parser)]
#[command(name = "plugwire", about = "Drive a config plugin through the extension plugin surface")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Extra config file layered over user and project config
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Plugin(commands::PluginCommands),
    /// Inspect configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ConfigLoader::load(cli.config.as_deref())?;

    let code = match cli.command {
        Commands::Plugin(command) => commands::run_plugin_command(&config, command).await?,
        Commands::Config(args) => commands::config::run(&config, args)?,
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
