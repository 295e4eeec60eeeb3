pub mod call;
pub mod config;
pub mod plugin;

use anyhow::Result;
use clap::Subcommand;
use plugwire_api::ExtensionPlugin;
use plugwire_config::{ConfigPluginAdapter, FileConfigPlugin, new_config_plugin};

use crate::config::PlugwireConfig;

/// Commands that drive the configured plugin
#[derive(Subcommand)]
pub enum PluginCommands {
    /// Show plugin name, registry and routes
    Info,
    /// Check plugin liveness
    Ping,
    /// List configured config sources
    Sources,
    /// Dispatch a request to the plugin and print the response
    Call(call::CallArgs),
}

/// Build the plugin, run `command` against it, then shut it down.
///
/// Returns the exit code for the process.
pub async fn run_plugin_command(config: &PlugwireConfig, command: PluginCommands) -> Result<i32> {
    let plugin = build_plugin(config)?;
    let code = match command {
        PluginCommands::Info => plugin::info(&plugin)?,
        PluginCommands::Ping => plugin::ping(&plugin)?,
        PluginCommands::Sources => plugin::sources(&plugin)?,
        PluginCommands::Call(args) => call::run(&plugin, args, config.call.timeout_secs).await?,
    };
    plugin.shutdown();
    Ok(code)
}

/// Build the file-backed config plugin described by `config`, wrapped for dispatch
pub fn build_plugin(config: &PlugwireConfig) -> Result<ConfigPluginAdapter<FileConfigPlugin>> {
    let mut builder = FileConfigPlugin::builder(&config.plugin.name)
        .validate_json(config.plugin.validate_json);
    for (name, path) in &config.plugin.sources {
        builder = builder.source(name, path)?;
    }

    if config.plugin.sources.is_empty() {
        tracing::warn!(plugin = %config.plugin.name, "No config sources configured");
    }

    Ok(new_config_plugin(builder.build()))
}
