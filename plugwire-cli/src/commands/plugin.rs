//! Plugin inspection commands: info, ping, sources

use anyhow::Result;
use plugwire_api::ExtensionPlugin;
use plugwire_config::{ConfigPluginAdapter, FileConfigPlugin};
use serde_json::json;

/// Print identity and route metadata
pub fn info(plugin: &dyn ExtensionPlugin) -> Result<i32> {
    let out = json!({
        "name": plugin.name(),
        "registry": plugin.registry_name(),
        "routes": plugin.routes(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(0)
}

/// Print the liveness status; exit code follows the status code
pub fn ping(plugin: &dyn ExtensionPlugin) -> Result<i32> {
    let status = plugin.ping();
    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(status.code)
}

/// List configured sources and whether their files exist
pub fn sources(plugin: &ConfigPluginAdapter<FileConfigPlugin>) -> Result<i32> {
    let sources = plugin.inner().sources();
    if sources.is_empty() {
        println!("No sources configured.");
        return Ok(0);
    }

    let width = sources.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, path) in sources {
        let marker = if path.exists() { "" } else { "  (missing)" };
        println!("{:width$}  {}{}", name, path.display(), marker, width = width);
    }
    Ok(0)
}
