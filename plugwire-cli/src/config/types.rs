use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPlugwireConfig {
    #[serde(default)]
    pub plugin: RawPluginSection,

    #[serde(default)]
    pub call: CallSection,
}

/// Plugin section as stored in TOML (optional fields for proper merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPluginSection {
    /// Name the config plugin reports to the host
    pub name: Option<String>,

    /// Reject source files that are not valid JSON
    pub validate_json: Option<bool>,

    /// Source name -> file path
    #[serde(default)]
    pub sources: BTreeMap<String, PathBuf>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlugwireConfig {
    #[serde(default)]
    pub plugin: PluginSection,

    #[serde(default)]
    pub call: CallSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginSection {
    /// Name the config plugin reports to the host
    pub name: String,

    /// Reject source files that are not valid JSON
    pub validate_json: bool,

    /// Source name -> file path
    #[serde(default)]
    pub sources: BTreeMap<String, PathBuf>,
}

impl Default for PluginSection {
    fn default() -> Self {
        Self {
            name: DEFAULT_PLUGIN_NAME.to_string(),
            validate_json: true,
            sources: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CallSection {
    /// Deadline for a single call, unbounded when unset
    pub timeout_secs: Option<u64>,
}

/// Plugin name used when no config names one
pub const DEFAULT_PLUGIN_NAME: &str = "plugwire";
