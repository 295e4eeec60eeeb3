use super::types::{
    CallSection, DEFAULT_PLUGIN_NAME, PluginSection, PlugwireConfig, RawPluginSection,
    RawPlugwireConfig,
};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project + explicit file)
    ///
    /// An explicit path must exist; the user and project layers are optional.
    pub fn load(explicit: Option<&Path>) -> Result<PlugwireConfig> {
        let mut raw = RawPlugwireConfig::default();

        // Layer 1: User config
        if let Some(user_path) = Self::user_config_path()
            && user_path.exists()
        {
            raw = Self::merge_raw(raw, Self::read_raw(&user_path)?);
        }

        // Layer 2: Project config
        let project_path = Self::project_config_path();
        if project_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(&project_path)?);
        }

        // Layer 3: --config
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            raw = Self::merge_raw(raw, Self::read_raw(path)?);
        }

        Ok(Self::finalize(raw))
    }

    /// Get user config path (platform-specific)
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "plugwire").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get project config path
    /// Can be overridden with PLUGWIRE_PROJECT_CONFIG_DIR env var (useful for isolated e2e tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("PLUGWIRE_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".plugwire/config.toml")
        }
    }

    /// Parse one layer; relative source paths are taken from the file's directory
    fn read_raw(path: &Path) -> Result<RawPlugwireConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut raw: RawPlugwireConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        for source_path in raw.plugin.sources.values_mut() {
            if source_path.is_relative() {
                *source_path = base_dir.join(&*source_path);
            }
        }

        tracing::debug!(
            path = %path.display(),
            sources = raw.plugin.sources.len(),
            "Loaded config layer"
        );
        Ok(raw)
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawPlugwireConfig, overlay: RawPlugwireConfig) -> RawPlugwireConfig {
        let mut sources = base.plugin.sources;
        sources.extend(overlay.plugin.sources);

        RawPlugwireConfig {
            plugin: RawPluginSection {
                name: overlay.plugin.name.or(base.plugin.name),
                validate_json: overlay.plugin.validate_json.or(base.plugin.validate_json),
                sources,
            },
            call: CallSection {
                timeout_secs: overlay.call.timeout_secs.or(base.call.timeout_secs),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawPlugwireConfig) -> PlugwireConfig {
        PlugwireConfig {
            plugin: PluginSection {
                name: raw
                    .plugin
                    .name
                    .unwrap_or_else(|| DEFAULT_PLUGIN_NAME.to_string()),
                validate_json: raw.plugin.validate_json.unwrap_or(true),
                sources: raw.plugin.sources,
            },
            call: raw.call,
        }
    }
}
