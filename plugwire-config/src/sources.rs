//! Ready-made config plugins: in-memory and file backed

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use plugwire_api::{CallContext, ConfigMap, PluginError};

use crate::ConfigPlugin;

/// Serves the same fixed set of documents on every call
#[derive(Debug, Clone)]
pub struct StaticConfigPlugin {
    name: String,
    configs: ConfigMap,
}

impl StaticConfigPlugin {
    pub fn new(name: impl Into<String>, configs: ConfigMap) -> Self {
        Self {
            name: name.into(),
            configs,
        }
    }

    pub fn configs(&self) -> &ConfigMap {
        &self.configs
    }
}

#[async_trait]
impl ConfigPlugin for StaticConfigPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate_configs(&self, _ctx: &CallContext) -> Result<ConfigMap, PluginError> {
        Ok(self.configs.clone())
    }
}

/// Reads each config source from a file on every call.
///
/// Sources are read in registration order; the first failure aborts the call
/// so the host never sees a partial set.
#[derive(Debug, Clone)]
pub struct FileConfigPlugin {
    name: String,
    sources: Vec<(String, PathBuf)>,
    validate_json: bool,
}

/// Builder for [`FileConfigPlugin`]
#[derive(Debug)]
pub struct FileConfigPluginBuilder {
    name: String,
    sources: Vec<(String, PathBuf)>,
    validate_json: bool,
}

impl FileConfigPlugin {
    pub fn builder(name: impl Into<String>) -> FileConfigPluginBuilder {
        FileConfigPluginBuilder {
            name: name.into(),
            sources: Vec::new(),
            validate_json: false,
        }
    }

    /// Registered sources as (name, path) pairs
    pub fn sources(&self) -> &[(String, PathBuf)] {
        &self.sources
    }

    pub fn validates_json(&self) -> bool {
        self.validate_json
    }

    async fn read_source(&self, source_name: &str, path: &Path) -> Result<String, PluginError> {
        tracing::debug!(plugin = %self.name, source = %source_name, path = %path.display(), "Reading config source");

        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            PluginError::source(source_name, format!("{}: {}", path.display(), e))
        })?;

        if self.validate_json {
            serde_json::from_str::<serde_json::Value>(&contents).map_err(|e| {
                PluginError::source(source_name, format!("invalid JSON: {e}"))
            })?;
        }

        Ok(contents)
    }
}

impl FileConfigPluginBuilder {
    /// Register `path` under `source_name`.
    ///
    /// Returns error if the source name is already registered.
    pub fn source(
        mut self,
        source_name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Result<Self, PluginError> {
        let source_name = source_name.into();
        if self.sources.iter().any(|(name, _)| *name == source_name) {
            return Err(PluginError::DuplicateSource(source_name));
        }
        self.sources.push((source_name, path.into()));
        Ok(self)
    }

    /// Reject files whose contents do not parse as JSON
    pub fn validate_json(mut self, validate: bool) -> Self {
        self.validate_json = validate;
        self
    }

    pub fn build(self) -> FileConfigPlugin {
        FileConfigPlugin {
            name: self.name,
            sources: self.sources,
            validate_json: self.validate_json,
        }
    }
}

#[async_trait]
impl ConfigPlugin for FileConfigPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate_configs(&self, ctx: &CallContext) -> Result<ConfigMap, PluginError> {
        let mut configs = ConfigMap::with_capacity(self.sources.len());
        for (source_name, path) in &self.sources {
            let contents = ctx.run(self.read_source(source_name, path)).await??;
            configs.insert(source_name.clone(), contents);
        }
        Ok(configs)
    }
}
