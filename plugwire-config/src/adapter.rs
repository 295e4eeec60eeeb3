//! Adapter exposing a [`ConfigPlugin`] through the generic extension surface

use async_trait::async_trait;
use plugwire_api::{
    CallContext, ExtensionPlugin, ExtensionResponse, ExtensionStatus, PluginRequest,
    PluginResponse, RegistryName,
};

use crate::ConfigPlugin;

/// Request key holding the action discriminator
pub const REQUEST_ACTION_KEY: &str = "action";

/// Action value asking for the configuration to be generated
pub const GEN_CONFIG_ACTION: &str = "genConfig";

/// Status message prefix when generation fails
pub const GENERATE_ERROR_PREFIX: &str = "error getting config: ";

/// Status message prefix for unrecognised actions
pub const UNKNOWN_ACTION_PREFIX: &str = "unknown action: ";

/// Action selected by a request's discriminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GenConfig,
    /// Anything else, holding the raw value (empty when the key is absent)
    Unknown(String),
}

impl Action {
    pub fn from_request(request: &PluginRequest) -> Self {
        match request.get(REQUEST_ACTION_KEY).map(String::as_str) {
            Some(GEN_CONFIG_ACTION) => Action::GenConfig,
            Some(other) => Action::Unknown(other.to_string()),
            None => Action::Unknown(String::new()),
        }
    }
}

/// Wraps a [`ConfigPlugin`] so a host can drive it as an [`ExtensionPlugin`].
///
/// Holds nothing but the wrapped plugin: every `genConfig` call goes straight
/// to [`ConfigPlugin::generate_configs`] and nothing is cached.
#[derive(Debug, Clone)]
pub struct ConfigPluginAdapter<P> {
    plugin: P,
}

/// Wrap `plugin` with the methods needed to satisfy [`ExtensionPlugin`]
pub fn new_config_plugin<P: ConfigPlugin>(plugin: P) -> ConfigPluginAdapter<P> {
    ConfigPluginAdapter::new(plugin)
}

impl<P: ConfigPlugin> ConfigPluginAdapter<P> {
    pub fn new(plugin: P) -> Self {
        Self { plugin }
    }

    /// The wrapped config plugin
    pub fn inner(&self) -> &P {
        &self.plugin
    }

    pub fn into_inner(self) -> P {
        self.plugin
    }
}

#[async_trait]
impl<P: ConfigPlugin> ExtensionPlugin for ConfigPluginAdapter<P> {
    fn name(&self) -> &str {
        self.plugin.name()
    }

    fn registry_name(&self) -> RegistryName {
        RegistryName::Config
    }

    fn routes(&self) -> PluginResponse {
        PluginResponse::new()
    }

    fn ping(&self) -> ExtensionStatus {
        ExtensionStatus::ok()
    }

    async fn call(&self, ctx: &CallContext, request: &PluginRequest) -> ExtensionResponse {
        match Action::from_request(request) {
            Action::GenConfig => {
                tracing::debug!(plugin = %self.plugin.name(), "Generating configs");
                match self.plugin.generate_configs(ctx).await {
                    Ok(configs) => {
                        tracing::debug!(
                            plugin = %self.plugin.name(),
                            sources = configs.len(),
                            "Configs generated"
                        );
                        ExtensionResponse::success(vec![configs])
                    }
                    Err(e) => {
                        tracing::warn!(plugin = %self.plugin.name(), error = %e, "Config generation failed");
                        ExtensionResponse::failure(format!("{GENERATE_ERROR_PREFIX}{e}"))
                    }
                }
            }
            Action::Unknown(action) => {
                tracing::warn!(plugin = %self.plugin.name(), action = %action, "Unknown action");
                ExtensionResponse::failure(format!("{UNKNOWN_ACTION_PREFIX}{action}"))
            }
        }
    }

    fn shutdown(&self) {}
}
