//! plugwire-config - Config plugins for plugwire hosts
//!
//! A config plugin only has to know how to produce a set of named
//! configuration documents. Implement [`ConfigPlugin`] and wrap the value with
//! [`new_config_plugin`] to get a full [`plugwire_api::ExtensionPlugin`]:
//!
//! ```ignore
//! use plugwire_api::{CallContext, ConfigMap, PluginError};
//! use plugwire_config::{ConfigPlugin, new_config_plugin};
//!
//! struct Fleet;
//!
//! #[async_trait::async_trait]
//! impl ConfigPlugin for Fleet {
//!     fn name(&self) -> &str {
//!         "fleet"
//!     }
//!
//!     async fn generate_configs(&self, _ctx: &CallContext) -> Result<ConfigMap, PluginError> {
//!         Ok(ConfigMap::from([(
//!             "base".to_string(),
//!             r#"{"options":{"host_identifier":"uuid"}}"#.to_string(),
//!         )]))
//!     }
//! }
//!
//! let plugin = new_config_plugin(Fleet);
//! ```

pub mod adapter;
pub mod sources;

use std::sync::Arc;

use async_trait::async_trait;
use plugwire_api::{CallContext, ConfigMap, PluginError};

pub use adapter::{
    Action, ConfigPluginAdapter, GEN_CONFIG_ACTION, GENERATE_ERROR_PREFIX, REQUEST_ACTION_KEY,
    UNKNOWN_ACTION_PREFIX, new_config_plugin,
};
pub use sources::{FileConfigPlugin, FileConfigPluginBuilder, StaticConfigPlugin};

/// The minimum a config plugin has to implement.
///
/// Anything implementing this can be handed to [`new_config_plugin`].
#[async_trait]
pub trait ConfigPlugin: Send + Sync {
    /// Name of the config plugin; must be stable across calls
    fn name(&self) -> &str;

    /// Produce the configuration documents, keyed by source name.
    ///
    /// Values are opaque to the host adapter (usually JSON text). Long-running
    /// implementations should observe `ctx` and give up once it is cancelled.
    async fn generate_configs(&self, ctx: &CallContext) -> Result<ConfigMap, PluginError>;
}

#[async_trait]
impl<T: ConfigPlugin + ?Sized> ConfigPlugin for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn generate_configs(&self, ctx: &CallContext) -> Result<ConfigMap, PluginError> {
        (**self).generate_configs(ctx).await
    }
}

#[async_trait]
impl<T: ConfigPlugin + ?Sized> ConfigPlugin for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn generate_configs(&self, ctx: &CallContext) -> Result<ConfigMap, PluginError> {
        (**self).generate_configs(ctx).await
    }
}
