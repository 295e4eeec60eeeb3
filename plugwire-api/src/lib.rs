//! plugwire-api - Plugin API for plugwire extension hosts
//!
//! This crate provides the envelope types and the generic plugin surface a
//! host talks to. Every plugin family (config, table, logger, ...) looks the
//! same to the host: a name, a registry classification, route metadata, a
//! liveness ping, one multiplexed `call` entry point and a shutdown hook.
//!
//! Family crates such as `plugwire-config` provide adapters that turn a small
//! domain trait into an [`ExtensionPlugin`].
//!
//! # Example
//!
//! ```ignore
//! use plugwire_api::{CallContext, ExtensionPlugin, PluginRequest};
//!
//! async fn ask(plugin: &dyn ExtensionPlugin) {
//!     let mut request = PluginRequest::new();
//!     request.insert("action".to_string(), "genConfig".to_string());
//!
//!     let response = plugin.call(&CallContext::new(), &request).await;
//!     if !response.is_ok() {
//!         eprintln!("{}: {}", plugin.name(), response.status().message);
//!     }
//! }
//! ```

pub mod context;
pub mod error;
pub mod registry;
pub mod types;

use async_trait::async_trait;

pub use context::CallContext;
pub use error::PluginError;
pub use registry::RegistryName;
pub use types::*;

/// The generic surface every plugin presents to a host.
///
/// `call` never fails at the Rust level: whatever goes wrong inside a plugin
/// is reported through the returned envelope's status.
#[async_trait]
pub trait ExtensionPlugin: Send + Sync {
    /// Name the plugin is registered under
    fn name(&self) -> &str;

    /// Registry family this plugin belongs to
    fn registry_name(&self) -> RegistryName;

    /// Route metadata advertised to the host (table columns and the like)
    fn routes(&self) -> PluginResponse;

    /// Liveness check
    fn ping(&self) -> ExtensionStatus;

    /// Dispatch a request; the action discriminator selects the behaviour
    async fn call(&self, ctx: &CallContext, request: &PluginRequest) -> ExtensionResponse;

    /// Called once by the host before it drops the plugin
    fn shutdown(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl ExtensionPlugin for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn registry_name(&self) -> RegistryName {
            RegistryName::Logger
        }

        fn routes(&self) -> PluginResponse {
            Vec::new()
        }

        fn ping(&self) -> ExtensionStatus {
            ExtensionStatus::ok()
        }

        async fn call(&self, _ctx: &CallContext, request: &PluginRequest) -> ExtensionResponse {
            ExtensionResponse::success(vec![request.clone()])
        }

        fn shutdown(&self) {}
    }

    #[test]
    fn test_plugin_trait_is_object_safe() {
        // This compiles only if ExtensionPlugin is object-safe
        fn _takes_boxed_plugin(_: Box<dyn ExtensionPlugin>) {}
    }

    #[tokio::test]
    async fn test_dispatch_through_trait_object() {
        let plugin: Box<dyn ExtensionPlugin> = Box::new(Echo);
        let request = PluginRequest::from([("k".to_string(), "v".to_string())]);

        let response = plugin.call(&CallContext::new(), &request).await;

        assert!(response.is_ok());
        assert_eq!(response.response(), Some(&vec![request]));
        assert_eq!(plugin.registry_name(), RegistryName::Logger);
    }
}
