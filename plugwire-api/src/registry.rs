//! Plugin family classification used by host registries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PluginError;

/// Registry a plugin is filed under on the host.
///
/// The host keeps one registry per family and routes requests by it, so the
/// string form is part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryName {
    /// Produces configuration documents
    Config,
    /// Exposes a queryable table with a column schema
    Table,
    /// Receives log lines and status records
    Logger,
    /// Serves distributed queries
    Distributed,
}

impl RegistryName {
    /// All families, in host registration order
    pub const ALL: [RegistryName; 4] = [
        RegistryName::Config,
        RegistryName::Table,
        RegistryName::Logger,
        RegistryName::Distributed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryName::Config => "config",
            RegistryName::Table => "table",
            RegistryName::Logger => "logger",
            RegistryName::Distributed => "distributed",
        }
    }
}

impl fmt::Display for RegistryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistryName {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| PluginError::UnknownRegistry(s.to_string()))
    }
}
