//! Envelope types exchanged between a host and its plugins

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PluginError;

/// Status code reported for a successful call
pub const STATUS_OK: i32 = 0;

/// Status code reported for any failed call
pub const STATUS_FAILURE: i32 = 1;

/// Request handed to a plugin's `call` entry point.
///
/// One key is reserved as the action discriminator; plugins ignore the rest
/// unless their family defines more.
pub type PluginRequest = HashMap<String, String>;

/// Payload carried by a successful response: a sequence of string maps
pub type PluginResponse = Vec<HashMap<String, String>>;

/// Configuration documents keyed by source name
pub type ConfigMap = HashMap<String, String>;

/// Outcome of a plugin operation as seen by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExtensionStatus {
    /// 0 on success, non-zero on failure
    pub code: i32,
    /// Human-readable detail, empty on success
    #[serde(default)]
    pub message: String,
}

impl ExtensionStatus {
    /// The canonical OK status
    pub fn ok() -> Self {
        Self {
            code: STATUS_OK,
            message: String::new(),
        }
    }

    /// A generic failure carrying `message`
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            code: STATUS_FAILURE,
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == STATUS_OK
    }
}

/// Status plus optional payload returned from every `call`.
///
/// The payload is present exactly when the status code is [`STATUS_OK`]. The
/// constructors are the only way to build one, and deserialization checks the
/// same rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawExtensionResponse")]
pub struct ExtensionResponse {
    status: ExtensionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<PluginResponse>,
}

/// Wire shape before the payload/status rule is checked
#[derive(Deserialize)]
struct RawExtensionResponse {
    status: ExtensionStatus,
    #[serde(default)]
    response: Option<PluginResponse>,
}

impl TryFrom<RawExtensionResponse> for ExtensionResponse {
    type Error = PluginError;

    fn try_from(raw: RawExtensionResponse) -> Result<Self, Self::Error> {
        match (raw.status.is_ok(), raw.response) {
            (true, Some(response)) => Ok(Self {
                status: raw.status,
                response: Some(response),
            }),
            (true, None) => Err(PluginError::InvalidInput(
                "successful response without payload".to_string(),
            )),
            (false, None) => Ok(Self {
                status: raw.status,
                response: None,
            }),
            (false, Some(_)) => Err(PluginError::InvalidInput(format!(
                "failed response (code {}) carries a payload",
                raw.status.code
            ))),
        }
    }
}

impl ExtensionResponse {
    /// OK status with `response` as payload
    pub fn success(response: PluginResponse) -> Self {
        Self {
            status: ExtensionStatus::ok(),
            response: Some(response),
        }
    }

    /// Failure status with `message` and no payload
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ExtensionStatus::failure(message),
            response: None,
        }
    }

    pub fn status(&self) -> &ExtensionStatus {
        &self.status
    }

    pub fn response(&self) -> Option<&PluginResponse> {
        self.response.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// Split into status and payload
    pub fn into_parts(self) -> (ExtensionStatus, Option<PluginResponse>) {
        (self.status, self.response)
    }
}
