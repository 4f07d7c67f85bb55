//! Connector endpoint configuration.

use serde::Deserialize;

/// Base URLs for every connector this crate can reach.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Connectors {
    /// FlexPay endpoint parameters.
    pub flexpay: ConnectorParams,
}

/// Endpoint parameters for a single connector.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ConnectorParams {
    /// Base URL all resource paths are resolved against.
    pub base_url: String,
}
