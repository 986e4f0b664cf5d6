//! Application settings.
//!
//! Settings are optional: every field has a default, and a YAML settings file
//! only needs to name what it overrides. These are pushmi's own settings,
//! separate from the Docker credential config it reads logins from.

use crate::client::ClientConfig;
use crate::error::{PushmiError, Result};
use crate::runtime::DEFAULT_BINARY;
use config::{Config as ConfigRs, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;


/// Root settings structure.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Default, Clone)]
pub struct Config {
    /// Docker credential config to read logins from
    #[serde(default)]
    pub docker_config: Option<String>,

    #[serde(default)]
    pub runtime: Runtime,

    #[serde(default)]
    pub network: Network,
}

impl Config {
    /// Parses a `Config` from a YAML string.
    ///
    /// This function is primarily used for testing.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = Self::defaults()?.add_source(File::from_str(s, FileFormat::Yaml));
        Self::from_builder(builder, None)
    }

    /// Loads a `Config` from an optional file path.
    ///
    /// With `None`, defaults are returned. A given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::defaults()?;

        if let Some(p) = path {
            builder = builder.add_source(File::from(p).format(FileFormat::Yaml).required(true));
        }

        Self::from_builder(builder, path.map(|p| p.display().to_string()))
    }

    /// Builds the client configuration described by the network settings.
    pub fn client_config(&self) -> ClientConfig {
        let mut client_config = ClientConfig::new();
        if let Some(seconds) = self.network.timeout {
            client_config = client_config.with_timeout(seconds);
        }
        for endpoint in &self.network.endpoints {
            client_config = client_config.with_endpoint(&endpoint.registry, &endpoint.url);
        }
        client_config
    }

    /// Starts a builder seeded with the default values.
    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = ConfigRs::try_from(&Config::default()).map_err(|e| {
            PushmiError::settings_with_source("Failed to serialize default settings", None, e)
        })?;
        Ok(ConfigRs::builder().add_source(defaults))
    }

    /// Creates a `Config` from a `config::ConfigBuilder`.
    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: Option<String>,
    ) -> Result<Self> {
        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| PushmiError::settings_with_source("Failed to load settings", path, e))
    }
}

/// Container runtime settings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Runtime {
    /// Runtime binary invoked for pull, tag and push
    #[serde(default = "default_runtime_binary")]
    pub binary: String,
}

impl Default for Runtime {
    fn default() -> Self {
        Self {
            binary: default_runtime_binary(),
        }
    }
}

fn default_runtime_binary() -> String {
    DEFAULT_BINARY.to_string()
}

/// Network settings.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Default, Clone)]
pub struct Network {
    /// Request timeout in seconds; unset keeps the HTTP client's default
    #[serde(default)]
    pub timeout: Option<u64>,

    /// Tag API base URL overrides
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

/// Sends tag requests for `registry` to `url` instead of its public host.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Endpoint {
    pub registry: String,

    pub url: String,
}
