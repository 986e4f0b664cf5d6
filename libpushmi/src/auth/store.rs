//! Read-only access to the Docker credential config.
//!
//! The Docker CLI keeps registry logins in a JSON file (usually
//! `~/.docker/config.json`) shaped like:
//!
//! ```json
//! { "auths": { "quay.io": { "auth": "dXNlcjpwYXNz" } } }
//! ```
//!
//! where `auth` is base64 of `username:password`. This module never writes
//! to that file.

use crate::auth::Credentials;
use crate::error::{PushmiError, Result};
use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for looking up registry credentials.
///
/// Stores are read-only: pushmi consumes logins created elsewhere.
pub trait CredentialStore {
    /// Retrieve credentials for a registry.
    ///
    /// Returns `Ok(None)` when the store has no entry for `registry`; that is
    /// a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry exists but cannot be decoded.
    fn get(&self, registry: &str) -> Result<Option<Credentials>>;

    /// List all registries with an entry in the store.
    fn list(&self) -> Result<Vec<String>>;
}

/// A single entry of the `auths` map.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
struct AuthEntry {
    /// base64 of `username:password`
    #[serde(default)]
    auth: Option<String>,
}

/// The subset of the Docker config file pushmi reads.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
struct DockerConfigFile {
    #[serde(default)]
    auths: HashMap<String, AuthEntry>,
}

/// Credential store backed by a Docker `config.json`.
///
/// # Examples
///
/// ```no_run
/// use libpushmi::auth::{CredentialStore, DockerConfigStore};
///
/// # fn example() -> libpushmi::Result<()> {
/// let store = DockerConfigStore::load("/home/user/.docker/config.json")?;
/// if let Some(creds) = store.get("quay.io")? {
///     println!("logged in to quay.io as {}", creds.username);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DockerConfigStore {
    /// Path the config was loaded from
    path: PathBuf,
    /// Parsed file contents
    config: DockerConfigFile,
}

impl DockerConfigStore {
    /// Loads and parses the Docker config at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PushmiError::ConfigRead`] if the file is missing, unreadable
    /// or not valid JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let display = path.display().to_string();

        let contents = fs::read_to_string(&path)
            .map_err(|e| PushmiError::config_read("Failed to read file", &display, e))?;

        let config: DockerConfigFile = serde_json::from_str(&contents)
            .map_err(|e| PushmiError::config_read("Failed to parse JSON", &display, e))?;

        Ok(Self { path, config })
    }

    /// Returns the path this store was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decodes a base64 `user:pass` value, splitting on the first colon.
    fn decode_auth(&self, registry: &str, auth: &str) -> Result<Credentials> {
        let path = self.path.display().to_string();

        let decoded = general_purpose::STANDARD
            .decode(auth.trim())
            .map_err(|e| {
                PushmiError::config_parse_with_source("auth is not valid base64", registry, &path, e)
            })?;

        let decoded = String::from_utf8(decoded).map_err(|e| {
            PushmiError::config_parse_with_source("auth is not valid UTF-8", registry, &path, e)
        })?;

        let (username, password) = decoded.split_once(':').ok_or_else(|| {
            PushmiError::config_parse("auth has no ':' separator", registry, &path)
        })?;

        Ok(Credentials::basic(username, password))
    }
}

impl CredentialStore for DockerConfigStore {
    fn get(&self, registry: &str) -> Result<Option<Credentials>> {
        // Entries without an inline `auth` belong to a credential helper
        match self.config.auths.get(registry) {
            Some(AuthEntry { auth: Some(auth) }) => Ok(Some(self.decode_auth(registry, auth)?)),
            _ => Ok(None),
        }
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut registries: Vec<String> = self.config.auths.keys().cloned().collect();
        registries.sort();
        Ok(registries)
    }
}

/// Looks up credentials for `registry` in the Docker config at `config_path`.
///
/// # Errors
///
/// - [`PushmiError::ConfigRead`] if the file is missing or malformed
/// - [`PushmiError::ConfigParse`] if the entry's `auth` cannot be decoded
pub fn lookup_credential(registry: &str, config_path: impl AsRef<Path>) -> Result<Option<Credentials>> {
    DockerConfigStore::load(config_path)?.get(registry)
}
