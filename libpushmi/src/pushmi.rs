//! High-level API for the pushmi library.
//!
//! [`Pushmi`] runs the whole tag pipeline for one reference string: resolve
//! it, look up credentials for its registry, and list its tags.
//!
//! # Examples
//!
//! ```no_run
//! use libpushmi::Pushmi;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pushmi = Pushmi::builder()
//!         .docker_config("/home/user/.docker/config.json")
//!         .build()?;
//!
//!     for tag in pushmi.tags("quay.io/coreos/etcd")? {
//!         println!("{}", tag);
//!     }
//!     Ok(())
//! }
//! ```

use crate::auth::{Credentials, lookup_credential};
use crate::client::{Client, ClientConfig};
use crate::error::Result;
use crate::reference::ImageReference;
use crate::registry::{RegistryAdapter, TagLister};
use std::path::{Path, PathBuf};

/// Resolves references, reads credentials and lists tags.
#[derive(Debug, Clone)]
pub struct Pushmi {
    /// Tag lister over the configured HTTP client.
    lister: TagLister,
    /// Docker credential config, if any.
    docker_config: Option<PathBuf>,
}

impl Pushmi {
    /// Create a builder for configuration.
    pub fn builder() -> PushmiBuilder {
        PushmiBuilder::new()
    }

    /// Returns the Docker credential config this instance reads, if any.
    pub fn docker_config(&self) -> Option<&Path> {
        self.docker_config.as_deref()
    }

    /// Looks up credentials for `reference`'s registry.
    ///
    /// Without a Docker config every lookup is `None`.
    pub fn credentials_for(&self, reference: &ImageReference) -> Result<Option<Credentials>> {
        match &self.docker_config {
            Some(path) => lookup_credential(reference.registry(), path),
            None => Ok(None),
        }
    }

    /// Returns the URL the tag request for `reference` is sent to.
    pub fn tag_url(&self, reference: &ImageReference) -> Result<String> {
        self.lister.tag_url(reference)
    }

    /// Lists the tags of an already resolved reference.
    ///
    /// Unsupported registries are rejected before the Docker config is read.
    pub fn list_tags(&self, reference: &ImageReference) -> Result<Vec<String>> {
        RegistryAdapter::lookup(reference.registry())?;
        let credentials = self.credentials_for(reference)?;
        self.lister.list_tags(reference, credentials.as_ref())
    }

    /// Resolves `reference` and lists its tags.
    ///
    /// # Errors
    ///
    /// Any resolution, credential or listing error, unchanged.
    pub fn tags(&self, reference: &str) -> Result<Vec<String>> {
        let reference = ImageReference::resolve(reference)?;
        self.list_tags(&reference)
    }
}

/// Builder for [`Pushmi`].
///
/// # Examples
///
/// ```
/// use libpushmi::{ClientConfig, Pushmi};
///
/// let pushmi = Pushmi::builder()
///     .client_config(ClientConfig::new().with_timeout(30))
///     .build()
///     .unwrap();
/// assert!(pushmi.docker_config().is_none());
/// ```
#[derive(Debug, Default)]
pub struct PushmiBuilder {
    client_config: ClientConfig,
    docker_config: Option<PathBuf>,
}

impl PushmiBuilder {
    /// Creates a builder with default settings and no Docker config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads credentials from this Docker config file.
    pub fn docker_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.docker_config = Some(path.into());
        self
    }

    /// Uses a custom HTTP client configuration.
    pub fn client_config(mut self, config: ClientConfig) -> Self {
        self.client_config = config;
        self
    }

    /// Builds the [`Pushmi`] instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn build(self) -> Result<Pushmi> {
        let client = Client::with_config(self.client_config)?;
        Ok(Pushmi {
            lister: TagLister::new(client),
            docker_config: self.docker_config,
        })
    }
}

#[cfg(test)]
#[path = "pushmi_tests.rs"]
mod tests;
