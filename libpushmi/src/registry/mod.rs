//! Registry tag listing.
//!
//! This module ties a resolved [`ImageReference`] to its [`RegistryAdapter`],
//! performs the single tag-listing request through the HTTP [`Client`] and
//! normalizes the registry-specific body into an ordered list of tag names.
//!
//! Known limitations: the Docker Hub adapter only resolves `library/<name>`,
//! and paginated endpoints yield only their first page.

use crate::auth::Credentials;
use crate::client::Client;
use crate::error::{PushmiError, Result};
use crate::reference::ImageReference;

pub mod adapter;

pub use adapter::{ADAPTERS, RegistryAdapter};

#[cfg(test)]
mod tests;

/// Lists tags for image references across the supported registries.
#[derive(Debug, Clone)]
pub struct TagLister {
    /// HTTP client for registry communication.
    client: Client,
}

impl TagLister {
    /// Creates a new `TagLister` around a configured client.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpushmi::client::Client;
    /// use libpushmi::registry::TagLister;
    ///
    /// let lister = TagLister::new(Client::new().unwrap());
    /// ```
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns the full URL that would be requested for `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`PushmiError::UnsupportedRegistry`] for unknown hostnames.
    pub fn tag_url(&self, reference: &ImageReference) -> Result<String> {
        let adapter = RegistryAdapter::lookup(reference.registry())?;
        Ok(adapter.tag_url_with_endpoint(self.client.endpoint_for(adapter), reference))
    }

    /// Lists the tags of `reference` in the order the registry returns them.
    ///
    /// The adapter lookup happens before any network activity, so an
    /// unsupported registry never issues a request.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use libpushmi::client::Client;
    /// use libpushmi::reference::ImageReference;
    /// use libpushmi::registry::TagLister;
    ///
    /// # fn example() -> libpushmi::Result<()> {
    /// let lister = TagLister::new(Client::new()?);
    /// let reference = ImageReference::resolve("gcr.io/google-containers/pause")?;
    /// for tag in lister.list_tags(&reference, None)? {
    ///     println!("{}", tag);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// - [`PushmiError::UnsupportedRegistry`] for unknown hostnames
    /// - [`PushmiError::RegistryRequestFailed`] for any non-200 status
    /// - [`PushmiError::UnexpectedResponse`] if the body has the wrong shape
    /// - [`PushmiError::Network`] if the registry cannot be reached
    pub fn list_tags(
        &self,
        reference: &ImageReference,
        credentials: Option<&Credentials>,
    ) -> Result<Vec<String>> {
        let adapter = RegistryAdapter::lookup(reference.registry())?;
        let url = adapter.tag_url_with_endpoint(self.client.endpoint_for(adapter), reference);

        let body = self.client.get_json(&url, credentials)?;

        (adapter.extract)(&body).ok_or_else(|| {
            PushmiError::unexpected_response(format!("expected {}", adapter.shape), &url)
        })
    }
}
