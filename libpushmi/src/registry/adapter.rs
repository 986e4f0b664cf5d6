//! Per-registry tag-listing adapters.
//!
//! Each supported registry exposes its tags through a different, mostly
//! legacy, endpoint with its own JSON shape. An adapter records where that
//! endpoint lives and how to pull an ordered list of tag names out of the
//! body. Adding a registry means adding an entry to [`ADAPTERS`].

use crate::error::{PushmiError, Result};
use crate::reference::ImageReference;
use serde_json::Value;

/// Everything needed to list tags on one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryAdapter {
    /// Registry hostname this adapter answers for
    pub name: &'static str,
    /// Scheme and host of the tag API
    pub endpoint: &'static str,
    /// Path with `{organization}` and `{repository}` placeholders
    pub path_template: &'static str,
    /// Human-readable description of the body `extract` expects
    pub shape: &'static str,
    /// Pulls tag names out of the parsed body, in registry order
    pub extract: fn(&Value) -> Option<Vec<String>>,
}

/// The fixed adapter table, keyed by hostname.
///
/// The Docker Hub v1 endpoint only ever serves official images, so its
/// template pins the `library` namespace and ignores the organization.
pub static ADAPTERS: &[RegistryAdapter] = &[
    RegistryAdapter {
        name: "hub.docker.com",
        endpoint: "https://registry.hub.docker.com",
        path_template: "/v1/repositories/library/{repository}/tags",
        shape: "a JSON array of objects with a \"name\" field",
        extract: extract_named_objects,
    },
    RegistryAdapter {
        name: "quay.io",
        endpoint: "https://quay.io",
        path_template: "/v1/repositories/{organization}/{repository}/tags",
        shape: "a JSON object keyed by tag name",
        extract: extract_object_keys,
    },
    RegistryAdapter {
        name: "gcr.io",
        endpoint: "https://gcr.io",
        path_template: "/v2/{organization}/{repository}/tags/list",
        shape: "a JSON object with a \"tags\" array",
        extract: extract_tags_field,
    },
];

impl RegistryAdapter {
    /// Finds the adapter for a registry hostname.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpushmi::registry::RegistryAdapter;
    ///
    /// let adapter = RegistryAdapter::lookup("gcr.io").unwrap();
    /// assert_eq!(adapter.name, "gcr.io");
    ///
    /// assert!(RegistryAdapter::lookup("ghcr.io").is_err());
    /// ```
    pub fn lookup(registry: &str) -> Result<&'static RegistryAdapter> {
        ADAPTERS
            .iter()
            .find(|adapter| adapter.name == registry)
            .ok_or_else(|| PushmiError::unsupported_registry(registry))
    }

    /// Returns the hostnames of every supported registry.
    pub fn supported() -> Vec<&'static str> {
        ADAPTERS.iter().map(|adapter| adapter.name).collect()
    }

    /// Instantiates the path template for `reference`.
    pub fn tag_path(&self, reference: &ImageReference) -> String {
        self.path_template
            .replace("{organization}", reference.organization())
            .replace("{repository}", reference.repository())
    }

    /// Returns the full tag-listing URL for `reference`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpushmi::reference::ImageReference;
    /// use libpushmi::registry::RegistryAdapter;
    ///
    /// let reference = ImageReference::resolve("gcr.io/google-containers/pause").unwrap();
    /// let adapter = RegistryAdapter::lookup(reference.registry()).unwrap();
    /// assert_eq!(
    ///     adapter.tag_url(&reference),
    ///     "https://gcr.io/v2/google-containers/pause/tags/list"
    /// );
    /// ```
    pub fn tag_url(&self, reference: &ImageReference) -> String {
        self.tag_url_with_endpoint(self.endpoint, reference)
    }

    /// Returns the tag-listing URL rooted at `endpoint` instead of the
    /// adapter's own host.
    pub fn tag_url_with_endpoint(&self, endpoint: &str, reference: &ImageReference) -> String {
        format!(
            "{}{}",
            endpoint.trim_end_matches('/'),
            self.tag_path(reference)
        )
    }
}

/// `[{"name": "1.0"}, {"name": "2.0"}]`
fn extract_named_objects(body: &Value) -> Option<Vec<String>> {
    body.as_array()?
        .iter()
        .map(|item| item.get("name")?.as_str().map(str::to_string))
        .collect()
}

/// `{"1.0": "<image id>", "2.0": "<image id>"}`
fn extract_object_keys(body: &Value) -> Option<Vec<String>> {
    Some(body.as_object()?.keys().cloned().collect())
}

/// `{"name": "org/repo", "tags": ["1.0", "2.0"]}`
fn extract_tags_field(body: &Value) -> Option<Vec<String>> {
    body.get("tags")?
        .as_array()?
        .iter()
        .map(|tag| tag.as_str().map(str::to_string))
        .collect()
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod tests;
