//! Short image reference resolution.
//!
//! References are written the way users type them on the command line:
//! `mongo`, `myorg/myrepo` or `gcr.io/myorg/myrepo`. The number of
//! `/`-separated segments alone decides how the string is decomposed.

use crate::error::{PushmiError, Result};
use std::fmt;
use std::str::FromStr;


/// Registry used when the reference names no registry.
pub const DEFAULT_REGISTRY: &str = "hub.docker.com";

/// Organization used when the reference names only a repository.
pub const DEFAULT_ORGANIZATION: &str = "library";

/// A resolved image reference: registry hostname, organization and repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageReference {
    registry: String,
    organization: String,
    repository: String,
}

impl ImageReference {
    /// Creates a reference from its three parts verbatim.
    pub fn new(
        registry: impl Into<String>,
        organization: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            registry: registry.into(),
            organization: organization.into(),
            repository: repository.into(),
        }
    }

    /// Resolves a `/`-delimited reference string.
    ///
    /// - 3 segments: `(registry, organization, repository)`
    /// - 2 segments: `(hub.docker.com, organization, repository)`
    /// - 1 segment: `(hub.docker.com, library, repository)`
    ///
    /// No normalization is applied; a `:tag` or `@digest` suffix stays part
    /// of the repository name.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpushmi::reference::ImageReference;
    ///
    /// let reference = ImageReference::resolve("mongo").unwrap();
    /// assert_eq!(reference.registry(), "hub.docker.com");
    /// assert_eq!(reference.organization(), "library");
    /// assert_eq!(reference.repository(), "mongo");
    ///
    /// assert!(ImageReference::resolve("a/b/c/d").is_err());
    /// assert!(ImageReference::resolve("").is_err());
    /// ```
    pub fn resolve(reference: &str) -> Result<Self> {
        // An empty string has no segments at all
        if reference.is_empty() {
            return Err(PushmiError::invalid_reference(reference));
        }

        let parts: Vec<&str> = reference.split('/').collect();

        match parts.as_slice() {
            [registry, organization, repository] => {
                Ok(Self::new(*registry, *organization, *repository))
            }
            [organization, repository] => {
                Ok(Self::new(DEFAULT_REGISTRY, *organization, *repository))
            }
            [repository] => Ok(Self::new(
                DEFAULT_REGISTRY,
                DEFAULT_ORGANIZATION,
                *repository,
            )),
            _ => Err(PushmiError::invalid_reference(reference)),
        }
    }

    /// Returns the registry hostname.
    pub fn registry(&self) -> &str {
        &self.registry
    }

    /// Returns the organization (namespace).
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the repository name.
    pub fn repository(&self) -> &str {
        &self.repository
    }
}

impl FromStr for ImageReference {
    type Err = PushmiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.registry, self.organization, self.repository
        )
    }
}
