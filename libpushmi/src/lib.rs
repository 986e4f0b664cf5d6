//! pushmi - list and mirror every tag of a container image
//!
//! libpushmi resolves short image references, lists their tags through the
//! registry-specific tag APIs of Docker Hub, Quay and GCR, and drives a
//! container runtime to pull or mirror each tag in turn.
//!
//! # Quick Start
//!
//! ```no_run
//! use libpushmi::Pushmi;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pushmi = Pushmi::builder().build()?;
//!
//!     for tag in pushmi.tags("gcr.io/google-containers/pause")? {
//!         println!("{}", tag);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`Pushmi`] - Resolve, authenticate and list tags in one call
//! - [`ImageReference`] - `[registry/][organization/]repository` resolution
//! - [`RegistryAdapter`] - Per-registry tag endpoint and body shape
//! - [`ContainerRuntime`] - Pull, tag and push through an external client
//! - [`Credentials`] - Basic credentials read from the Docker config
//!
//! All operations are blocking and run one at a time.

#![warn(clippy::all)]

/// Returns the libpushmi crate version.
///
/// # Examples
///
/// ```
/// let version = libpushmi::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// High-level public API (main entry point)
mod pushmi;
pub use pushmi::{Pushmi, PushmiBuilder};

pub use auth::Credentials;
pub use client::ClientConfig;
pub use config::Config;
pub use error::{PushmiError, Result};
pub use reference::ImageReference;
pub use registry::{RegistryAdapter, TagLister};
pub use runtime::{ContainerRuntime, DockerCli};

pub mod actions;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod reference;
pub mod registry;
pub mod runtime;
