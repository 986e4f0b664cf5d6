//! Container runtime abstraction.
//!
//! Pulling, tagging and pushing images is delegated to an external client.
//! [`DockerCli`] drives the `docker` binary; any other runtime with the same
//! three operations can implement [`ContainerRuntime`].

use crate::error::{PushmiError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;


/// Default runtime binary, resolved through `PATH`.
pub const DEFAULT_BINARY: &str = "docker";

/// Synchronous pull/tag/push operations of a container runtime.
pub trait ContainerRuntime {
    /// Pulls `image:tag` into the local image cache.
    fn pull(&self, image: &str, tag: &str) -> Result<()>;

    /// Tags the local `image:tag` as `destination:destination_tag`.
    fn tag(&self, image: &str, tag: &str, destination: &str, destination_tag: &str) -> Result<()>;

    /// Pushes the local `image:tag` to its registry.
    fn push(&self, image: &str, tag: &str) -> Result<()>;
}

/// [`ContainerRuntime`] backed by the Docker CLI.
///
/// # Examples
///
/// ```no_run
/// use libpushmi::runtime::{ContainerRuntime, DockerCli};
///
/// # fn example() -> libpushmi::Result<()> {
/// let docker = DockerCli::new();
/// docker.pull("mongo", "4.0")?;
/// docker.tag("mongo", "4.0", "registry.example.com/mirror/mongo", "4.0")?;
/// docker.push("registry.example.com/mirror/mongo", "4.0")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: PathBuf,
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new()
    }
}

impl DockerCli {
    /// Uses `docker` from `PATH`.
    pub fn new() -> Self {
        Self::with_binary(DEFAULT_BINARY)
    }

    /// Uses a specific runtime binary, e.g. `/usr/bin/podman`.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Returns the binary this runtime invokes.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Runs the binary with `args`, mapping spawn failures and non-zero exits
    /// to [`PushmiError::Runtime`].
    fn run(&self, operation: &str, image: &str, args: &[&str]) -> Result<()> {
        let output = Command::new(&self.binary).args(args).output().map_err(|e| {
            PushmiError::runtime(
                operation,
                image,
                format!("failed to run {}: {}", self.binary.display(), e),
            )
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("{} exited with {}", self.binary.display(), output.status),
                trimmed => trimmed.to_string(),
            };
            return Err(PushmiError::runtime(operation, image, message));
        }

        Ok(())
    }
}

/// Joins an image name and tag as `image:tag`.
pub fn tagged(image: &str, tag: &str) -> String {
    format!("{}:{}", image, tag)
}

impl ContainerRuntime for DockerCli {
    fn pull(&self, image: &str, tag: &str) -> Result<()> {
        let reference = tagged(image, tag);
        self.run("pull", &reference, &["pull", &reference])
    }

    fn tag(&self, image: &str, tag: &str, destination: &str, destination_tag: &str) -> Result<()> {
        let source = tagged(image, tag);
        let target = tagged(destination, destination_tag);
        self.run("tag", &source, &["tag", &source, &target])
    }

    fn push(&self, image: &str, tag: &str) -> Result<()> {
        let reference = tagged(image, tag);
        self.run("push", &reference, &["push", &reference])
    }
}
