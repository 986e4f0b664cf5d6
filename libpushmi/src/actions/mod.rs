//! Per-tag actions: list, pull and sync.
//!
//! Every action walks the tag list in order and finishes one tag before
//! starting the next. The first error stops the loop and is returned as-is;
//! there is no partial-success report.

use crate::error::Result;
use crate::runtime::{ContainerRuntime, tagged};
use std::io::Write;

#[cfg(test)]
mod tests;

/// Writes each tag on its own line, in the order given.
pub fn list<W: Write>(out: &mut W, tags: &[String]) -> Result<()> {
    for tag in tags {
        writeln!(out, "{}", tag)?;
    }
    Ok(())
}

/// Pulls every tag of `source`.
///
/// A `Pulling image <source>:<tag>` line is written before each pull.
pub fn pull<R, W>(runtime: &R, out: &mut W, source: &str, tags: &[String]) -> Result<()>
where
    R: ContainerRuntime + ?Sized,
    W: Write,
{
    for tag in tags {
        writeln!(out, "Pulling image {}", tagged(source, tag))?;
        runtime.pull(source, tag)?;
    }
    Ok(())
}

/// Mirrors every tag of `source` to `destination`.
///
/// For each tag: pull `source:tag`, tag it as `destination:tag`, push
/// `destination:tag`. `destination` is used verbatim, without resolution.
///
/// # Examples
///
/// ```no_run
/// use libpushmi::actions;
/// use libpushmi::runtime::DockerCli;
///
/// # fn example() -> libpushmi::Result<()> {
/// let tags = vec!["3.6".to_string(), "4.0".to_string()];
/// actions::sync(
///     &DockerCli::new(),
///     &mut std::io::stdout(),
///     "mongo",
///     "registry.example.com/mirror/mongo",
///     &tags,
/// )?;
/// # Ok(())
/// # }
/// ```
pub fn sync<R, W>(
    runtime: &R,
    out: &mut W,
    source: &str,
    destination: &str,
    tags: &[String],
) -> Result<()>
where
    R: ContainerRuntime + ?Sized,
    W: Write,
{
    for tag in tags {
        writeln!(out, "Pulling image {}", tagged(source, tag))?;
        runtime.pull(source, tag)?;
        runtime.tag(source, tag, destination, tag)?;
        writeln!(out, "Pushing image {}", tagged(destination, tag))?;
        runtime.push(destination, tag)?;
    }
    Ok(())
}
