use super::{exit_with_error, fetch_tags, runtime_for};
use crate::context::{AppContext, VerbosityLevel};
use crate::format;
use libpushmi::{ContainerRuntime, actions};
use std::io::{self, Write};

/// Fetch the tags of `source` and mirror each one to `destination`.
/// Returns the number of tags mirrored.
pub fn sync_all<R, W>(
    ctx: &AppContext,
    runtime: &R,
    out: &mut W,
    source: &str,
    destination: &str,
) -> libpushmi::Result<usize>
where
    R: ContainerRuntime + ?Sized,
    W: Write,
{
    let tags = fetch_tags(ctx, source)?;
    format::print(
        ctx,
        VerbosityLevel::Verbose,
        &format!("Mirroring {} tags to {}", tags.len(), destination),
    );
    actions::sync(runtime, out, source, destination, &tags)?;
    Ok(tags.len())
}

/// Handle the sync command
pub fn handle_sync(ctx: &AppContext, source: &str, destination: &str) {
    let runtime = runtime_for(ctx);
    let result = sync_all(ctx, &runtime, &mut io::stdout().lock(), source, destination);

    match result {
        Ok(0) => format::warning(ctx, &format!("No tags found for {}", source)),
        Ok(count) => format::success(
            ctx,
            &format!("Synced {} tags from {} to {}", count, source, destination),
        ),
        Err(e) => exit_with_error(ctx, &e),
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
