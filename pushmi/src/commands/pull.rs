use super::{exit_with_error, fetch_tags, runtime_for};
use crate::context::AppContext;
use crate::format;
use libpushmi::{ContainerRuntime, actions};
use std::io::{self, Write};

/// Fetch the tags of `source` and pull each one. Returns the number pulled.
pub fn pull_all<R, W>(
    ctx: &AppContext,
    runtime: &R,
    out: &mut W,
    source: &str,
) -> libpushmi::Result<usize>
where
    R: ContainerRuntime + ?Sized,
    W: Write,
{
    let tags = fetch_tags(ctx, source)?;
    actions::pull(runtime, out, source, &tags)?;
    Ok(tags.len())
}

/// Handle the pull command
pub fn handle_pull(ctx: &AppContext, source: &str) {
    let runtime = runtime_for(ctx);
    let result = pull_all(ctx, &runtime, &mut io::stdout().lock(), source);

    match result {
        Ok(0) => format::warning(ctx, &format!("No tags found for {}", source)),
        Ok(count) => format::success(ctx, &format!("Pulled {} tags of {}", count, source)),
        Err(e) => exit_with_error(ctx, &e),
    }
}

#[cfg(test)]
#[path = "pull_tests.rs"]
mod tests;
