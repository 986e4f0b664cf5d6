use crate::context::{AppContext, VerbosityLevel};
use crate::format;
use libpushmi::{DockerCli, ImageReference, Pushmi, PushmiError, RegistryAdapter};

/// List command handler
pub mod list;

/// Pull command handler
pub mod pull;

/// Supported registries listing
pub mod registries;

/// Sync command handler
pub mod sync;

/// Version command handlers
pub mod version;

/// Resolve `source` and fetch its tags, showing a spinner while the
/// registry answers.
pub fn fetch_tags(ctx: &AppContext, source: &str) -> libpushmi::Result<Vec<String>> {
    let reference = ImageReference::resolve(source)?;
    format::print(
        ctx,
        VerbosityLevel::Verbose,
        &format!("Resolved {} to {}", source, reference),
    );

    let pushmi = Pushmi::builder()
        .docker_config(&ctx.docker_config)
        .client_config(ctx.config.client_config())
        .build()?;

    let url = pushmi.tag_url(&reference)?;
    format::print(
        ctx,
        VerbosityLevel::VeryVerbose,
        &format!("Credentials: {}", ctx.docker_config.display()),
    );
    format::print(ctx, VerbosityLevel::VeryVerbose, &format!("GET {}", url));

    let spinner = format::create_formatter(ctx).spinner(&format!("Fetching tags for {}", source));
    let result = pushmi.list_tags(&reference);
    spinner.finish_and_clear();

    let tags = result?;
    format::print(
        ctx,
        VerbosityLevel::Verbose,
        &format!("Found {} tags for {}", tags.len(), reference),
    );
    format::print(ctx, VerbosityLevel::Trace, &format!("Tags: {:?}", tags));
    Ok(tags)
}

/// Container runtime configured for this run
pub fn runtime_for(ctx: &AppContext) -> DockerCli {
    format::print(
        ctx,
        VerbosityLevel::VeryVerbose,
        &format!("Runtime: {}", ctx.config.runtime.binary),
    );
    DockerCli::with_binary(&ctx.config.runtime.binary)
}

/// Report a fatal error and exit with status 1
pub fn exit_with_error(ctx: &AppContext, err: &PushmiError) -> ! {
    format::error(ctx, &err.to_string());
    if let PushmiError::UnsupportedRegistry { .. } = err {
        format::print(
            ctx,
            VerbosityLevel::Normal,
            &format!(
                "  Supported registries: {}",
                RegistryAdapter::supported().join(", ")
            ),
        );
    }
    std::process::exit(1);
}
