use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod context;
mod format;

/// Pushmi - Container Image Tag Mirror
///
/// Lists every tag of an image on Docker Hub, Quay or GCR, then pulls them
/// all or mirrors them to another repository.
#[derive(Parser, Debug)]
#[command(name = "pushmi")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Docker config file holding registry logins
    /// [default: $DOCKER_CONFIG/config.json or ~/.docker/config.json]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true, env = "PUSHMI_COLOR", default_value = "auto")]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every tag of the source repository
    #[command(visible_alias = "ls")]
    List {
        /// Source repository: [registry/][organization/]repository
        source: String,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Pull every tag of the source repository
    Pull {
        /// Source repository: [registry/][organization/]repository
        source: String,
    },
    /// Pull every tag of the source repository and push it to the destination
    #[command(visible_alias = "push")]
    Sync {
        /// Source repository: [registry/][organization/]repository
        source: String,
        /// Destination repository, used as given
        destination: String,
    },
    /// Show the registries tags can be listed from
    Registries {
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Display version information
    Version,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let color = format::ColorChoice::from(cli.color.as_str());
    let verbosity = context::VerbosityLevel::from_count(cli.verbose);

    // Build context with precedence: defaults > settings file > env vars > CLI flags
    let ctx = match context::AppContext::build(cli.config.as_deref(), color, verbosity) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::List { source, format } => {
            let fmt = format::OutputFormat::from(format.as_str());
            commands::list::handle_list(&ctx, &source, fmt);
        }
        Commands::Pull { source } => {
            commands::pull::handle_pull(&ctx, &source);
        }
        Commands::Sync {
            source,
            destination,
        } => {
            commands::sync::handle_sync(&ctx, &source, &destination);
        }
        Commands::Registries { format } => {
            let fmt = format::OutputFormat::from(format.as_str());
            commands::registries::handle_registries(&ctx, fmt);
        }
        Commands::Version => {
            commands::version::print_version();
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }
}
