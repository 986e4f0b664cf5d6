//! Application context that holds resolved settings
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Settings file values
//! 3. Environment variables
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::config;
use crate::format::ColorChoice;
use libpushmi::Config;
use std::env;
use std::path::{Path, PathBuf};

/// How much diagnostic output to write to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Errors, warnings and results only
    Normal,
    /// `-v`: resolution and tag counts
    Verbose,
    /// `-vv`: request URLs and file paths
    VeryVerbose,
    /// `-vvv`: everything
    Trace,
}

impl VerbosityLevel {
    /// Map the number of `-v` flags to a level
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::VeryVerbose,
            _ => VerbosityLevel::Trace,
        }
    }
}

/// Environment variable overrides, captured once at startup
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    /// `PUSHMI_DOCKER_BINARY`
    pub docker_binary: Option<String>,
    /// `DOCKER_CONFIG`, the directory holding `config.json`
    pub docker_config_dir: Option<PathBuf>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            docker_binary: env::var("PUSHMI_DOCKER_BINARY").ok(),
            docker_config_dir: env::var_os("DOCKER_CONFIG").map(PathBuf::from),
        }
    }
}

/// Application context with resolved settings and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved settings
    pub config: Config,
    /// Docker credential config used for registry logins
    pub docker_config: PathBuf,
    pub color: ColorChoice,
    pub verbosity: VerbosityLevel,
}

impl AppContext {
    pub fn new(
        config: Config,
        docker_config: PathBuf,
        color: ColorChoice,
        verbosity: VerbosityLevel,
    ) -> Self {
        Self {
            config,
            docker_config,
            color,
            verbosity,
        }
    }

    /// Build context with precedence: defaults > settings file > env vars > CLI flags
    pub fn build(
        cli_docker_config: Option<&Path>,
        color: ColorChoice,
        verbosity: VerbosityLevel,
    ) -> Result<Self, String> {
        Self::build_with(
            &config::get_settings_path(),
            EnvOverrides::from_env(),
            cli_docker_config,
            color,
            verbosity,
        )
    }

    /// Build context from an explicit settings path and environment snapshot
    pub fn build_with(
        settings_path: &Path,
        env: EnvOverrides,
        cli_docker_config: Option<&Path>,
        color: ColorChoice,
        verbosity: VerbosityLevel,
    ) -> Result<Self, String> {
        // 1. Start with defaults, 2. merge the settings file if it exists
        let mut settings = if settings_path.exists() {
            Config::load(Some(settings_path)).map_err(|e| e.to_string())?
        } else {
            Config::default()
        };

        // 3. Apply environment variable overrides
        if let Some(binary) = env.docker_binary {
            settings.runtime.binary = binary;
        }

        // 4. CLI flag wins for the credential config
        let docker_config = config::resolve_docker_config(
            cli_docker_config,
            env.docker_config_dir.as_deref(),
            settings.docker_config.as_deref(),
            dirs::home_dir().as_deref(),
        );

        Ok(Self::new(settings, docker_config, color, verbosity))
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
