use std::env;
use std::path::{Path, PathBuf};

/// Get the settings file path, respecting the PUSHMI_CONFIG environment variable
pub fn get_settings_path() -> PathBuf {
    if let Ok(settings_path) = env::var("PUSHMI_CONFIG") {
        return PathBuf::from(settings_path);
    }

    // Default to ~/.config/pushmi/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("pushmi").join("config.yaml")
    } else {
        // Fallback to current directory
        PathBuf::from("config.yaml")
    }
}

/// Pick the Docker credential config to read logins from.
///
/// First match wins: the `--config` flag, `$DOCKER_CONFIG/config.json`, the
/// settings file's `docker_config`, then `~/.docker/config.json`.
pub fn resolve_docker_config(
    cli: Option<&Path>,
    docker_config_dir: Option<&Path>,
    settings: Option<&str>,
    home: Option<&Path>,
) -> PathBuf {
    if let Some(path) = cli {
        return expand_tilde(&path.to_string_lossy(), home);
    }
    if let Some(dir) = docker_config_dir {
        return dir.join("config.json");
    }
    if let Some(path) = settings {
        return expand_tilde(path, home);
    }
    match home {
        Some(home) => home.join(".docker").join("config.json"),
        None => PathBuf::from(".docker").join("config.json"),
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_tilde(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home.to_path_buf(),
        (Some(rest), Some(home)) if rest.starts_with('/') => {
            home.join(rest.trim_start_matches('/'))
        }
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
