//! Configuration loading and merging logic.
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.winspan/config.toml`
//! 3. **Project config** - `./.winspan/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{PlacementConfig, TargetConfig, WinspanConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".winspan";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the user and project config files.
///
/// # Errors
///
/// Missing files are not errors. Unreadable or malformed files are, as is a
/// merged configuration that fails validation.
pub fn load_hierarchy() -> Result<WinspanConfig, ConfigError> {
    let user_path = user_config_path();
    let project_path = std::env::current_dir()
        .map_err(|source| ConfigError::CurrentDirUnavailable { source })?
        .join(CONFIG_DIR)
        .join(CONFIG_FILE);

    load_hierarchy_from(user_path.as_deref(), &project_path)
}

/// Load and merge the given user and project config files over the defaults.
pub fn load_hierarchy_from(
    user_path: Option<&Path>,
    project_path: &Path,
) -> Result<WinspanConfig, ConfigError> {
    let mut config = WinspanConfig::default();

    for path in user_path.into_iter().chain(std::iter::once(project_path)) {
        match load_config_file(path) {
            Ok(layer) => config = merge_configs(config, layer),
            Err(e) if e.is_not_found() => {
                debug!(event = "core.config.file_missing", path = %path.display());
            }
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<WinspanConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ConfigReadError {
        path: path.display().to_string(),
        source,
    })?;
    let config: WinspanConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(config)
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Values set in the override replace base values; unset ones keep the base.
pub fn merge_configs(base: WinspanConfig, override_config: WinspanConfig) -> WinspanConfig {
    WinspanConfig {
        target: TargetConfig {
            window_name: override_config
                .target
                .window_name
                .or(base.target.window_name),
            all: override_config.target.all.or(base.target.all),
        },
        placement: PlacementConfig {
            border: override_config.placement.border.or(base.placement.border),
        },
    }
}

/// Location of the per-user config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}
