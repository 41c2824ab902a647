use crate::config::types::WinspanConfig;
use crate::errors::ConfigError;

/// Validate a (merged) configuration.
///
/// An empty window name would match every window, so it is rejected.
pub fn validate_config(config: &WinspanConfig) -> Result<(), ConfigError> {
    if config.window_name().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "target.window_name must not be empty".to_string(),
        });
    }

    Ok(())
}
