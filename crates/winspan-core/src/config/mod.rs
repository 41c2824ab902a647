//! # Configuration System
//!
//! Hierarchical TOML configuration for winspan.
//!
//! ## Configuration Hierarchy
//!
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.winspan/config.toml`
//! 3. **Project config** - `./.winspan/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use winspan_core::config::WinspanConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WinspanConfig::load_hierarchy()?;
//!     println!("looking for '{}'", config.window_name());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use defaults::{DEFAULT_BORDER, DEFAULT_WINDOW_NAME};
pub use loading::merge_configs;
pub use types::{PlacementConfig, TargetConfig, WinspanConfig};
pub use validation::validate_config;

impl WinspanConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }

    /// Layer `overrides` on top of this configuration.
    pub fn merged_with(self, overrides: WinspanConfig) -> Self {
        loading::merge_configs(self, overrides)
    }
}
