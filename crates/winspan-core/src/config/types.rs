//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! [target]
//! window_name = "Visual Studio Code"
//! all = false
//!
//! [placement]
//! border = 8
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Every field is optional so that layers can be merged; the accessors on
/// this type fall back to built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WinspanConfig {
    /// Which windows to move
    #[serde(default)]
    pub target: TargetConfig,

    /// How to size them
    #[serde(default)]
    pub placement: PlacementConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TargetConfig {
    /// Substring to look for in window titles.
    #[serde(default)]
    pub window_name: Option<String>,

    /// Move every match instead of only the first.
    #[serde(default)]
    pub all: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Padding in pixels added around the target region.
    #[serde(default)]
    pub border: Option<i32>,
}
