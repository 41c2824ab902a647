//! Built-in fallback values and the resolved-value accessors.

use crate::config::types::WinspanConfig;

/// Window title searched for when nothing else is configured.
pub const DEFAULT_WINDOW_NAME: &str = "Visual Studio Code";

pub const DEFAULT_BORDER: i32 = 0;

impl WinspanConfig {
    pub fn window_name(&self) -> &str {
        self.target
            .window_name
            .as_deref()
            .unwrap_or(DEFAULT_WINDOW_NAME)
    }

    pub fn all(&self) -> bool {
        self.target.all.unwrap_or(false)
    }

    pub fn border(&self) -> i32 {
        self.placement.border.unwrap_or(DEFAULT_BORDER)
    }
}
