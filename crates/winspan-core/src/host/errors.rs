use crate::errors::WinspanError;
use crate::host::types::WindowHandle;

/// A call into the host windowing system failed.
///
/// Host calls are attempted exactly once; these errors are surfaced as-is.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Failed to enumerate monitors: {message}")]
    MonitorEnumerationFailed { message: String },

    #[error("Failed to enumerate windows: {message}")]
    WindowEnumerationFailed { message: String },

    #[error("Failed to read title of window {handle}: {message}")]
    TitleUnavailable {
        handle: WindowHandle,
        message: String,
    },

    #[error("Failed to move window {handle}: {message}")]
    GeometryUpdateFailed {
        handle: WindowHandle,
        message: String,
    },

    #[error("Window management is not supported on {platform}")]
    Unsupported { platform: &'static str },
}

impl WinspanError for HostError {
    fn error_code(&self) -> &'static str {
        match self {
            HostError::MonitorEnumerationFailed { .. } => "HOST_MONITOR_ENUMERATION_FAILED",
            HostError::WindowEnumerationFailed { .. } => "HOST_WINDOW_ENUMERATION_FAILED",
            HostError::TitleUnavailable { .. } => "HOST_TITLE_UNAVAILABLE",
            HostError::GeometryUpdateFailed { .. } => "HOST_GEOMETRY_UPDATE_FAILED",
            HostError::Unsupported { .. } => "HOST_UNSUPPORTED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, HostError::Unsupported { .. })
    }
}
