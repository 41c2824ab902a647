use crate::errors::WinspanError;
use crate::host::HostError;

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("No monitors found during enumeration")]
    NoMonitors,

    #[error("{source}")]
    Host {
        #[from]
        source: HostError,
    },
}

impl WinspanError for MonitorError {
    fn error_code(&self) -> &'static str {
        match self {
            MonitorError::NoMonitors => "NO_MONITORS",
            MonitorError::Host { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            MonitorError::NoMonitors => false,
            MonitorError::Host { source } => source.is_user_error(),
        }
    }
}
