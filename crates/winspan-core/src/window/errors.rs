use crate::errors::WinspanError;
use crate::host::HostError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("No window with title '{title}' found")]
    NotFound { title: String },

    #[error("{source}")]
    Host {
        #[from]
        source: HostError,
    },
}

impl WinspanError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::NotFound { .. } => "WINDOW_NOT_FOUND",
            WindowError::Host { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            WindowError::NotFound { .. } => true,
            WindowError::Host { source } => source.is_user_error(),
        }
    }
}
