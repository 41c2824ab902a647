//! The seam between the core and the host windowing system.
//!
//! [`DisplayHost`] is what the monitor, window and placement modules call.
//! On Windows it is backed by user32 through the `windows` crate; tests use
//! an in-memory host.

pub mod errors;
pub mod traits;
pub mod types;

#[cfg(windows)]
pub mod win32;

#[cfg(test)]
pub(crate) mod fake;

pub use errors::HostError;
pub use traits::{DisplayHost, TITLE_BUFFER_LEN};
pub use types::{MonitorInfo, WindowHandle};

/// Get the windowing host for the current platform.
///
/// # Errors
///
/// Returns [`HostError::Unsupported`] on platforms without a host backend.
pub fn default_host() -> Result<Box<dyn DisplayHost>, HostError> {
    #[cfg(windows)]
    {
        Ok(Box::new(win32::Win32Host::new()))
    }

    #[cfg(not(windows))]
    {
        Err(HostError::Unsupported {
            platform: std::env::consts::OS,
        })
    }
}
