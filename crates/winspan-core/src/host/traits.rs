//! Windowing-system trait definition.

use std::ops::ControlFlow;

use crate::host::errors::HostError;
use crate::host::types::{MonitorInfo, WindowHandle};

/// Number of UTF-16 units read for a window title.
pub const TITLE_BUFFER_LEN: usize = 200;

/// The calls the core needs from the host windowing system.
///
/// Enumerations are single synchronous passes. Handles and monitor data are
/// only valid for the run that produced them.
pub trait DisplayHost {
    /// Enumerate every monitor attached to the desktop, in host order.
    ///
    /// Monitors whose details cannot be read are skipped.
    fn enumerate_monitors(&self) -> Result<Vec<MonitorInfo>, HostError>;

    /// Walk the top-level windows in host order.
    ///
    /// `visit` is called once per window and returns `ControlFlow::Break` to
    /// end the walk early. Ending early is not an error.
    fn enumerate_windows(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    ) -> Result<(), HostError>;

    /// Read a window's title, truncated to [`TITLE_BUFFER_LEN`] units.
    ///
    /// An empty title is reported as an error.
    fn window_title(&self, handle: WindowHandle) -> Result<String, HostError>;

    /// Move and resize a window in screen coordinates.
    fn set_window_geometry(
        &self,
        handle: WindowHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        repaint: bool,
    ) -> Result<(), HostError>;
}
