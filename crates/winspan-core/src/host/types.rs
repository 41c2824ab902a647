use serde::{Serialize, Serializer};

use crate::geometry::Rect;

/// Opaque identifier of a top-level window.
///
/// The windowing system owns the window; this is only a reference to hand
/// back to it within the same run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub fn from_raw(raw: isize) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> isize {
        self.0
    }
}

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl Serialize for WindowHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Bounds of one display monitor as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonitorInfo {
    /// Full bounds of the monitor.
    pub monitor: Rect,
    /// Usable area, excluding taskbars and docked toolbars.
    pub work_area: Rect,
    pub is_primary: bool,
}

impl MonitorInfo {
    pub fn new(monitor: Rect, work_area: Rect, is_primary: bool) -> Self {
        Self {
            monitor,
            work_area,
            is_primary,
        }
    }
}
