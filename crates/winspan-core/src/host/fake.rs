//! In-memory host for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::ControlFlow;

use crate::geometry::Rect;
use crate::host::errors::HostError;
use crate::host::traits::DisplayHost;
use crate::host::types::{MonitorInfo, WindowHandle};

/// Geometry recorded by a `set_window_geometry` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Applied {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub repaint: bool,
}

#[derive(Default)]
pub(crate) struct FakeHost {
    monitors: Vec<MonitorInfo>,
    windows: Vec<(WindowHandle, Option<String>)>,
    fail_monitor_enumeration: bool,
    fail_window_enumeration: bool,
    fail_moves: Vec<WindowHandle>,
    visited: RefCell<Vec<WindowHandle>>,
    applied: RefCell<Vec<(WindowHandle, Applied)>>,
    geometry: RefCell<HashMap<WindowHandle, Applied>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a monitor whose work area is also its full bounds.
    pub fn with_monitor(mut self, work_area: Rect) -> Self {
        let is_primary = self.monitors.is_empty();
        self.monitors
            .push(MonitorInfo::new(work_area, work_area, is_primary));
        self
    }

    /// Add a window; `None` makes its title unreadable.
    pub fn with_window(mut self, raw: isize, title: Option<&str>) -> Self {
        self.windows
            .push((WindowHandle::from_raw(raw), title.map(str::to_string)));
        self
    }

    pub fn failing_monitor_enumeration(mut self) -> Self {
        self.fail_monitor_enumeration = true;
        self
    }

    pub fn failing_window_enumeration(mut self) -> Self {
        self.fail_window_enumeration = true;
        self
    }

    pub fn failing_move(mut self, raw: isize) -> Self {
        self.fail_moves.push(WindowHandle::from_raw(raw));
        self
    }

    /// Handles passed to the enumeration visitor, in order.
    pub fn visited(&self) -> Vec<WindowHandle> {
        self.visited.borrow().clone()
    }

    /// Every successful geometry update, in call order.
    pub fn applied(&self) -> Vec<(WindowHandle, Applied)> {
        self.applied.borrow().clone()
    }

    /// The current geometry of a window, if it was ever moved.
    pub fn geometry_of(&self, raw: isize) -> Option<Applied> {
        self.geometry
            .borrow()
            .get(&WindowHandle::from_raw(raw))
            .copied()
    }
}

impl DisplayHost for FakeHost {
    fn enumerate_monitors(&self) -> Result<Vec<MonitorInfo>, HostError> {
        if self.fail_monitor_enumeration {
            return Err(HostError::MonitorEnumerationFailed {
                message: "fake monitor enumeration failure".to_string(),
            });
        }
        Ok(self.monitors.clone())
    }

    fn enumerate_windows(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    ) -> Result<(), HostError> {
        if self.fail_window_enumeration {
            return Err(HostError::WindowEnumerationFailed {
                message: "fake window enumeration failure".to_string(),
            });
        }

        for (handle, _) in &self.windows {
            self.visited.borrow_mut().push(*handle);
            if visit(*handle).is_break() {
                break;
            }
        }
        Ok(())
    }

    fn window_title(&self, handle: WindowHandle) -> Result<String, HostError> {
        self.windows
            .iter()
            .find(|(h, _)| *h == handle)
            .and_then(|(_, title)| title.clone())
            .ok_or_else(|| HostError::TitleUnavailable {
                handle,
                message: "fake unreadable title".to_string(),
            })
    }

    fn set_window_geometry(
        &self,
        handle: WindowHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        repaint: bool,
    ) -> Result<(), HostError> {
        if self.fail_moves.contains(&handle) {
            return Err(HostError::GeometryUpdateFailed {
                handle,
                message: "fake move failure".to_string(),
            });
        }

        let applied = Applied {
            x,
            y,
            width,
            height,
            repaint,
        };
        self.applied.borrow_mut().push((handle, applied));
        self.geometry.borrow_mut().insert(handle, applied);
        Ok(())
    }
}
