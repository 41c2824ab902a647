//! user32 backed host.
//!
//! The enumeration APIs call back into us once per element. Each callback
//! only writes into a context that lives on the enumerating call's stack and
//! is handed over through `LPARAM`.

use std::ffi::c_void;
use std::ops::ControlFlow;

use tracing::{debug, warn};
use windows::Win32::Foundation::{BOOL, FALSE, HWND, LPARAM, RECT, TRUE};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO, MONITORINFOF_PRIMARY,
};
use windows::Win32::UI::WindowsAndMessaging::{EnumWindows, GetWindowTextW, MoveWindow};

use crate::geometry::Rect;
use crate::host::errors::HostError;
use crate::host::traits::{DisplayHost, TITLE_BUFFER_LEN};
use crate::host::types::{MonitorInfo, WindowHandle};

#[derive(Debug, Default)]
pub struct Win32Host;

impl Win32Host {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Default)]
struct MonitorEnumContext {
    monitors: Vec<MonitorInfo>,
    skipped: usize,
}

struct WindowEnumContext<'a> {
    visit: &'a mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    stopped: bool,
}

fn to_rect(rect: RECT) -> Rect {
    Rect::new(rect.left, rect.top, rect.right, rect.bottom)
}

fn to_hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.as_raw() as *mut c_void)
}

/// Describe the calling thread's last Win32 error.
fn last_error_message(fallback: &str) -> String {
    let error = windows::core::Error::from_win32();
    if error.code().is_ok() {
        fallback.to_string()
    } else {
        error.message()
    }
}

unsafe extern "system" fn enum_monitor_proc(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _rect: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let context = unsafe { &mut *(lparam.0 as *mut MonitorEnumContext) };

    let mut info = MONITORINFO {
        cbSize: std::mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    if !unsafe { GetMonitorInfoW(hmonitor, &mut info) }.as_bool() {
        debug!(
            event = "core.host.monitor_info_failed",
            monitor_index = context.monitors.len() + context.skipped,
            error = %last_error_message("unknown error")
        );
        context.skipped += 1;
        return TRUE;
    }

    context.monitors.push(MonitorInfo::new(
        to_rect(info.rcMonitor),
        to_rect(info.rcWork),
        info.dwFlags & MONITORINFOF_PRIMARY != 0,
    ));
    TRUE
}

unsafe extern "system" fn enum_window_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let context = unsafe { &mut *(lparam.0 as *mut WindowEnumContext) };

    match (context.visit)(WindowHandle::from_raw(hwnd.0 as isize)) {
        ControlFlow::Continue(()) => TRUE,
        ControlFlow::Break(()) => {
            context.stopped = true;
            FALSE
        }
    }
}

impl DisplayHost for Win32Host {
    fn enumerate_monitors(&self) -> Result<Vec<MonitorInfo>, HostError> {
        let mut context = MonitorEnumContext::default();

        let ok = unsafe {
            EnumDisplayMonitors(
                HDC::default(),
                None,
                Some(enum_monitor_proc),
                LPARAM(&mut context as *mut MonitorEnumContext as isize),
            )
        };

        if !ok.as_bool() {
            return Err(HostError::MonitorEnumerationFailed {
                message: last_error_message("EnumDisplayMonitors returned FALSE"),
            });
        }

        if context.skipped > 0 {
            warn!(
                event = "core.host.monitor_list_incomplete",
                skipped_count = context.skipped,
                returned_count = context.monitors.len()
            );
        }

        Ok(context.monitors)
    }

    fn enumerate_windows(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    ) -> Result<(), HostError> {
        let mut context = WindowEnumContext {
            visit,
            stopped: false,
        };

        let result = unsafe {
            EnumWindows(
                Some(enum_window_proc),
                LPARAM(&mut context as *mut WindowEnumContext as isize),
            )
        };

        match result {
            Ok(()) => Ok(()),
            // Returning FALSE from the callback makes EnumWindows report failure.
            Err(_) if context.stopped => Ok(()),
            Err(e) => Err(HostError::WindowEnumerationFailed {
                message: e.message(),
            }),
        }
    }

    fn window_title(&self, handle: WindowHandle) -> Result<String, HostError> {
        let mut buffer = [0u16; TITLE_BUFFER_LEN];

        let len = unsafe { GetWindowTextW(to_hwnd(handle), &mut buffer) };
        if len <= 0 {
            return Err(HostError::TitleUnavailable {
                handle,
                message: last_error_message("window has no title"),
            });
        }

        Ok(String::from_utf16_lossy(&buffer[..len as usize]))
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
        unsafe { MoveWindow(to_hwnd(handle), x, y, width, height, BOOL::from(repaint)) }.map_err(
            |e| HostError::GeometryUpdateFailed {
                handle,
                message: e.message(),
            },
        )
    }
}
