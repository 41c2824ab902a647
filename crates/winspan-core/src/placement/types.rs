use serde::Serialize;

use crate::geometry::Rect;
use crate::host::WindowHandle;

/// Final screen geometry for one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Placement {
    /// Geometry that fills `region` padded by `border`.
    ///
    /// Left and right are each padded by `border`. The top edge is not
    /// padded; the bottom gets a single `border`.
    ///
    /// Returns `None` if any coordinate does not fit in an `i32`.
    pub fn for_region(region: &Rect, border: i32) -> Option<Self> {
        let width = region.right.checked_sub(region.left)?;
        let height = region.bottom.checked_sub(region.top)?;

        Some(Self {
            x: region.left.checked_sub(border)?,
            y: region.top,
            width: width.checked_add(border.checked_mul(2)?)?,
            height: height.checked_add(border)?,
        })
    }
}

/// A placement that was applied to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedWindow {
    pub handle: WindowHandle,
    #[serde(flatten)]
    pub placement: Placement,
}
