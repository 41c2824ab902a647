use crate::errors::WinspanError;
use crate::geometry::Rect;
use crate::host::{HostError, WindowHandle};

#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    #[error("Failed to place window {handle}: {source}")]
    MoveFailed {
        handle: WindowHandle,
        #[source]
        source: HostError,
    },

    #[error("Border of {border}px around region {region} does not fit in screen coordinates")]
    GeometryOverflow { region: Rect, border: i32 },
}

impl WinspanError for PlacementError {
    fn error_code(&self) -> &'static str {
        match self {
            PlacementError::MoveFailed { .. } => "PLACEMENT_MOVE_FAILED",
            PlacementError::GeometryOverflow { .. } => "PLACEMENT_GEOMETRY_OVERFLOW",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, PlacementError::GeometryOverflow { .. })
    }
}
