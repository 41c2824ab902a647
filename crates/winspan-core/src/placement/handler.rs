use tracing::{error, info};

use super::errors::PlacementError;
use super::types::{PlacedWindow, Placement};
use crate::geometry::Rect;
use crate::host::{DisplayHost, WindowHandle};

/// Compute the geometry a window gets to fill `region` with `border` padding.
///
/// # Errors
///
/// [`PlacementError::GeometryOverflow`] when the padded geometry does not
/// fit in screen coordinates.
pub fn compute_placement(region: &Rect, border: i32) -> Result<Placement, PlacementError> {
    Placement::for_region(region, border).ok_or(PlacementError::GeometryOverflow {
        region: *region,
        border,
    })
}

/// Move every window in `handles` to fill `region`, in order.
///
/// Each window is moved independently and always repainted. The first
/// failure stops the run; windows already moved stay where they are.
pub fn place_windows(
    host: &dyn DisplayHost,
    handles: &[WindowHandle],
    region: &Rect,
    border: i32,
) -> Result<Vec<PlacedWindow>, PlacementError> {
    let placement = compute_placement(region, border)?;

    info!(
        event = "core.placement.apply_started",
        window_count = handles.len(),
        region = %region,
        border = border
    );

    let mut placed = Vec::with_capacity(handles.len());
    for &handle in handles {
        host.set_window_geometry(
            handle,
            placement.x,
            placement.y,
            placement.width,
            placement.height,
            true,
        )
        .map_err(|source| {
            error!(
                event = "core.placement.apply_failed",
                handle = %handle,
                placed_count = placed.len(),
                error = %source
            );
            PlacementError::MoveFailed { handle, source }
        })?;

        info!(
            event = "core.placement.window_placed",
            handle = %handle,
            x = placement.x,
            y = placement.y,
            width = placement.width,
            height = placement.height
        );
        placed.push(PlacedWindow { handle, placement });
    }

    info!(event = "core.placement.apply_completed", count = placed.len());
    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WinspanError;
    use crate::host::fake::{Applied, FakeHost};

    fn handles(raws: &[isize]) -> Vec<WindowHandle> {
        raws.iter().copied().map(WindowHandle::from_raw).collect()
    }

    #[test]
    fn test_single_monitor_with_border() {
        let host = FakeHost::new().with_window(0x1, Some("Code"));
        let region = Rect::new(0, 0, 2560, 1400);

        let placed = place_windows(&host, &handles(&[0x1]), &region, 50).unwrap();

        assert_eq!(placed.len(), 1);
        assert_eq!(
            host.geometry_of(0x1),
            Some(Applied {
                x: -50,
                y: 0,
                width: 2660,
                height: 1450,
                repaint: true
            })
        );
    }

    #[test]
    fn test_every_handle_gets_same_geometry() {
        let host = FakeHost::new();
        let region = Rect::new(-1920, 0, 1920, 1040);

        let placed = place_windows(&host, &handles(&[0x1, 0x2, 0x3]), &region, 0).unwrap();

        let applied = host.applied();
        assert_eq!(applied.len(), 3);
        assert_eq!(
            applied.iter().map(|(h, _)| *h).collect::<Vec<_>>(),
            handles(&[0x1, 0x2, 0x3])
        );
        assert!(applied.iter().all(|(_, a)| a.x == -1920 && a.width == 3840));
        assert!(placed.iter().all(|p| p.placement == compute_placement(&region, 0).unwrap()));
    }

    #[test]
    fn test_failure_aborts_remaining_without_rollback() {
        let host = FakeHost::new().failing_move(0x2);
        let region = Rect::new(0, 0, 1920, 1040);

        let err = place_windows(&host, &handles(&[0x1, 0x2, 0x3]), &region, 0).unwrap_err();

        assert_eq!(err.error_code(), "PLACEMENT_MOVE_FAILED");
        let PlacementError::MoveFailed { handle, .. } = err else {
            panic!("expected MoveFailed, got {err:?}");
        };
        assert_eq!(handle, WindowHandle::from_raw(0x2));

        let applied = host.applied();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].0, WindowHandle::from_raw(0x1));
        assert!(host.geometry_of(0x3).is_none());
    }

    #[test]
    fn test_placement_is_idempotent() {
        let host = FakeHost::new();
        let region = Rect::new(0, 0, 3840, 1040);
        let targets = handles(&[0x7]);

        place_windows(&host, &targets, &region, 12).unwrap();
        let first = host.geometry_of(0x7);
        place_windows(&host, &targets, &region, 12).unwrap();

        assert_eq!(host.geometry_of(0x7), first);
        assert_eq!(host.applied().len(), 2);
    }

    #[test]
    fn test_oversized_border_moves_nothing() {
        let host = FakeHost::new();
        let region = Rect::new(0, 0, 3840, 1040);

        let err = place_windows(&host, &handles(&[0x1, 0x2]), &region, 1_100_000_000).unwrap_err();

        assert_eq!(err.error_code(), "PLACEMENT_GEOMETRY_OVERFLOW");
        assert!(err.is_user_error());
        assert!(host.applied().is_empty());
    }

    #[test]
    fn test_empty_handle_list_places_nothing() {
        let host = FakeHost::new();
        let placed = place_windows(&host, &[], &Rect::new(0, 0, 10, 10), 0).unwrap();
        assert!(placed.is_empty());
        assert!(host.applied().is_empty());
    }
}
