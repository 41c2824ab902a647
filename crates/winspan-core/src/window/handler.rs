use std::ops::ControlFlow;

use tracing::{debug, info, warn};

use super::errors::WindowError;
use crate::host::{DisplayHost, WindowHandle};

/// How many matching windows to collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Stop at the first match.
    First,
    /// Walk every window and keep every match.
    All,
}

impl MatchMode {
    pub fn from_all_flag(all: bool) -> Self {
        if all { MatchMode::All } else { MatchMode::First }
    }

    fn as_str(&self) -> &'static str {
        match self {
            MatchMode::First => "first",
            MatchMode::All => "all",
        }
    }
}

/// Find top-level windows whose title contains `title` (case-sensitive).
///
/// Handles come back in host enumeration order. Windows whose title cannot
/// be read are skipped.
///
/// # Errors
///
/// [`WindowError::NotFound`] when nothing matches, or the host error if the
/// enumeration itself fails.
pub fn find_windows(
    host: &dyn DisplayHost,
    title: &str,
    mode: MatchMode,
) -> Result<Vec<WindowHandle>, WindowError> {
    info!(
        event = "core.window.find_started",
        title = title,
        mode = mode.as_str()
    );

    let mut matches: Vec<WindowHandle> = Vec::new();
    let mut skipped_count = 0;

    host.enumerate_windows(&mut |handle| {
        let window_title = match host.window_title(handle) {
            Ok(t) => t,
            Err(e) => {
                debug!(
                    event = "core.window.title_read_skipped",
                    handle = %handle,
                    error = %e
                );
                skipped_count += 1;
                return ControlFlow::Continue(());
            }
        };

        debug!(
            event = "core.window.seen",
            handle = %handle,
            title = window_title.as_str()
        );

        if !window_title.contains(title) || matches.contains(&handle) {
            return ControlFlow::Continue(());
        }

        matches.push(handle);
        match mode {
            MatchMode::First => ControlFlow::Break(()),
            MatchMode::All => ControlFlow::Continue(()),
        }
    })
    .inspect_err(|e| {
        warn!(event = "core.window.enumeration_failed", error = %e);
    })?;

    if matches.is_empty() {
        warn!(
            event = "core.window.find_failed",
            title = title,
            skipped_count = skipped_count
        );
        return Err(WindowError::NotFound {
            title: title.to_string(),
        });
    }

    info!(
        event = "core.window.find_completed",
        title = title,
        count = matches.len(),
        skipped_count = skipped_count
    );
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WinspanError;
    use crate::host::fake::FakeHost;

    fn handles(raws: &[isize]) -> Vec<WindowHandle> {
        raws.iter().copied().map(WindowHandle::from_raw).collect()
    }

    fn editor_desktop() -> FakeHost {
        FakeHost::new()
            .with_window(0x10, Some("Program Manager"))
            .with_window(0x20, Some("main.rs - winspan - Visual Studio Code"))
            .with_window(0x30, None)
            .with_window(0x40, Some("notes.md - Visual Studio Code"))
            .with_window(0x50, Some("Terminal"))
    }

    #[test]
    fn test_first_mode_returns_first_match_and_stops() {
        let host = editor_desktop();

        let result = find_windows(&host, "Visual Studio Code", MatchMode::First).unwrap();
        assert_eq!(result, handles(&[0x20]));
        assert_eq!(host.visited(), handles(&[0x10, 0x20]));
    }

    #[test]
    fn test_all_mode_collects_every_match_in_order() {
        let host = editor_desktop();

        let result = find_windows(&host, "Visual Studio Code", MatchMode::All).unwrap();
        assert_eq!(result, handles(&[0x20, 0x40]));
        assert_eq!(host.visited().len(), 5);
    }

    #[test]
    fn test_all_mode_has_no_duplicates() {
        let host = FakeHost::new()
            .with_window(0x1, Some("Code"))
            .with_window(0x1, Some("Code"))
            .with_window(0x2, Some("Code"));

        let result = find_windows(&host, "Code", MatchMode::All).unwrap();
        assert_eq!(result, handles(&[0x1, 0x2]));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let host = editor_desktop();

        let err = find_windows(&host, "visual studio code", MatchMode::All).unwrap_err();
        assert_eq!(err.error_code(), "WINDOW_NOT_FOUND");
    }

    #[test]
    fn test_not_found_names_title() {
        let host = editor_desktop();

        let err = find_windows(&host, "Sublime Text", MatchMode::First).unwrap_err();
        assert_eq!(err.to_string(), "No window with title 'Sublime Text' found");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_unreadable_titles_are_skipped() {
        let host = FakeHost::new()
            .with_window(0x1, None)
            .with_window(0x2, None)
            .with_window(0x3, Some("Firefox"));

        let result = find_windows(&host, "Firefox", MatchMode::First).unwrap();
        assert_eq!(result, handles(&[0x3]));
    }

    #[test]
    fn test_only_unreadable_titles_is_not_found() {
        let host = FakeHost::new().with_window(0x1, None);

        let err = find_windows(&host, "anything", MatchMode::All).unwrap_err();
        assert!(matches!(err, WindowError::NotFound { .. }));
    }

    #[test]
    fn test_enumeration_failure_propagates() {
        let host = editor_desktop().failing_window_enumeration();

        let err = find_windows(&host, "Visual Studio Code", MatchMode::All).unwrap_err();
        assert_eq!(err.error_code(), "HOST_WINDOW_ENUMERATION_FAILED");
    }

    #[test]
    fn test_match_mode_from_all_flag() {
        assert_eq!(MatchMode::from_all_flag(true), MatchMode::All);
        assert_eq!(MatchMode::from_all_flag(false), MatchMode::First);
    }
}
