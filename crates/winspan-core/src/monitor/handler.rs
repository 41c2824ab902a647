use tracing::{debug, info, warn};

use super::errors::MonitorError;
use super::span::aggregate_work_areas;
use super::types::{MonitorSurvey, SurveyedMonitor};
use crate::geometry::Rect;
use crate::host::DisplayHost;

/// Find the target region: the tallest row of monitors, spanned horizontally.
///
/// # Errors
///
/// Host enumeration failures are propagated unchanged. An empty monitor list
/// is [`MonitorError::NoMonitors`].
pub fn find_monitors(host: &dyn DisplayHost) -> Result<Rect, MonitorError> {
    survey_monitors(host).map(|survey| survey.region)
}

/// Enumerate monitors once, pick the target region, and report which
/// monitors it covers.
///
/// A monitor counts as spanned when its work area has the region's height
/// and its center lies inside the region.
pub fn survey_monitors(host: &dyn DisplayHost) -> Result<MonitorSurvey, MonitorError> {
    info!(event = "core.monitor.aggregate_started");

    let monitors = host.enumerate_monitors().inspect_err(|e| {
        warn!(event = "core.monitor.enumeration_failed", error = %e);
    })?;

    for (idx, m) in monitors.iter().enumerate() {
        debug!(
            event = "core.monitor.seen",
            monitor_index = idx,
            work_area = %m.work_area,
            bounds = %m.monitor,
            is_primary = m.is_primary
        );
    }

    let region = aggregate_work_areas(monitors.iter().map(|m| &m.work_area))
        .ok_or(MonitorError::NoMonitors)?;

    let monitors: Vec<SurveyedMonitor> = monitors
        .into_iter()
        .map(|info| SurveyedMonitor {
            spanned: info.work_area.has_height(region.height())
                && region.contains(info.work_area.center()),
            info,
        })
        .collect();

    let survey = MonitorSurvey { monitors, region };

    info!(
        event = "core.monitor.aggregate_completed",
        region = %region,
        monitor_count = survey.monitors.len(),
        spanned_count = survey.spanned_count()
    );
    Ok(survey)
}
