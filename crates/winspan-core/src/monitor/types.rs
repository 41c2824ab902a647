use serde::Serialize;

use crate::geometry::Rect;
use crate::host::MonitorInfo;

/// A monitor together with whether the target region covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurveyedMonitor {
    #[serde(flatten)]
    pub info: MonitorInfo,
    pub spanned: bool,
}

/// Every monitor seen in one enumeration pass and the region chosen from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonitorSurvey {
    pub monitors: Vec<SurveyedMonitor>,
    pub region: Rect,
}

impl MonitorSurvey {
    pub fn spanned_count(&self) -> usize {
        self.monitors.iter().filter(|m| m.spanned).count()
    }
}
