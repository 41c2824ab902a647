pub mod errors;
pub mod handler;
pub mod span;
pub mod types;

pub use errors::MonitorError;
pub use handler::{find_monitors, survey_monitors};
pub use span::{SpanAccumulator, aggregate_work_areas};
pub use types::{MonitorSurvey, SurveyedMonitor};
