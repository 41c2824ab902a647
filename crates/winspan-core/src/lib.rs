//! winspan-core: Core library for stretching a window across monitors
//!
//! This library finds windows by title, works out the region covered by the
//! tallest row of monitors, and moves the windows to fill it. It is used by
//! the `winspan` CLI.
//!
//! # Main Entry Points
//!
//! - [`window`] - Match top-level windows by title
//! - [`monitor`] - Aggregate monitors into a target region
//! - [`placement`] - Compute and apply window geometry
//! - [`host`] - The windowing-system seam (Win32 and test hosts)
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod monitor;
pub mod placement;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use config::WinspanConfig;
pub use geometry::{Point, Rect};
pub use host::{DisplayHost, HostError, MonitorInfo, WindowHandle, default_host};
pub use monitor::{MonitorError, MonitorSurvey};
pub use placement::{Placement, PlacementError};
pub use window::WindowError;

// Re-export handler modules as the primary API
pub use monitor::handler as monitor_ops;
pub use placement::handler as placement_ops;
pub use window::handler as window_ops;

// Re-export logging initialization
pub use logging::init_logging;
