//! Screen-space value types shared by the monitor and placement modules.

pub mod types;

pub use types::{Point, Rect};
