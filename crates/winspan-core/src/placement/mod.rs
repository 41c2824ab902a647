pub mod errors;
pub mod handler;
pub mod types;

pub use errors::PlacementError;
pub use handler::{compute_placement, place_windows};
pub use types::{PlacedWindow, Placement};
