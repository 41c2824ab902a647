pub mod errors;
pub mod handler;

pub use errors::WindowError;
pub use handler::{MatchMode, find_windows};
