pub mod cs;
pub mod error;

pub use cs::{dynamic, string};
pub use cs::dynamic::edit_distance::{EditDistanceEngine, EngineConfig, DEFAULT_MAX_CELLS};
pub use error::{EditDistanceError, Result};
