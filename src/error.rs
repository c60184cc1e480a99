use thiserror::Error;

/// Errors returned by the configured edit distance engine.
///
/// The free functions in [`crate::cs::dynamic::edit_distance`] are total and never
/// produce these; only [`crate::EditDistanceEngine`] enforces resource limits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditDistanceError {
    /// The dynamic-programming table for the given inputs exceeds the cell limit.
    #[error("input too large: {cells} table cells exceeds the limit of {limit}")]
    InputTooLarge { cells: u64, limit: u64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EditDistanceError {
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        EditDistanceError::InvalidConfig(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, EditDistanceError>;
