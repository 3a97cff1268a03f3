// src/error.rs

/// Everything that can go wrong while generating or emitting vertices.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Input that can never produce a meaningful result (e.g. a non-finite canvas size)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A polygon needs at least one vertex
    #[error("degenerate input: vertex count must be at least 1, got {0}")]
    DegenerateInput(i64),

    /// Unsigned array literals cannot hold negative coordinates
    #[error("coordinate {value} of {array} cannot be written as an unsigned literal")]
    NegativeCoordinate { array: &'static str, value: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
