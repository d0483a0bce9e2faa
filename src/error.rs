use thiserror::Error;

/// Failures of the coordinate-taking and constructing operations of a board
///
/// A failed operation never mutates the board it was called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}, both must be positive")]
    InvalidDimension { width: i32, height: i32 },
    #[error("cell ({row}, {col}) is outside of the {width}x{height} board")]
    OutOfBounds {
        row: i32,
        col: i32,
        width: i32,
        height: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unknown pattern `{0}`")]
    UnknownPreset(String),
    #[error("unknown fill mode `{0}`")]
    UnknownFill(String),
    #[error("unexpected `{found}` in run length encoded pattern")]
    InvalidRle { found: String },
    #[error("run length `{0}` is too large")]
    RunTooLong(String),
    #[error("pattern extends past the largest representable position")]
    Overflow,
    #[error("pattern has more than {limit} live cells")]
    TooManyCells { limit: usize },
}
