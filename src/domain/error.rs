use thiserror::Error;

/// Errors surfaced by board construction, cell access, pattern placement
/// and pattern transforms. All are precondition violations reported
/// immediately at the call site.
#[derive(Debug, Error, PartialEq)]
pub enum LifeError {
    #[error("board size must be positive")]
    InvalidSize,

    #[error("cell ({row}, {col}) is outside the {size}x{size} board")]
    IndexOutOfRange { row: usize, col: usize, size: usize },

    #[error(
        "{height}x{width} pattern centered at ({row}, {col}) does not fit on a {size}x{size} board"
    )]
    PlacementOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
        size: usize,
    },

    #[error("rotation count must be non-negative, got {count}")]
    InvalidTransformArgument { count: i32 },

    #[error("renderer failure: {0}")]
    Render(String),
}
