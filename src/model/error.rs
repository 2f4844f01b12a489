use thiserror::Error;

pub type Result<T> = std::result::Result<T, MosaicError>;

/// Errors surfaced by the layout engine and the state import path.
#[derive(Debug, Error)]
pub enum MosaicError {
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),
    #[error("malformed mosaic state: {0}")]
    Format(#[from] serde_json::Error),
    #[error("module position (row {row}, col {col}) is outside the grid")]
    OutOfRange { row: usize, col: usize },
    #[error("triangle index {0} is not 0 or 1")]
    InvalidColorIndex(usize),
    #[error("color `{0}` is not in the palette")]
    UnknownColor(String),
}
