use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board size {size}, must be between {min} and {max}")]
    InvalidSize { size: usize, min: usize, max: usize },
    #[error("Coordinates ({x}, {y}) are outside the {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("Invalid game configuration")]
    InvalidConfig,
}

pub type Result<T> = core::result::Result<T, GameError>;
