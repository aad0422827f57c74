use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("not a single step between positions, or unrecognized step token")]
    InvalidStep,
    #[error("board must be a non-empty rectangle of single lowercase letters")]
    InvalidBoard,
    #[error("malformed puzzle: {0}")]
    MalformedPuzzle(String),
    #[error("position is outside the board")]
    OutOfBounds,
    #[error("failed to read game data: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
