use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration")]
    InvalidConfig,
    #[error("Coordinates outside of the board")]
    OutOfBounds,
    #[error("Operation not allowed on this tile or in this state")]
    InvalidOperation,
}

pub type Result<T> = core::result::Result<T, GameError>;
