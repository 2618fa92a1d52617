use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration")]
    InvalidConfig,
    #[error("Invalid color id {0}")]
    InvalidColor(u8),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Hidden code does not fit the board")]
    InvalidCode,
}

pub type Result<T> = core::result::Result<T, GameError>;
