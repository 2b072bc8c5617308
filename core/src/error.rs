use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Solution shape does not match board size")]
    InvalidSolutionShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
