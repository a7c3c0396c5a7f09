use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card position")]
    InvalidPosition,
    #[error("Card is already face up")]
    AlreadyFaceUp,
    #[error("Game already won, no new flips are accepted")]
    AlreadyWon,
    #[error("Unknown board size")]
    UnknownBoardSize,
    #[error("Not enough identifiers, need {needed} but only {available} available")]
    NotEnoughIdentifiers { needed: usize, available: usize },
    #[error("Expected exactly {expected} custom identifiers, got {actual}")]
    WrongCustomCount { expected: usize, actual: usize },
    #[error("Identifier supplied more than once")]
    DuplicateIdentifier,
    #[error("Card layout must hold every identifier exactly twice")]
    InvalidDeck,
    #[error("Game name must be between 3 and 14 characters")]
    InvalidGameName,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
