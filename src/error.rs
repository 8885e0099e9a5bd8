//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when replacing claimed cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReplaceError {
    /// A claimed card is not on the table.
    #[error("claimed card is not on the table")]
    CardNotOnTable,
    /// The same card was claimed more than once.
    #[error("the same card was claimed more than once")]
    DuplicateCard,
}

/// Errors that can occur when the player claims a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClaimError {
    /// The game has already finished.
    #[error("the game has already finished")]
    GameOver,
}

/// Errors that can occur when the turn timer expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// The game has already finished.
    #[error("the game has already finished")]
    GameOver,
}
