//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Claims and timer events are being accepted.
    InProgress,
    /// A participant reached the target score; no further turns.
    Finished,
}
