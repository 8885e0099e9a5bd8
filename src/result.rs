//! Outcome types for claims and timer events.

use crate::card::Card;

/// Outcome of a player claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The selection was a valid set; the cards were replaced and the
    /// player scored a point.
    Claimed([Card; 3]),
    /// The selection was malformed or not a set. The table is unchanged
    /// and the caller may re-prompt.
    Rejected,
}

/// Outcome of a timer expiry (the automatic opponent's turn).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// The opponent found and claimed a set.
    SetClaimed([Card; 3]),
    /// No set existed; the first three table cards were rotated out.
    Rotated,
}

/// The winning participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The human player.
    Player,
    /// The automatic opponent.
    Opponent,
}
