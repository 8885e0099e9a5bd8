use crate::error::ClaimError;
use crate::result::ClaimOutcome;
use crate::table::is_set;

use super::{Game, GameState};

impl Game {
    /// Player action: claim the cards at the given 1-based positions as a set.
    ///
    /// Malformed selections (fewer or more than three in-range positions,
    /// a position repeated, or three cards that are not a set) are
    /// rejected, leaving the deck and table untouched so the caller can
    /// re-prompt. A valid set is removed, its slots are refilled from the
    /// deck, and the player scores a point.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already finished.
    #[expect(
        clippy::missing_panics_doc,
        reason = "internal expects are guaranteed to succeed"
    )]
    pub fn claim(&mut self, positions: &[usize]) -> Result<ClaimOutcome, ClaimError> {
        if self.state() != GameState::InProgress {
            return Err(ClaimError::GameOver);
        }

        let cards = self.table.select(positions);
        if cards.len() != 3 {
            return Ok(ClaimOutcome::Rejected);
        }

        let triple = [cards[0], cards[1], cards[2]];

        // A repeated position passes the mod-3 rule (x + x + x ≡ 0), so
        // duplicates must be rejected before the set check.
        if triple[0] == triple[1] || triple[0] == triple[2] || triple[1] == triple[2] {
            return Ok(ClaimOutcome::Rejected);
        }

        if !is_set(&triple) {
            return Ok(ClaimOutcome::Rejected);
        }

        self.table
            .replace(&mut self.deck, &triple)
            .expect("claimed cards were selected from the table and are distinct");

        self.score_player();

        Ok(ClaimOutcome::Claimed(triple))
    }
}
