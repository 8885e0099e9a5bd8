use crate::error::TimerError;
use crate::result::TimerOutcome;

use super::{Game, GameState};

impl Game {
    /// Delivers a timer expiry: the automatic opponent takes its turn.
    ///
    /// The opponent searches the table exhaustively. If a set exists, the
    /// first one in combination order is claimed and replaced, and the
    /// opponent scores a point. If none exists, the first three table
    /// cards rotate out and fresh cards are appended, which is the defined
    /// fallback rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already finished.
    #[expect(
        clippy::missing_panics_doc,
        reason = "internal expects are guaranteed to succeed"
    )]
    pub fn on_timer_expired(&mut self) -> Result<TimerOutcome, TimerError> {
        if self.state() != GameState::InProgress {
            return Err(TimerError::GameOver);
        }

        if let Some(triple) = self.table.find_set() {
            self.table
                .replace(&mut self.deck, &triple)
                .expect("found cards came from the table and are distinct");

            self.score_opponent();

            return Ok(TimerOutcome::SetClaimed(triple));
        }

        self.table.rotate(&mut self.deck);

        Ok(TimerOutcome::Rotated)
    }
}
