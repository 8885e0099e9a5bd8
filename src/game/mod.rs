//! Game session and turn flow.

use crate::deck::Deck;
use crate::options::GameOptions;
use crate::result::Winner;
use crate::table::Table;

mod claim;
mod opponent;
pub mod state;

pub use state::GameState;

/// A Set game session pitting a player against an automatic opponent.
///
/// The session owns the deck and the table; the enclosing driver feeds it
/// player selections via [`claim`](Self::claim) and timer expiries via
/// [`on_timer_expired`](Self::on_timer_expired). The session has no
/// notion of time itself, so drivers can deliver synthetic timer events
/// for deterministic play.
pub struct Game {
    /// The face-down supply.
    pub deck: Deck,
    /// The face-up table.
    pub table: Table,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Sets claimed by the player.
    player_score: u32,
    /// Sets claimed by the automatic opponent.
    opponent_score: u32,
    /// Set once a participant reaches the target score.
    winner: Option<Winner>,
}

impl Game {
    /// Creates a new session with the given seed and fills the table.
    ///
    /// # Example
    ///
    /// ```
    /// use setrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.table.len(), 12);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut deck = Deck::new(seed);
        let mut table = Table::new();
        table.fill(&mut deck, options.table_size);

        Self {
            deck,
            table,
            options,
            state: GameState::InProgress,
            player_score: 0,
            opponent_score: 0,
            winner: None,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the winner, if the game has finished.
    #[must_use]
    pub const fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Returns the player's score.
    #[must_use]
    pub const fn player_score(&self) -> u32 {
        self.player_score
    }

    /// Returns the automatic opponent's score.
    #[must_use]
    pub const fn opponent_score(&self) -> u32 {
        self.opponent_score
    }

    /// Awards a point to the player and finishes the game if they won.
    const fn score_player(&mut self) {
        self.player_score += 1;
        if self.player_score >= self.options.target_score {
            self.winner = Some(Winner::Player);
            self.state = GameState::Finished;
        }
    }

    /// Awards a point to the opponent and finishes the game if it won.
    const fn score_opponent(&mut self) {
        self.opponent_score += 1;
        if self.opponent_score >= self.options.target_score {
            self.winner = Some(Winner::Opponent);
            self.state = GameState::Finished;
        }
    }
}
