//! A Set card game engine with optional `no_std` support.
//!
//! The crate provides the card, deck, and table model of the game of Set,
//! together with a [`Game`] session that pits a player against an
//! automatic opponent. The opponent moves when the enclosing driver
//! reports a timer expiry, so the engine itself is deterministic and
//! clock-free.
//!
//! # Example
//!
//! ```
//! use setrs::{Game, GameOptions, TimerOutcome};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! assert_eq!(game.table.len(), 12);
//!
//! // The driver's timer elapsed: the opponent claims a set or rotates.
//! let outcome = game.on_timer_expired().unwrap();
//! let _ = matches!(outcome, TimerOutcome::SetClaimed(_));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Shading, Shape};
pub use deck::Deck;
pub use error::{ClaimError, ReplaceError, TimerError};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use result::{ClaimOutcome, TimerOutcome, Winner};
pub use table::{TABLE_SIZE, Table, is_set};
