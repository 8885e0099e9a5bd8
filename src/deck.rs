//! The face-down card supply.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Color, DECK_SIZE, Shading, Shape};

/// The face-down supply of cards, plus the discard pile.
///
/// A fresh deck holds every one of the 81 attribute combinations exactly
/// once, shuffled with a seeded RNG. Dealing pops from the end. Claimed
/// cards come back via [`discard`](Self::discard); when the deck runs
/// out, the discard pile is reshuffled into a new deck, so cards on the
/// table can never be dealt a second time and
/// `deck ∪ table ∪ discards = 81` holds throughout a session.
pub struct Deck {
    /// Cards remaining in the deck. The last element is dealt next.
    pub cards: Vec<Card>,
    /// Cards claimed or rotated out of play, awaiting a reshuffle.
    pub discards: Vec<Card>,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, shuffled deck from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Self::full_deck(),
            discards: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Returns the 81-card universe in canonical order.
    ///
    /// The order nests colors, shapes, shadings, and numbers
    /// lexicographically, so the first card is red/oval/empty/1 and the
    /// last is purple/squiggle/filled/3.
    #[must_use]
    pub fn full_deck() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for color in Color::ALL {
            for shape in Shape::ALL {
                for shading in Shading::ALL {
                    for number in 1..=3 {
                        cards.push(Card::new(color, shape, shading, number));
                    }
                }
            }
        }

        cards
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Deals one card from the deck.
    ///
    /// An empty deck first reshuffles the discard pile back in. Returns
    /// `None` only when the deck and the discard pile are both empty,
    /// meaning every remaining card is face up on the table.
    pub fn deal(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            self.cards = core::mem::take(&mut self.discards);
            self.shuffle();
        }
        self.cards.pop()
    }

    /// Adds a card to the discard pile.
    ///
    /// Discarded cards re-enter play when the deck is exhausted and the
    /// pile is reshuffled in.
    pub fn discard(&mut self, card: Card) {
        self.discards.push(card);
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
