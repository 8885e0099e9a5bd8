//! The face-up table and the set rule.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ReplaceError;

/// Number of table slots during normal play.
pub const TABLE_SIZE: usize = 12;

/// Checks whether the given cards form a valid set.
///
/// Exactly three cards are required; any other count returns `false`
/// rather than erroring, so malformed selections are simply rejected.
/// Three cards form a set when, on each of the four attribute axes, the
/// values are either all equal or all pairwise distinct. Over a 3-value
/// domain that holds exactly when the attribute indices sum to 0 modulo 3,
/// which is the formulation used here.
#[must_use]
pub fn is_set(cards: &[Card]) -> bool {
    let &[a, b, c] = cards else {
        return false;
    };

    let (x, y, z) = (a.axis_indices(), b.axis_indices(), c.axis_indices());
    (0..4).all(|axis| (x[axis] + y[axis] + z[axis]) % 3 == 0)
}

/// The face-up working area of up to [`TABLE_SIZE`] cards.
///
/// Positions are stable: a claimed set's replacements land in the exact
/// slots the claimed cards occupied, so an overlay UI can keep its
/// position-to-card mapping across claims.
pub struct Table {
    /// Cards on the table, in slot order.
    pub cards: Vec<Card>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Fills the table up to `size` cards from the deck.
    ///
    /// Stops early if the deck legitimately cannot supply another card.
    pub fn fill(&mut self, deck: &mut Deck, size: usize) {
        while self.cards.len() < size {
            let Some(card) = deck.deal() else {
                break;
            };
            self.cards.push(card);
        }
    }

    /// Returns the cards at the given 1-based positions.
    ///
    /// Positions outside `1..=len` are silently skipped.
    #[must_use]
    pub fn select(&self, positions: &[usize]) -> Vec<Card> {
        positions
            .iter()
            .filter(|&&pos| (1..=self.cards.len()).contains(&pos))
            .map(|&pos| self.cards[pos - 1])
            .collect()
    }

    /// Finds the first valid set on the table.
    ///
    /// Every 3-combination of table cards is examined in index order
    /// (`(0,1,2), (0,1,3), ...`), and the first one satisfying [`is_set`]
    /// is returned. `None` means no set exists among the current cards,
    /// which is an expected outcome, not an error.
    #[must_use]
    pub fn find_set(&self) -> Option<[Card; 3]> {
        let n = self.cards.len();

        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    let triple = [self.cards[i], self.cards[j], self.cards[k]];
                    if is_set(&triple) {
                        return Some(triple);
                    }
                }
            }
        }

        None
    }

    /// Removes the claimed cards and deals replacements into their slots.
    ///
    /// The claimed cards go to the deck's discard pile. Each vacated slot
    /// is refilled in the order the claimed cards were supplied; a slot
    /// whose replacement the deck cannot supply is dropped, shrinking the
    /// table. Cards in other slots keep their positions.
    ///
    /// # Errors
    ///
    /// Returns an error if a claimed card is not on the table or the same
    /// card is claimed more than once. The table and deck are unchanged
    /// on error.
    pub fn replace(&mut self, deck: &mut Deck, claimed: &[Card; 3]) -> Result<(), ReplaceError> {
        if claimed[0] == claimed[1] || claimed[0] == claimed[2] || claimed[1] == claimed[2] {
            return Err(ReplaceError::DuplicateCard);
        }

        let mut positions = [0usize; 3];
        for (pos, card) in positions.iter_mut().zip(claimed) {
            *pos = self
                .cards
                .iter()
                .position(|c| c == card)
                .ok_or(ReplaceError::CardNotOnTable)?;
        }

        let mut slots: Vec<Option<Card>> = self.cards.iter().map(|&card| Some(card)).collect();
        for &pos in &positions {
            slots[pos] = None;
        }

        for &pos in &positions {
            let Some(card) = deck.deal() else {
                break;
            };
            slots[pos] = Some(card);
        }

        // Claimed cards reach the discard pile only after the refills, so
        // they cannot be dealt straight back into their own slots.
        for &card in claimed {
            deck.discard(card);
        }

        self.cards = slots.into_iter().flatten().collect();
        Ok(())
    }

    /// Drops the first three cards and appends up to three fresh deals.
    ///
    /// This is the fallback when no set exists on the table: the oldest
    /// cards rotate out to the discard pile and replacements go to the
    /// end, shifting the remaining cards forward.
    pub fn rotate(&mut self, deck: &mut Deck) {
        let take = self.cards.len().min(3);
        let removed: Vec<Card> = self.cards.drain(..take).collect();

        for _ in 0..take {
            let Some(card) = deck.deal() else {
                break;
            };
            self.cards.push(card);
        }

        for card in removed {
            deck.discard(card);
        }
    }

    /// Returns the number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
