//! Player hand representation.

use core::fmt;

use crate::card::Card;

/// Number of cards a player holds at all times.
pub const HAND_SIZE: usize = 4;

/// A player's hand of exactly [`HAND_SIZE`] cards.
///
/// A turn swaps one card for another in place, so a hand is never seen with
/// three or five cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from its cards in hand order.
    #[must_use]
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Returns the cards in hand order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the card values in hand order.
    #[must_use]
    pub fn values(&self) -> [u32; HAND_SIZE] {
        self.cards.map(|card| card.value())
    }

    /// Returns whether every card equals `preferred`.
    #[must_use]
    pub fn is_uniform(&self, preferred: u32) -> bool {
        self.cards.iter().all(|card| card.value() == preferred)
    }

    /// Picks the slot to give up on the next turn.
    ///
    /// This is the first card whose value differs from `preferred`, or the
    /// first card when the hand is already uniform.
    #[must_use]
    pub fn discard_index(&self, preferred: u32) -> usize {
        self.cards
            .iter()
            .position(|card| card.value() != preferred)
            .unwrap_or(0)
    }

    /// Puts `card` into slot `index` and returns the card it replaced.
    ///
    /// # Panics
    ///
    /// Panics if `index >= HAND_SIZE`.
    pub fn replace(&mut self, index: usize, card: Card) -> Card {
        core::mem::replace(&mut self.cards[index], card)
    }

    /// Takes `drawn` into the hand and returns the card to discard.
    pub fn exchange(&mut self, drawn: Card, preferred: u32) -> Card {
        let index = self.discard_index(preferred);
        self.replace(index, drawn)
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self::new(cards)
    }
}

impl From<[u32; HAND_SIZE]> for Hand {
    fn from(values: [u32; HAND_SIZE]) -> Self {
        Self::new(values.map(Card::new))
    }
}

/// Renders as space-separated values, e.g. `1 1 2 3`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
