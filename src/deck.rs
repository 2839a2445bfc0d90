//! Thread-safe FIFO decks and the two-deck lock taken by a turn.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::sync::{Mutex, MutexGuard};

/// A shared FIFO queue of cards sitting between two players of the ring.
///
/// Every operation takes the deck's own lock, so a caller never observes a
/// queue in the middle of another operation. [`Deck::lock`] hands out the
/// lock itself when several operations must happen as one step.
pub struct Deck {
    /// Ring position of the deck, starting at 1.
    id: u32,
    /// Cards from front (next draw) to back (last discard).
    cards: Mutex<VecDeque<Card>>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self {
            id,
            cards: Mutex::new(VecDeque::new()),
        }
    }

    /// Creates a deck holding `cards`, the first one at the front.
    #[must_use]
    pub fn with_cards<I>(id: u32, cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self {
            id,
            cards: Mutex::new(cards.into_iter().collect()),
        }
    }

    /// Returns the deck id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Takes the deck's lock until the returned guard is dropped.
    pub fn lock(&self) -> DeckGuard<'_> {
        DeckGuard {
            id: self.id,
            cards: self.cards.lock(),
        }
    }

    /// Removes and returns the card at the front, or `None` when empty.
    pub fn draw(&self) -> Option<Card> {
        self.lock().draw()
    }

    /// Appends a card at the back. Discarding `None` does nothing.
    pub fn discard(&self, card: impl Into<Option<Card>>) {
        self.lock().discard(card);
    }

    /// Returns the number of cards.
    ///
    /// The count may be stale as soon as it is returned while players run.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns whether the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the card values from front to back.
    pub fn snapshot_values(&self) -> Vec<u32> {
        self.lock().snapshot_values()
    }

    /// Consumes the deck and returns its cards from front to back.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards.into_inner().into()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("id", &self.id)
            .field("cards", &self.snapshot_values())
            .finish()
    }
}

/// Exclusive access to one deck, released on drop.
pub struct DeckGuard<'a> {
    id: u32,
    cards: MutexGuard<'a, VecDeque<Card>>,
}

impl DeckGuard<'_> {
    /// Returns the id of the locked deck.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Removes and returns the card at the front, or `None` when empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Appends a card at the back. Discarding `None` does nothing.
    pub fn discard(&mut self, card: impl Into<Option<Card>>) {
        if let Some(card) = card.into() {
            self.cards.push_back(card);
        }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card values from front to back.
    #[must_use]
    pub fn snapshot_values(&self) -> Vec<u32> {
        self.cards.iter().map(Card::value).collect()
    }
}

/// Locks the decks on both sides of a player and returns `(left, right)`.
///
/// The deck with the lower id is always locked first, whichever side it is
/// on. Two neighbours share a deck in opposite roles, so every player taking
/// the pair in the same global order rules out a lock cycle around the ring.
///
/// # Panics
///
/// Panics if both decks have the same id; a turn needs two distinct decks.
pub fn lock_pair<'a>(left: &'a Deck, right: &'a Deck) -> (DeckGuard<'a>, DeckGuard<'a>) {
    assert_ne!(left.id, right.id, "a turn needs two distinct decks");

    if left.id < right.id {
        let left = left.lock();
        let right = right.lock();
        (left, right)
    } else {
        let right = right.lock();
        let left = left.lock();
        (left, right)
    }
}
