//! Result types for a finished game.

use alloc::vec::Vec;
use core::fmt;

use crate::game::{Exit, PlayerState};
use crate::hand::{HAND_SIZE, Hand};

/// Final state of one player.
#[derive(Debug, Clone)]
pub struct PlayerReport<S> {
    /// The player ID.
    pub id: u32,
    /// Hand held when the player terminated.
    pub hand: Hand,
    /// Number of completed turns.
    pub turns: u64,
    /// How the player left the game.
    pub exit: Exit,
    /// Lifecycle state at the end of the run; always
    /// [`PlayerState::Terminated`] once the player has stopped.
    pub state: PlayerState,
    /// The player's sink, already closed.
    pub sink: S,
}

/// Contents of one deck after every player has terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckReport {
    /// The deck ID.
    pub id: u32,
    /// Card values from front to back.
    pub values: Vec<u32>,
}

/// Renders the deck output line, e.g. `deck 2 contents: 1 5 3`.
impl fmt::Display for DeckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deck {} contents: ", self.id)?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Result of a whole run.
#[derive(Debug, Clone)]
pub struct GameResult<S> {
    /// The player that claimed the game.
    pub winner: u32,
    /// Every player in id order.
    pub players: Vec<PlayerReport<S>>,
    /// Every deck in id order.
    pub decks: Vec<DeckReport>,
}

impl<S> GameResult<S> {
    /// Returns the report of `id`, if such a player took part.
    #[must_use]
    pub fn player(&self, id: u32) -> Option<&PlayerReport<S>> {
        self.players.iter().find(|report| report.id == id)
    }

    /// Returns the number of cards left across all hands and decks.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let in_hands = self.players.len() * HAND_SIZE;
        let in_decks: usize = self.decks.iter().map(|deck| deck.values.len()).sum();
        in_hands + in_decks
    }

    /// Returns every card value still in play, hands first, then decks.
    #[must_use]
    pub fn all_values(&self) -> Vec<u32> {
        let mut values = Vec::with_capacity(self.total_cards());
        for report in &self.players {
            values.extend(report.hand.values());
        }
        for deck in &self.decks {
            values.extend_from_slice(&deck.values);
        }
        values
    }
}
