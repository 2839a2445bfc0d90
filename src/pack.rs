//! Reading, validating and generating the pack of cards a game is dealt from.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::PackError;

/// Number of pack cards per player: four dealt to the hand, four to a deck.
pub const CARDS_PER_PLAYER: usize = 8;

/// An ordered pack of cards, dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pack {
    cards: Vec<Card>,
}

impl Pack {
    /// Creates a pack from cards, without validation.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates a pack from face values, without validation.
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self::new(values.into_iter().map(Card::new).collect())
    }

    /// Returns the pack size required for `players` players.
    #[must_use]
    pub const fn required_len(players: u32) -> usize {
        players as usize * CARDS_PER_PLAYER
    }

    /// Parses a pack holding one non-negative integer per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if `players` is below two, a line is not a
    /// non-negative integer, or the pack does not hold exactly
    /// `8 * players` values.
    ///
    /// # Example
    ///
    /// ```
    /// use ringdeal::Pack;
    ///
    /// let text = "1\n2\n\n1\n2\n1\n2\n1\n2\n1\n2\n1\n2\n1\n2\n1\n2\n";
    /// let pack = Pack::parse(text, 2).unwrap();
    /// assert_eq!(pack.len(), 16);
    /// ```
    pub fn parse(text: &str, players: u32) -> Result<Self, PackError> {
        if players < 2 {
            return Err(PackError::TooFewPlayers(players));
        }

        let mut cards = Vec::with_capacity(Self::required_len(players));
        for (index, line) in text.lines().enumerate() {
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            let line = index + 1;
            let value = token.parse::<i64>().map_err(|_| PackError::InvalidValue {
                line,
                token: token.to_string(),
            })?;
            if value < 0 {
                return Err(PackError::Negative { line, value });
            }
            let value = u32::try_from(value).map_err(|_| PackError::InvalidValue {
                line,
                token: token.to_string(),
            })?;
            cards.push(Card::new(value));
        }

        let expected = Self::required_len(players);
        if cards.len() != expected {
            return Err(PackError::WrongLength {
                expected,
                found: cards.len(),
            });
        }

        Ok(Self { cards })
    }

    /// Reads and validates a pack file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails
    /// [`parse`](Self::parse).
    #[cfg(feature = "std")]
    pub fn read(path: &std::path::Path, players: u32) -> Result<Self, PackError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text, players)
    }

    /// Writes the pack, one value per line.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    #[cfg(feature = "std")]
    pub fn write(&self, path: &std::path::Path) -> Result<(), PackError> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Generates a shuffled pack in which every player's value appears
    /// eight times, so some player can always collect four of a kind.
    ///
    /// The same seed always yields the same pack.
    #[must_use]
    pub fn generate(players: u32, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(Self::required_len(players));

        for value in 1..=players {
            for _ in 0..CARDS_PER_PLAYER {
                cards.push(Card::new(value));
            }
        }

        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face values in deal order.
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.cards.iter().map(Card::value).collect()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Renders one value per line, the format [`Pack::parse`] reads.
impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
