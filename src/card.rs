//! The card value type.

use core::fmt;

/// A playing card carrying a single non-negative face value.
///
/// Cards have no identity beyond their value; a pack may hold many cards
/// with the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    value: u32,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    /// Returns the face value of the card.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }
}

impl From<u32> for Card {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

/// Cards print as the bare number so hands render as `1 1 2 3`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
