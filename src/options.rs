//! Game configuration options.

/// What a player does when its left deck is momentarily empty.
///
/// No lock is held while backing off; the player retries the whole turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Backoff {
    /// Yield the thread to the scheduler.
    #[default]
    Yield,
    /// Issue a spin-loop hint and retry on the same thread.
    Spin,
}

impl Backoff {
    /// Waits once according to the strategy.
    pub fn wait(&self) {
        match self {
            #[cfg(feature = "std")]
            Self::Yield => std::thread::yield_now(),
            #[cfg(not(feature = "std"))]
            Self::Yield => core::hint::spin_loop(),
            Self::Spin => core::hint::spin_loop(),
        }
    }
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use ringdeal::{Backoff, GameOptions};
///
/// let options = GameOptions::default()
///     .with_players(6)
///     .with_backoff(Backoff::Spin);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of players, and of decks, in the ring.
    pub players: u32,
    /// Strategy used when a draw finds the left deck empty.
    pub backoff: Backoff,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 4,
            backoff: Backoff::Yield,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use ringdeal::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(3);
    /// assert_eq!(options.players, 3);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u32) -> Self {
        self.players = players;
        self
    }

    /// Sets the empty-deck backoff strategy.
    #[must_use]
    pub const fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }
}
