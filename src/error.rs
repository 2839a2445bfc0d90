//! Error types for setting up and running a game.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while reading or validating a pack.
#[derive(Debug, Error)]
pub enum PackError {
    /// The pack file could not be read or written.
    #[cfg(feature = "std")]
    #[error("pack file error: {0}")]
    Io(#[from] std::io::Error),
    /// A line is not an integer.
    #[error("line {line}: `{token}` is not an integer")]
    InvalidValue {
        /// One-based line number.
        line: usize,
        /// The offending text, trimmed.
        token: String,
    },
    /// A line holds a negative integer.
    #[error("line {line}: {value} is negative")]
    Negative {
        /// One-based line number.
        line: usize,
        /// The negative value.
        value: i64,
    },
    /// The pack does not hold exactly eight cards per player.
    #[error("pack must contain exactly {expected} integers (found {found})")]
    WrongLength {
        /// Required number of cards.
        expected: usize,
        /// Number of cards read.
        found: usize,
    },
    /// Fewer than two players were requested.
    #[error("number of players must be greater than 1 (got {0})")]
    TooFewPlayers(u32),
}

/// Errors that can occur while dealing a pack into a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer than two players were requested.
    #[error("number of players must be greater than 1 (got {0})")]
    TooFewPlayers(u32),
    /// The pack size does not match the number of players.
    #[error("pack holds {found} cards but {expected} are needed")]
    PackSize {
        /// Required number of cards.
        expected: usize,
        /// Number of cards in the pack.
        found: usize,
    },
}

/// Errors that can occur while playing a game.
#[derive(Debug, Error)]
pub enum PlayError {
    /// A player thread could not be started.
    #[cfg(feature = "std")]
    #[error("failed to start player thread: {0}")]
    Spawn(#[from] std::io::Error),
    /// The number of sinks does not match the number of players.
    #[error("expected {expected} player sinks (got {found})")]
    SinkCount {
        /// Number of players.
        expected: usize,
        /// Number of sinks supplied.
        found: usize,
    },
    /// A player broke a game invariant and the run was aborted.
    #[error("player {0} panicked; the run was aborted")]
    PlayerPanicked(u32),
    /// Every player stopped without anyone claiming the game.
    #[error("the game ended without a winner")]
    NoWinner,
}
