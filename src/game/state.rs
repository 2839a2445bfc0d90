//! Player state types.

/// Where a player is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Holding the dealt hand, before the first win check.
    Init,
    /// Taking turns until the game ends.
    Active,
    /// Claimed the game.
    Won,
    /// Saw the game end without winning it.
    Notified,
    /// Sink closed; no further deck operations.
    Terminated,
}

/// How a player left its turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// This player claimed the game.
    Won,
    /// Another player claimed the game first.
    Notified {
        /// The claimant, or `None` if the run was aborted.
        winner: Option<u32>,
    },
}

impl Exit {
    /// Returns the winner as seen by the exiting player.
    #[must_use]
    pub const fn winner(&self, player_id: u32) -> Option<u32> {
        match self {
            Self::Won => Some(player_id),
            Self::Notified { winner } => *winner,
        }
    }
}
