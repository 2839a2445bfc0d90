//! Shared record of whether the game has ended and who won it.

use core::sync::atomic::{AtomicU32, Ordering};

/// Nobody has claimed the game yet.
const OPEN: u32 = 0;
/// The run was stopped without a winner.
const ABORTED: u32 = u32::MAX;

/// Exactly-once winner claim shared by every player of a run.
///
/// The ended flag and the winner id live in a single atomic word, so a reader
/// can never see the game ended with a winner other than the claimant that
/// ended it.
///
/// # Example
///
/// ```
/// use ringdeal::WinnerRegistry;
///
/// let registry = WinnerRegistry::new();
/// assert!(registry.try_claim(3));
/// assert!(!registry.try_claim(1));
/// assert_eq!(registry.winner(), Some(3));
/// ```
#[derive(Debug, Default)]
pub struct WinnerRegistry {
    state: AtomicU32,
}

impl WinnerRegistry {
    /// Creates an open registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: AtomicU32::new(OPEN),
        }
    }

    /// Returns whether the game has ended, by a claim or an abort.
    pub fn is_ended(&self) -> bool {
        self.state.load(Ordering::Acquire) != OPEN
    }

    /// Returns the winning player, if one has claimed the game.
    pub fn winner(&self) -> Option<u32> {
        match self.state.load(Ordering::Acquire) {
            OPEN | ABORTED => None,
            id => Some(id),
        }
    }

    /// Returns whether the run was aborted instead of won.
    pub fn is_aborted(&self) -> bool {
        self.state.load(Ordering::Acquire) == ABORTED
    }

    /// Claims the game for `player_id`.
    ///
    /// Returns `true` for exactly one caller over the lifetime of the
    /// registry (until [`reset`](Self::reset)); every later or concurrent
    /// caller gets `false` and changes nothing.
    ///
    /// # Panics
    ///
    /// Panics if `player_id` is `0` or `u32::MAX`; those encode the open and
    /// aborted states.
    pub fn try_claim(&self, player_id: u32) -> bool {
        assert!(
            player_id != OPEN && player_id != ABORTED,
            "player id {player_id} cannot claim the game"
        );
        self.state
            .compare_exchange(OPEN, player_id, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Ends the game without a winner.
    ///
    /// Returns `false` if the game had already ended.
    pub fn abort(&self) -> bool {
        self.state
            .compare_exchange(OPEN, ABORTED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Reopens the registry for another run.
    pub fn reset(&mut self) {
        *self.state.get_mut() = OPEN;
    }
}
