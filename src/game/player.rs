//! The per-player turn protocol.

use crate::card::Card;
use crate::deck::{Deck, lock_pair};
use crate::hand::Hand;
use crate::options::Backoff;
use crate::output::{Event, PlayerSink};
use crate::registry::WinnerRegistry;
use crate::result::PlayerReport;

use super::state::{Exit, PlayerState};

/// A player seated between two decks of the ring.
///
/// The player prefers cards equal to its own id. Each turn draws from the
/// left deck, swaps the drawn card into the hand and discards the replaced
/// card to the right deck, all while holding both deck locks.
pub struct Player<'a, S: PlayerSink> {
    id: u32,
    hand: Hand,
    left: &'a Deck,
    right: &'a Deck,
    registry: &'a WinnerRegistry,
    backoff: Backoff,
    state: PlayerState,
    turns: u64,
    sink: S,
}

impl<'a, S: PlayerSink> Player<'a, S> {
    /// Seats a player holding its dealt `hand` and reports that hand to `sink`.
    ///
    /// # Panics
    ///
    /// Panics if `left` and `right` are the same deck.
    pub fn new(
        id: u32,
        hand: Hand,
        left: &'a Deck,
        right: &'a Deck,
        registry: &'a WinnerRegistry,
        mut sink: S,
    ) -> Self {
        assert_ne!(
            left.id(),
            right.id(),
            "player {id} needs two distinct decks"
        );
        sink.observe(&Event::InitialHand { player: id, hand });

        Self {
            id,
            hand,
            left,
            right,
            registry,
            backoff: Backoff::default(),
            state: PlayerState::Init,
            turns: 0,
            sink,
        }
    }

    /// Sets the empty-deck backoff strategy.
    #[must_use]
    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns the value this player collects.
    #[must_use]
    pub const fn preferred(&self) -> u32 {
        self.id
    }

    /// Returns the current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> PlayerState {
        self.state
    }

    /// Returns the number of completed turns.
    #[must_use]
    pub const fn turns(&self) -> u64 {
        self.turns
    }

    /// Returns the sink receiving this player's observations.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the ids of the left (draw) and right (discard) decks.
    #[must_use]
    pub const fn deck_ids(&self) -> (u32, u32) {
        (self.left.id(), self.right.id())
    }

    /// Plays one turn.
    ///
    /// Returns `None`, with both decks untouched and unlocked, when the left
    /// deck is empty.
    pub fn take_turn(&mut self) -> Option<Event> {
        let preferred = self.preferred();
        let (drawn, discarded) = {
            let (mut left, mut right) = lock_pair(self.left, self.right);
            let drawn = left.draw()?;
            let discarded = self.hand.exchange(drawn, preferred);
            right.discard(discarded);
            (drawn, discarded)
        };

        self.turns += 1;
        if self.state == PlayerState::Init {
            self.state = PlayerState::Active;
        }
        log::trace!(
            "player {} drew {drawn} and discarded {discarded}, hand {}",
            self.id,
            self.hand
        );

        Some(self.turn_event(drawn, discarded))
    }

    const fn turn_event(&self, drawn: Card, discarded: Card) -> Event {
        Event::Turn {
            player: self.id,
            drawn,
            left: self.left.id(),
            discarded,
            right: self.right.id(),
            hand: self.hand,
        }
    }

    /// Plays until this player wins or sees the game end, then closes the
    /// sink.
    ///
    /// The sink is closed even if the player panics; the registry is then
    /// aborted so that every other player stops too.
    pub fn run(mut self) -> PlayerReport<S> {
        let exit = {
            let mut guard = Terminate {
                player: &mut self,
                finished: false,
            };
            let exit = guard.player.play();
            guard.player.announce(exit);
            guard.finished = true;
            exit
        };

        log::debug!(
            "player {} terminated after {} turns holding {}",
            self.id,
            self.turns,
            self.hand
        );

        PlayerReport {
            id: self.id,
            hand: self.hand,
            turns: self.turns,
            exit,
            state: self.state,
            sink: self.sink,
        }
    }

    fn play(&mut self) -> Exit {
        if self.hand.is_uniform(self.preferred()) {
            return self.claim();
        }

        self.state = PlayerState::Active;
        while !self.registry.is_ended() {
            let Some(event) = self.take_turn() else {
                self.backoff.wait();
                continue;
            };
            self.sink.observe(&event);

            if self.hand.is_uniform(self.preferred()) {
                return self.claim();
            }
        }

        self.notified()
    }

    fn claim(&mut self) -> Exit {
        if self.registry.try_claim(self.id) {
            self.state = PlayerState::Won;
            Exit::Won
        } else {
            self.notified()
        }
    }

    fn notified(&mut self) -> Exit {
        self.state = PlayerState::Notified;
        Exit::Notified {
            winner: self.registry.winner(),
        }
    }

    fn announce(&mut self, exit: Exit) {
        let event = match exit.winner(self.id) {
            Some(winner) if winner == self.id => {
                log::info!("player {} wins with {}", self.id, self.hand);
                Event::Won {
                    player: self.id,
                    hand: self.hand,
                }
            }
            Some(winner) => Event::Notified {
                player: self.id,
                winner,
                hand: self.hand,
            },
            None => Event::Exited {
                player: self.id,
                hand: self.hand,
            },
        };
        self.sink.observe(&event);
    }
}

/// Moves a player to [`PlayerState::Terminated`] on every exit path.
struct Terminate<'p, 'a, S: PlayerSink> {
    player: &'p mut Player<'a, S>,
    finished: bool,
}

impl<S: PlayerSink> Drop for Terminate<'_, '_, S> {
    fn drop(&mut self) {
        if !self.finished && self.player.registry.abort() {
            log::error!("player {} failed; aborting the game", self.player.id);
        }
        self.player.sink.close();
        self.player.state = PlayerState::Terminated;
    }
}
