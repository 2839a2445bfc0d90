//! Ring wiring, dealing and running a game.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{HAND_SIZE, Hand};
use crate::options::GameOptions;
use crate::pack::Pack;
use crate::registry::WinnerRegistry;
use crate::result::DeckReport;

mod player;
pub mod state;

pub use player::Player;
pub use state::{Exit, PlayerState};

/// A dealt game: `N` hands, `N` decks and the shared winner registry.
///
/// Player `i` draws from deck `i` and discards to deck `i + 1`, with
/// player `N` discarding to deck `1`.
///
/// Players are only seated by [`Game::play`], which consumes the game, so
/// each dealt hand is held by exactly one player:
///
/// ```compile_fail
/// use ringdeal::{Game, GameOptions, NullSink, Pack};
///
/// let pack = Pack::from_values([1, 2, 1, 2, 1, 9, 1, 8, 3, 3, 3, 3, 4, 4, 4, 4]);
/// let game = Game::new(GameOptions::default().with_players(2), &pack).unwrap();
/// let first = game.seat(2, NullSink);
/// let second = game.seat(2, NullSink);
/// ```
#[derive(Debug)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Dealt hands, indexed by player id minus one.
    hands: Vec<Hand>,
    /// Decks in id order.
    decks: Vec<Deck>,
    /// Shared winner state of this run.
    registry: WinnerRegistry,
}

impl Game {
    /// Deals `pack` into a new game.
    ///
    /// Four rounds deal one card to each player in turn; the remaining cards
    /// go to the decks round-robin starting at deck 1.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two players or the pack does
    /// not hold exactly eight cards per player.
    ///
    /// # Example
    ///
    /// ```
    /// use ringdeal::{Game, GameOptions, Pack};
    ///
    /// let pack = Pack::from_values([1, 2, 1, 2, 1, 9, 1, 8, 3, 3, 3, 3, 4, 4, 4, 4]);
    /// let game = Game::new(GameOptions::default().with_players(2), &pack).unwrap();
    /// assert_eq!(game.hand(1).unwrap().values(), [1, 1, 1, 1]);
    /// assert_eq!(game.decks()[0].snapshot_values(), vec![3, 3, 4, 4]);
    /// ```
    pub fn new(options: GameOptions, pack: &Pack) -> Result<Self, DealError> {
        if options.players < 2 {
            return Err(DealError::TooFewPlayers(options.players));
        }

        let expected = Pack::required_len(options.players);
        if pack.len() != expected {
            return Err(DealError::PackSize {
                expected,
                found: pack.len(),
            });
        }

        let n = options.players as usize;
        let cards = pack.cards();

        let hands = (0..n)
            .map(|seat| Hand::new(core::array::from_fn(|round| cards[round * n + seat])))
            .collect();

        let mut piles: Vec<Vec<Card>> = (0..n).map(|_| Vec::new()).collect();
        for (index, card) in cards.iter().enumerate().skip(HAND_SIZE * n) {
            piles[index % n].push(*card);
        }
        let decks = piles
            .into_iter()
            .zip(1..)
            .map(|(pile, id)| Deck::with_cards(id, pile))
            .collect();

        log::info!("dealt {} cards to {n} players", pack.len());

        Ok(Self {
            options,
            hands,
            decks,
            registry: WinnerRegistry::new(),
        })
    }

    /// Returns the number of players.
    #[must_use]
    pub const fn players(&self) -> u32 {
        self.options.players
    }

    /// Returns the dealt hand of `player`.
    #[must_use]
    pub fn hand(&self, player: u32) -> Option<&Hand> {
        self.hands.get(Self::seat_index(player)?)
    }

    /// Returns the decks in id order.
    #[must_use]
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Returns the winner registry of this game.
    #[must_use]
    pub const fn registry(&self) -> &WinnerRegistry {
        &self.registry
    }

    /// Returns the number of cards in hands and decks.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hands.len() * HAND_SIZE + self.decks.iter().map(Deck::len).sum::<usize>()
    }

    fn seat_index(player: u32) -> Option<usize> {
        (player as usize).checked_sub(1)
    }

    /// Returns the current contents of every deck.
    #[must_use]
    pub fn deck_reports(&self) -> Vec<DeckReport> {
        self.decks
            .iter()
            .map(|deck| DeckReport {
                id: deck.id(),
                values: deck.snapshot_values(),
            })
            .collect()
    }
}

#[cfg(feature = "std")]
mod play {
    use alloc::format;
    use alloc::vec::Vec;
    use std::thread;

    use super::{Game, Player};
    use crate::error::PlayError;
    use crate::output::PlayerSink;
    use crate::result::{GameResult, PlayerReport};

    impl Game {
        /// Runs every player on its own thread until one of them wins.
        ///
        /// `sinks[i]` receives the observations of player `i + 1`. Every
        /// thread is joined before this returns, and every sink handed to a
        /// started player is closed.
        ///
        /// # Errors
        ///
        /// Returns an error if the number of sinks does not match the number
        /// of players, a thread cannot be spawned, or a player panics. In the
        /// last two cases the run is aborted and all other players stop.
        pub fn play<S>(self, sinks: Vec<S>) -> Result<GameResult<S>, PlayError>
        where
            S: PlayerSink + Send,
        {
            let expected = self.hands.len();
            if sinks.len() != expected {
                return Err(PlayError::SinkCount {
                    expected,
                    found: sinks.len(),
                });
            }

            let players = (1..)
                .zip(sinks)
                .filter_map(|(id, sink)| self.seat(id, sink))
                .collect::<Vec<_>>();

            log::info!("starting {expected} player threads");

            let reports = thread::scope(|scope| {
                let mut handles = Vec::with_capacity(expected);
                let mut spawn_error = None;
                let mut pending = players.into_iter();

                for player in pending.by_ref() {
                    let id = player.id();
                    let spawned = thread::Builder::new()
                        .name(format!("player-{id}"))
                        .spawn_scoped(scope, move || player.run());
                    match spawned {
                        Ok(handle) => handles.push((id, handle)),
                        Err(err) => {
                            log::error!("failed to start player {id}: {err}");
                            self.registry.abort();
                            spawn_error = Some(err);
                            break;
                        }
                    }
                }

                // Never started; run them against the aborted registry so
                // their sinks are closed like everyone else's.
                for player in pending {
                    drop(player.run());
                }

                let mut reports = Vec::with_capacity(expected);
                let mut panicked = None;
                for (id, handle) in handles {
                    match handle.join() {
                        Ok(report) => reports.push(report),
                        Err(_) => {
                            log::error!("player {id} panicked");
                            if panicked.is_none() {
                                panicked = Some(id);
                            }
                        }
                    }
                }

                if let Some(err) = spawn_error {
                    return Err(PlayError::from(err));
                }
                if let Some(id) = panicked {
                    return Err(PlayError::PlayerPanicked(id));
                }
                Ok(reports)
            })?;

            self.finish(reports)
        }

        /// Seats `player` at its place in the ring, holding its dealt hand.
        ///
        /// Returns `None` if no such player exists.
        fn seat<S: PlayerSink>(&self, player: u32, sink: S) -> Option<Player<'_, S>> {
            let index = Self::seat_index(player)?;
            let hand = *self.hands.get(index)?;
            let left = &self.decks[index];
            let right = &self.decks[(index + 1) % self.decks.len()];

            Some(
                Player::new(player, hand, left, right, &self.registry, sink)
                    .with_backoff(self.options.backoff),
            )
        }

        fn finish<S>(self, players: Vec<PlayerReport<S>>) -> Result<GameResult<S>, PlayError> {
            let winner = self.registry.winner().ok_or(PlayError::NoWinner)?;
            let decks = self.deck_reports();

            log::info!(
                "player {winner} won; {} turns played in total",
                players.iter().map(|report| report.turns).sum::<u64>()
            );

            Ok(GameResult {
                winner,
                players,
                decks,
            })
        }
    }
}
