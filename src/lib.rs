//! A ring card game played by concurrent players.
//!
//! `N` players sit in a ring between `N` decks. Player `i` draws from deck
//! `i` (its left) and discards to deck `i + 1` (its right, wrapping around).
//! Every turn locks both decks in id order, swaps one card of the hand for
//! the drawn card, and discards the replaced card. The first player holding
//! four cards equal to its own id claims the [`WinnerRegistry`] and every
//! other player stops once it observes the claim.
//!
//! # Example
//!
//! ```no_run
//! use ringdeal::{Game, GameOptions, NullSink, Pack};
//!
//! let pack = Pack::generate(4, 7);
//! let game = Game::new(GameOptions::default().with_players(4), &pack).unwrap();
//! let result = game.play((0..4).map(|_| NullSink).collect()).unwrap();
//! println!("player {} wins", result.winner);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod output;
pub mod pack;
pub mod registry;
pub mod result;
mod sync;

// Re-export main types
pub use card::Card;
pub use deck::{Deck, DeckGuard, lock_pair};
pub use error::{DealError, PackError, PlayError};
pub use game::{Exit, Game, Player, PlayerState};
pub use hand::{HAND_SIZE, Hand};
pub use options::{Backoff, GameOptions};
#[cfg(feature = "std")]
pub use output::FileSink;
pub use output::{Event, NullSink, PlayerSink};
pub use pack::{CARDS_PER_PLAYER, Pack};
pub use registry::WinnerRegistry;
pub use result::{DeckReport, GameResult, PlayerReport};
