//! Player observations and the sinks that record them.
//!
//! Each player owns one [`PlayerSink`]. The sink receives an [`Event`] at
//! every step of the turn protocol and is closed exactly once when the
//! player terminates. [`Event`]'s `Display` renders the text lines of the
//! per-player output files.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::hand::Hand;

/// Something a player reports to its sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The dealt hand, reported before any player starts.
    InitialHand {
        /// Reporting player.
        player: u32,
        /// Hand as dealt.
        hand: Hand,
    },
    /// One completed draw-and-discard turn.
    Turn {
        /// Reporting player.
        player: u32,
        /// Card taken from the left deck.
        drawn: Card,
        /// Left deck id.
        left: u32,
        /// Card put on the right deck.
        discarded: Card,
        /// Right deck id.
        right: u32,
        /// Hand after the turn.
        hand: Hand,
    },
    /// The player claimed the game.
    Won {
        /// Reporting player.
        player: u32,
        /// Winning hand.
        hand: Hand,
    },
    /// The player learned that another player won.
    Notified {
        /// Reporting player.
        player: u32,
        /// The winner.
        winner: u32,
        /// Hand held when leaving.
        hand: Hand,
    },
    /// The player left an aborted run.
    Exited {
        /// Reporting player.
        player: u32,
        /// Hand held when leaving.
        hand: Hand,
    },
}

impl Event {
    /// Returns the player that reported the event.
    #[must_use]
    pub const fn player(&self) -> u32 {
        match self {
            Self::InitialHand { player, .. }
            | Self::Turn { player, .. }
            | Self::Won { player, .. }
            | Self::Notified { player, .. }
            | Self::Exited { player, .. } => *player,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitialHand { player, hand } => write!(f, "player {player} initial hand {hand}"),
            Self::Turn {
                player,
                drawn,
                left,
                discarded,
                right,
                hand,
            } => {
                writeln!(f, "player {player} draws a {drawn} from deck {left}")?;
                writeln!(f, "player {player} discards a {discarded} to deck {right}")?;
                write!(f, "player {player} current hand is {hand}")
            }
            Self::Won { player, hand } => {
                writeln!(f, "player {player} wins")?;
                write!(f, "player {player} final hand: {hand}")
            }
            Self::Notified {
                player,
                winner,
                hand,
            } => {
                writeln!(
                    f,
                    "player {winner} has informed player {player} that player {winner} has won"
                )?;
                writeln!(f, "player {player} exits")?;
                write!(f, "player {player} hand: {hand}")
            }
            Self::Exited { player, hand } => {
                writeln!(f, "player {player} exits")?;
                write!(f, "player {player} hand: {hand}")
            }
        }
    }
}

/// Receives a player's observations.
///
/// Sinks are called only from the owning player's thread.
pub trait PlayerSink {
    /// Records one observation.
    fn observe(&mut self, event: &Event);

    /// Releases the sink. Called once, when the player terminates.
    fn close(&mut self) {}
}

/// Collects events in memory.
impl PlayerSink for Vec<Event> {
    fn observe(&mut self, event: &Event) {
        self.push(*event);
    }
}

/// A sink that drops every observation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSink;

impl PlayerSink for NullSink {
    fn observe(&mut self, _event: &Event) {}
}

#[cfg(feature = "std")]
mod file {
    use std::fs::File;
    use std::io::{self, BufWriter, Write};
    use std::path::{Path, PathBuf};

    use super::{Event, PlayerSink};
    use crate::result::DeckReport;

    /// Writes a player's observations to `player<id>_output.txt`.
    ///
    /// The first write error is logged and the file is abandoned; the game
    /// itself never fails because of its output.
    #[derive(Debug)]
    pub struct FileSink {
        path: PathBuf,
        writer: Option<BufWriter<File>>,
    }

    impl FileSink {
        /// Creates (or truncates) the output file of `player` inside `dir`.
        ///
        /// # Errors
        ///
        /// Returns an error if the file cannot be created.
        pub fn create(dir: &Path, player: u32) -> io::Result<Self> {
            let path = dir.join(format!("player{player}_output.txt"));
            let file = File::create(&path)?;
            Ok(Self {
                path,
                writer: Some(BufWriter::new(file)),
            })
        }

        /// Returns the path of the output file.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        fn abandon(&mut self, err: &io::Error) {
            log::warn!("failed to write {}: {err}", self.path.display());
            self.writer = None;
        }
    }

    impl PlayerSink for FileSink {
        fn observe(&mut self, event: &Event) {
            let Some(writer) = self.writer.as_mut() else {
                return;
            };
            if let Err(err) = writeln!(writer, "{event}") {
                self.abandon(&err);
            }
        }

        fn close(&mut self) {
            let Some(mut writer) = self.writer.take() else {
                return;
            };
            if let Err(err) = writer.flush() {
                log::warn!("failed to flush {}: {err}", self.path.display());
            }
        }
    }

    /// Writes `deck<id>_output.txt` for every deck into `dir`.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while creating or writing a file.
    pub fn write_deck_files(dir: &Path, decks: &[DeckReport]) -> io::Result<()> {
        for deck in decks {
            let path = dir.join(format!("deck{}_output.txt", deck.id));
            let mut file = BufWriter::new(File::create(&path)?);
            writeln!(file, "{deck}")?;
            file.flush()?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use file::{FileSink, write_deck_files};
