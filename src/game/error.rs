//! Fatal game errors
//!
//! Illegal moves never show up here; those are re-prompted inside the turn.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum GameError {
    /// A turn was requested from a participant with nothing left to sing
    EmptyInventory {
        name: String,
    },
    /// A turn was requested before the toss
    NotStarted,
    /// A turn was requested after the game ended
    GameOver,
    /// Input ran out while waiting for a choice
    InputClosed,
    /// Fewer than two usable lyrics, so someone would start empty-handed
    EmptyCorpus {
        lyrics: usize,
    },
    Io(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInventory { name } => {
                write!(f, "{name} was asked to sing with no songs left")
            }
            Self::NotStarted => write!(f, "The coin has not been tossed yet"),
            Self::GameOver => write!(f, "The game is already over"),
            Self::InputClosed => write!(f, "Input closed before a song was chosen"),
            Self::EmptyCorpus { lyrics } => {
                write!(f, "Need at least 2 lyrics to deal, found {lyrics}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
