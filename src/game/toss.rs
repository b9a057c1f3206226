//! The opening coin toss

use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coin {
    Heads,
    Tails,
}

impl Coin {
    /// Parse a call, ignoring case and surrounding whitespace
    ///
    /// Anything other than heads/tails (or h/t) is `None`.
    #[must_use]
    pub fn parse(call: &str) -> Option<Self> {
        match call.trim().to_lowercase().as_str() {
            "heads" | "h" => Some(Self::Heads),
            "tails" | "t" => Some(Self::Tails),
            _ => None,
        }
    }

    /// Flip a fair coin
    pub fn flip<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Heads
        } else {
            Self::Tails
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heads => write!(f, "heads"),
            Self::Tails => write!(f, "tails"),
        }
    }
}
