//! Seats at the table and the final tally

use std::fmt;

/// Fixed roles: seat 0 is the interactive singer, seat 1 the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Human,
    Bot,
}

impl Seat {
    /// Both seats in table order
    pub const ALL: [Self; 2] = [Self::Human, Self::Bot];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Human => 0,
            Self::Bot => 1,
        }
    }

    /// The seat that plays after this one
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Human => Self::Bot,
            Self::Bot => Self::Human,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Bot => write!(f, "bot"),
        }
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    HumanWins,
    BotWins,
}

/// Both scores, human first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub human: u32,
    pub bot: u32,
}

impl Scoreboard {
    #[must_use]
    pub const fn new(human: u32, bot: u32) -> Self {
        Self { human, bot }
    }

    /// Points held by `seat`
    #[must_use]
    pub const fn get(&self, seat: Seat) -> u32 {
        match seat {
            Seat::Human => self.human,
            Seat::Bot => self.bot,
        }
    }

    /// One point to `seat`
    pub(crate) fn award(&mut self, seat: Seat) {
        match seat {
            Seat::Human => self.human += 1,
            Seat::Bot => self.bot += 1,
        }
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        if self.human == self.bot {
            Outcome::Tie
        } else if self.human > self.bot {
            Outcome::HumanWins
        } else {
            Outcome::BotWins
        }
    }
}
