//! Console seam between the game and whoever is sitting at it
//!
//! The game never prints or reads directly. It announces [`Event`]s and asks for
//! one line of input at a time; the terminal, the simulator and tests each supply
//! their own [`Console`].

mod terminal;

pub use terminal::Terminal;

use crate::core::{Lyric, Scoreboard, Seat};
use crate::game::Coin;
use crate::players::IllegalChoice;
use std::collections::VecDeque;
use std::io;

/// Something the table should hear about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The interactive singer is asked to call the coin
    TossCall {
        name: String,
    },
    /// Coin landed; `first` sings first
    TossResult {
        call: Option<Coin>,
        coin: Coin,
        first: Seat,
    },
    /// The interactive singer must pick a numbered lyric or pass
    Prompt {
        name: String,
        required: Option<char>,
        choices: Vec<Lyric>,
    },
    Sang {
        name: String,
        lyric: Lyric,
    },
    /// `seat` passed; the other seat gets the point
    Passed {
        name: String,
        seat: Seat,
    },
    WrongChoice(IllegalChoice),
    GameOver {
        human: String,
        bot: String,
        scoreboard: Scoreboard,
    },
}

/// Line-oriented input plus event output
pub trait Console {
    /// Read one line of input
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the underlying reader fails.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn announce(&mut self, event: &Event);
}

/// Console with no input that drops every event; used for automated games
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Console for Silent {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(None)
    }

    fn announce(&mut self, _event: &Event) {}
}

/// Console fed from a fixed list of input lines, recording every event
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    inputs: VecDeque<String>,
    events: Vec<Event>,
}

impl Scripted {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Input lines not yet consumed
    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for Scripted {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }

    fn announce(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
