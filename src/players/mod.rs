//! Participants and the turn contract they share
//!
//! The controller only ever talks to a `dyn Participant`; the interactive singer,
//! the trap-setting bot and the simulator's naive singer are interchangeable.

pub mod bot;
pub mod human;
pub mod naive;

pub use bot::{Bot, Selection, select_lyric};
pub use human::{Human, IllegalChoice, Move, PASS_SENTINEL, validate_choice};
pub use naive::NaiveSinger;

use crate::console::Console;
use crate::core::{Inventory, Lyric};
use crate::game::GameError;

/// What a single turn produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Whether the participant passed before singing
    pub passed: bool,
    /// The lyric that was sung and removed from the inventory
    pub lyric: Lyric,
}

impl Turn {
    /// Letter the next participant must start with
    #[inline]
    #[must_use]
    pub const fn chain_letter(&self) -> char {
        self.lyric.last_letter()
    }
}

/// A seat at the table
pub trait Participant {
    /// Display name used in narration
    fn name(&self) -> &str;

    fn inventory(&self) -> &Inventory;

    /// Play one turn under `required` (`None` = any lyric)
    ///
    /// The participant must end the turn by singing exactly one lyric, passing at
    /// most once beforehand.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyInventory` if there is nothing left to sing, or an
    /// input error if the console gives out.
    fn play(
        &mut self,
        required: Option<char>,
        console: &mut dyn Console,
    ) -> Result<Turn, GameError>;

    /// Remember a letter the opponent could not answer
    ///
    /// Ignored by everyone except participants that keep a loss ledger.
    fn record_opponent_pass(&mut self, _letter: char) {}

    /// Letters recorded through [`Participant::record_opponent_pass`], oldest first
    fn opponent_losses(&self) -> &[char] {
        &[]
    }

    fn has_lyrics(&self) -> bool {
        !self.inventory().is_empty()
    }
}
