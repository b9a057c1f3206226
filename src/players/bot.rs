//! The automated opponent
//!
//! Sings the smallest lyric that keeps the chain alive, unless one of its options ends
//! on a letter that has already made the human pass. Those get sung first.

use super::{Participant, Turn};
use crate::console::{Console, Event};
use crate::core::{Inventory, Lyric, Seat, fold_letter};
use crate::game::GameError;
use tracing::debug;

/// Which slot the bot settled on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Zero-based inventory slot
    pub index: usize,
    /// No lyric matched the required letter, so the bot had to pass
    pub passed: bool,
    /// The chosen lyric ends on a letter from the loss ledger
    pub trap: bool,
}

/// Pick the bot's lyric for this turn
///
/// Candidates are the lyrics starting with `required` (all of them when `None`). If
/// there are none the bot passes and falls back to its whole inventory. Among the
/// candidates, the first whose last letter is in `ledger` wins; otherwise the first
/// candidate in inventory order.
///
/// Returns `None` only when the inventory is empty.
#[must_use]
pub fn select_lyric(
    inventory: &Inventory,
    required: Option<char>,
    ledger: &[char],
) -> Option<Selection> {
    let passed = !inventory.has_candidate(required);
    let required = if passed { None } else { required };

    let mut candidates = inventory.candidates(required).peekable();
    let (first, _) = *candidates.peek()?;

    let trap = candidates
        .find(|(_, lyric)| ledger.contains(&lyric.last_letter()))
        .map(|(index, _)| index);

    Some(Selection {
        index: trap.unwrap_or(first),
        passed,
        trap: trap.is_some(),
    })
}

/// Heuristic opponent with a memory of the human's weak letters
#[derive(Debug, Clone)]
pub struct Bot {
    name: String,
    inventory: Inventory,
    opponent_losses: Vec<char>,
}

impl Bot {
    #[must_use]
    pub fn new(lyrics: Vec<Lyric>) -> Self {
        Self {
            name: "Bot".to_string(),
            inventory: Inventory::new(lyrics),
            opponent_losses: Vec::new(),
        }
    }
}

impl Participant for Bot {
    fn name(&self) -> &str {
        &self.name
    }

    fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    fn play(
        &mut self,
        required: Option<char>,
        console: &mut dyn Console,
    ) -> Result<Turn, GameError> {
        let empty = || GameError::EmptyInventory {
            name: self.name.clone(),
        };
        let selection = select_lyric(&self.inventory, required, &self.opponent_losses)
            .ok_or_else(empty)?;

        if selection.passed {
            debug!(required = ?required, "bot has no matching lyric, passing");
            console.announce(&Event::Passed {
                name: self.name.clone(),
                seat: Seat::Bot,
            });
        }

        let lyric = self.inventory.remove(selection.index).ok_or_else(empty)?;
        debug!(
            lyric = lyric.text(),
            trap = selection.trap,
            remaining = self.inventory.len(),
            "bot sings"
        );
        console.announce(&Event::Sang {
            name: self.name.clone(),
            lyric: lyric.clone(),
        });

        Ok(Turn {
            passed: selection.passed,
            lyric,
        })
    }

    fn record_opponent_pass(&mut self, letter: char) {
        self.opponent_losses.push(fold_letter(letter));
        debug!(
            letter = %letter,
            ledger = self.opponent_losses.len(),
            "bot remembers a weak letter"
        );
    }

    fn opponent_losses(&self) -> &[char] {
        &self.opponent_losses
    }
}
