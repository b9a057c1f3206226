//! The interactive singer
//!
//! Choices arrive as raw text lines. Each one goes through [`validate_choice`], a pure
//! function, so the rules can be tested without a terminal.

use super::{Participant, Turn};
use crate::console::{Console, Event};
use crate::core::{Inventory, Lyric, Seat, fold_letter};
use crate::game::GameError;
use std::fmt;
use tracing::debug;

/// Input that means "pass this turn"
pub const PASS_SENTINEL: i64 = -1;

/// A legal move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Pass,
    /// Sing the lyric at this zero-based slot
    Sing(usize),
}

/// Why an attempt was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalChoice {
    /// Not a number at all
    Malformed(String),
    /// Number outside `1..=len` that isn't the pass sentinel
    OutOfRange {
        choice: i64,
        len: usize,
    },
    /// Second pass in the same turn
    AlreadyPassed,
    WrongLetter {
        expected: char,
        found: char,
    },
}

impl fmt::Display for IllegalChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(input) => write!(f, "'{input}' is not a number"),
            Self::OutOfRange { choice, len } => write!(f, "{choice} is not between 1 and {len}"),
            Self::AlreadyPassed => write!(f, "You already passed this turn, pick a song"),
            Self::WrongLetter { expected, found } => write!(
                f,
                "That song begins with {}, not {}",
                found.to_uppercase(),
                expected.to_uppercase()
            ),
        }
    }
}

impl std::error::Error for IllegalChoice {}

/// Check one raw input line against the current turn state
///
/// Slots are numbered from 1 as shown to the player; [`PASS_SENTINEL`] passes.
/// `required` is the letter still in effect, which the caller relaxes to `None`
/// after a pass.
///
/// # Errors
///
/// Returns the reason the attempt is illegal. Nothing is mutated either way.
pub fn validate_choice(
    inventory: &Inventory,
    required: Option<char>,
    has_passed: bool,
    raw: &str,
) -> Result<Move, IllegalChoice> {
    let raw = raw.trim();
    let choice: i64 = raw
        .parse()
        .map_err(|_| IllegalChoice::Malformed(raw.to_string()))?;

    if choice == PASS_SENTINEL {
        return if has_passed {
            Err(IllegalChoice::AlreadyPassed)
        } else {
            Ok(Move::Pass)
        };
    }

    let len = inventory.len();
    let index = usize::try_from(choice)
        .ok()
        .and_then(|slot| slot.checked_sub(1))
        .filter(|&index| index < len)
        .ok_or(IllegalChoice::OutOfRange { choice, len })?;

    // A pass clears the requirement, so only unpassed turns are held to the letter
    if let (Some(expected), false) = (required, has_passed) {
        let found = inventory
            .get(index)
            .map(Lyric::first_letter)
            .ok_or(IllegalChoice::OutOfRange { choice, len })?;
        if found != fold_letter(expected) {
            return Err(IllegalChoice::WrongLetter {
                expected: fold_letter(expected),
                found,
            });
        }
    }

    Ok(Move::Sing(index))
}

/// Title-case a player name ("anil kumar" -> "Anil Kumar")
#[must_use]
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Participant driven by console input
#[derive(Debug, Clone)]
pub struct Human {
    name: String,
    inventory: Inventory,
}

impl Human {
    #[must_use]
    pub fn new(lyrics: Vec<Lyric>, name: &str) -> Self {
        Self {
            name: title_case(name),
            inventory: Inventory::new(lyrics),
        }
    }
}

impl Participant for Human {
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
        if self.inventory.is_empty() {
            return Err(GameError::EmptyInventory {
                name: self.name.clone(),
            });
        }

        let mut required = required;
        let mut passed = false;

        loop {
            console.announce(&Event::Prompt {
                name: self.name.clone(),
                required,
                choices: self.inventory.as_slice().to_vec(),
            });

            let raw = console.read_line()?.ok_or(GameError::InputClosed)?;

            match validate_choice(&self.inventory, required, passed, &raw) {
                Ok(Move::Pass) => {
                    debug!(required = ?required, "human passes");
                    passed = true;
                    required = None;
                    console.announce(&Event::Passed {
                        name: self.name.clone(),
                        seat: Seat::Human,
                    });
                }
                Ok(Move::Sing(index)) => {
                    let Some(lyric) = self.inventory.remove(index) else {
                        return Err(GameError::EmptyInventory {
                            name: self.name.clone(),
                        });
                    };
                    console.announce(&Event::Sang {
                        name: self.name.clone(),
                        lyric: lyric.clone(),
                    });
                    return Ok(Turn { passed, lyric });
                }
                Err(illegal) => {
                    debug!(input = raw.as_str(), reason = %illegal, "rejected choice");
                    console.announce(&Event::WrongChoice(illegal));
                }
            }
        }
    }
}
