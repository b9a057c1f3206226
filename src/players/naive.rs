//! Stand-in for the interactive seat during simulations
//!
//! Picks a random legal lyric and passes only when it has none. It has no memory,
//! which is what the bot's ledger is meant to exploit.

use super::{Participant, Turn};
use crate::console::{Console, Event};
use crate::core::{Inventory, Lyric, Seat};
use crate::game::GameError;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

#[derive(Debug, Clone)]
pub struct NaiveSinger {
    name: String,
    inventory: Inventory,
    rng: StdRng,
}

impl NaiveSinger {
    #[must_use]
    pub fn new(lyrics: Vec<Lyric>, seed: u64) -> Self {
        Self {
            name: "Naive".to_string(),
            inventory: Inventory::new(lyrics),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Participant for NaiveSinger {
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
        let passed = !self.inventory.has_candidate(required);
        if passed {
            console.announce(&Event::Passed {
                name: self.name.clone(),
                seat: Seat::Human,
            });
        }

        let required = if passed { None } else { required };
        let slots: Vec<usize> = self
            .inventory
            .candidates(required)
            .map(|(index, _)| index)
            .collect();

        let lyric = slots
            .choose(&mut self.rng)
            .and_then(|&index| self.inventory.remove(index))
            .ok_or_else(|| GameError::EmptyInventory {
                name: self.name.clone(),
            })?;

        console.announce(&Event::Sang {
            name: self.name.clone(),
            lyric: lyric.clone(),
        });

        Ok(Turn { passed, lyric })
    }
}
