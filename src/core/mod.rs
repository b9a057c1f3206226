//! Core domain types for Antakshari
//!
//! Lyrics, inventories and the seating/score bookkeeping shared by every other module.
//! Nothing here touches input, output or randomness.

mod inventory;
mod lyric;
mod seat;

pub use inventory::Inventory;
pub use lyric::{Lyric, LyricError, fold_letter};
pub use seat::{Outcome, Scoreboard, Seat};
