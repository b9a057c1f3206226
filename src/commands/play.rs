//! Interactive game command
//!
//! Deals the corpus, tosses, and plays one game to the end against the bot.

use crate::console::Console;
use crate::core::{Lyric, Outcome};
use crate::game::{Game, GameError};
use rand::Rng;
use tracing::info;

/// Play one full game on `console`
///
/// # Errors
///
/// Returns an error if the corpus is too small to deal, or if input closes or fails
/// before the game ends.
pub fn run_play<R: Rng + ?Sized>(
    corpus: Vec<Lyric>,
    name: &str,
    console: &mut dyn Console,
    rng: &mut R,
) -> Result<Outcome, GameError> {
    info!(lyrics = corpus.len(), "dealing a new game");
    let mut game = Game::deal(corpus, name, rng)?;
    let scoreboard = game.run(console, rng)?;
    Ok(scoreboard.outcome())
}
