//! Simulation command
//!
//! Plays many silent games between the bot and a [`NaiveSinger`] to see how much the
//! loss ledger is worth.

use crate::console::Silent;
use crate::core::{Lyric, Outcome, Seat};
use crate::game::{Coin, Game, GameError, deal_lyrics};
use crate::players::{Bot, NaiveSinger};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Aggregate result of a simulation run
#[derive(Debug, Clone, Default)]
pub struct SimulationResult {
    pub games: usize,
    pub human_wins: usize,
    pub bot_wins: usize,
    pub ties: usize,
    pub total_turns: usize,
    pub human_passes: usize,
    pub bot_passes: usize,
    /// How often each required letter forced the naive seat to pass
    pub human_pass_letters: FxHashMap<char, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games as f64
        }
    }

    /// Letters that most often forced a pass, most frequent first
    #[must_use]
    pub fn worst_letters(&self, limit: usize) -> Vec<(char, usize)> {
        let mut letters: Vec<(char, usize)> = self
            .human_pass_letters
            .iter()
            .map(|(&letter, &count)| (letter, count))
            .collect();
        letters.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        letters.truncate(limit);
        letters
    }
}

/// Run `games` automated games on `corpus`
///
/// Every game is dealt, tossed and played with randomness drawn from `rng`.
///
/// # Errors
///
/// Returns an error if the corpus is too small to deal or a game breaks an invariant.
pub fn run_simulation<R: Rng + ?Sized>(
    corpus: &[Lyric],
    games: usize,
    show_progress: bool,
    rng: &mut R,
) -> Result<SimulationResult, GameError> {
    let start = Instant::now();
    let mut result = SimulationResult {
        games,
        ..SimulationResult::default()
    };

    let pb = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    for game_index in 0..games {
        let (human, bot) = deal_lyrics(corpus.to_vec(), rng)?;
        let mut game = Game::new(
            Box::new(NaiveSinger::new(human, rng.random())),
            Box::new(Bot::new(bot)),
        );
        let call = Coin::flip(rng);
        game.toss(Some(call), rng);

        let scoreboard = game.run(&mut Silent, rng)?;
        match scoreboard.outcome() {
            Outcome::Tie => result.ties += 1,
            Outcome::HumanWins => result.human_wins += 1,
            Outcome::BotWins => result.bot_wins += 1,
        }

        result.total_turns += game.history().len();
        for record in game.history().iter().filter(|r| r.passed) {
            match record.seat {
                Seat::Human => {
                    result.human_passes += 1;
                    if let Some(letter) = record.required {
                        *result.human_pass_letters.entry(letter).or_insert(0) += 1;
                    }
                }
                Seat::Bot => result.bot_passes += 1,
            }
        }
        debug!(
            game = game_index,
            human = scoreboard.human,
            bot = scoreboard.bot,
            "simulated game"
        );

        if game_index % 10 == 0 {
            pb.set_message(format!("Bot wins: {}", result.bot_wins));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    result.duration = start.elapsed();

    Ok(result)
}
