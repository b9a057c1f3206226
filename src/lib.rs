//! Antakshari
//!
//! A two-seat word-chain singing game: every lyric must start with the letter the
//! previous one ended on. The bot keeps a ledger of letters that made you pass and
//! steers the chain back to them.
//!
//! # Quick Start
//!
//! ```rust
//! use antakshari::console::Scripted;
//! use antakshari::core::{Lyric, Outcome, Seat};
//! use antakshari::game::Game;
//! use antakshari::players::{Bot, Human};
//!
//! let lyrics = |texts: &[&str]| -> Vec<Lyric> {
//!     texts.iter().map(|t| Lyric::new(*t).unwrap()).collect()
//! };
//! let mut game = Game::new(
//!     Box::new(Human::new(lyrics(&["Apple ends E", "Owl ends L"]), "anil")),
//!     Box::new(Bot::new(lyrics(&["Echo ends O", "Lion ends N"]))),
//! );
//! let mut console = Scripted::new(["1", "1"]);
//!
//! game.begin(Seat::Human);
//! while game.outcome().is_none() {
//!     game.play_turn(&mut console).unwrap();
//! }
//! assert_eq!(game.outcome(), Some(Outcome::Tie));
//! ```

// Core domain types
pub mod core;

// Participants and the bot heuristic
pub mod players;

// Game controller
pub mod game;

// Console seam
pub mod console;

// Lyrics corpus
pub mod corpus;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
