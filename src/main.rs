//! Antakshari - CLI
//!
//! Word-chain singing game against a bot that remembers where you stumbled.

use antakshari::{
    commands::{run_play, run_simulation},
    console::Terminal,
    core::Lyric,
    corpus::{LYRICS, load_from_file, lyrics_from_slice},
    game::Game,
    output::{print_deal, print_simulation_result},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Name used when none is given on the command line
const DEFAULT_NAME: &str = "Anil";

#[derive(Parser)]
#[command(
    name = "antakshari",
    about = "Sing a line that starts where the last one ended, or lose a point to the bot",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Lyrics file, one song line per line (default: built-in corpus)
    #[arg(short, long, global = true)]
    lyrics: Option<PathBuf>,

    /// Seed for dealing, the coin toss and simulations (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the bot (default)
    Play {
        /// Your name
        #[arg(short, long, default_value = DEFAULT_NAME)]
        name: String,
    },

    /// Pit the bot against a naive singer many times
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Show how the lyrics would be dealt, without playing
    Deal {
        /// Your name
        #[arg(short, long, default_value = DEFAULT_NAME)]
        name: String,
    },
}

/// `RUST_LOG` wins when set; otherwise `-v` picks debug for this crate
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "antakshari=debug" } else { "warn" }
}

fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // Narration owns stdout, so logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

/// Load the corpus from `path`, or fall back to the embedded one
fn load_corpus(path: Option<&Path>) -> Result<Vec<Lyric>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read lyrics from {}", path.display())),
        None => Ok(lyrics_from_slice(LYRICS)),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let corpus = load_corpus(cli.lyrics.as_deref())?;
    let mut rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        name: DEFAULT_NAME.to_string(),
    });

    match command {
        Commands::Play { name } => {
            run_play(corpus, &name, &mut Terminal, &mut rng)?;
        }
        Commands::Simulate { count } => {
            println!("Simulating {count} games...");
            let result = run_simulation(&corpus, count, true, &mut rng)?;
            print_simulation_result(&result);
        }
        Commands::Deal { name } => {
            let game = Game::deal(corpus, &name, &mut rng)?;
            print_deal(&game);
        }
    }

    Ok(())
}
