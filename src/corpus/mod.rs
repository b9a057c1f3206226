//! Lyrics corpus
//!
//! Provides the embedded default corpus compiled into the binary, plus file loading.

mod embedded;
pub mod loader;

pub use embedded::{LYRICS, LYRICS_COUNT};
pub use loader::{load_from_file, lyrics_from_slice};
