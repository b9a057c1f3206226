//! Corpus loading utilities
//!
//! Provides functions to load lyrics from files or use the embedded corpus.

use crate::core::Lyric;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load lyrics from a file, one per line
///
/// Lines are trimmed and blank lines skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use antakshari::corpus::loader::load_from_file;
///
/// let lyrics = load_from_file("lyrics.txt").unwrap();
/// println!("Loaded {} lyrics", lyrics.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Lyric>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let lyrics = lyrics_from_lines(content.lines());
    if lyrics.is_empty() {
        warn!(path = %path.display(), "corpus file has no lyrics");
    } else {
        debug!(path = %path.display(), count = lyrics.len(), "loaded corpus");
    }

    Ok(lyrics)
}

/// Convert the embedded string slice to lyrics
///
/// # Examples
/// ```
/// use antakshari::corpus::loader::lyrics_from_slice;
/// use antakshari::corpus::LYRICS;
///
/// let lyrics = lyrics_from_slice(LYRICS);
/// assert_eq!(lyrics.len(), LYRICS.len());
/// ```
#[must_use]
pub fn lyrics_from_slice(slice: &[&str]) -> Vec<Lyric> {
    lyrics_from_lines(slice.iter().copied())
}

fn lyrics_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Lyric> {
    lines.filter_map(|line| Lyric::new(line).ok()).collect()
}
