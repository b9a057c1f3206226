//! Lyric line representation
//!
//! A Lyric stores one sung line along with its case-folded first and last letters,
//! which are all the chain rules ever look at.

use std::fmt;

/// A single lyric line with its chain letters
///
/// Ordering is lexicographic on the text, which fixes the order of every inventory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lyric {
    text: String,
    first: char,
    last: char,
}

/// Error type for invalid lyric lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LyricError {
    Empty,
}

impl fmt::Display for LyricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Lyric must contain at least one character"),
        }
    }
}

impl std::error::Error for LyricError {}

/// Fold a letter for case-insensitive comparison
///
/// Letters whose lowercase form spans several chars keep only the first one.
#[inline]
#[must_use]
pub fn fold_letter(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

impl Lyric {
    /// Create a new Lyric from a line of text
    ///
    /// Surrounding whitespace is trimmed; the text is otherwise kept as written.
    ///
    /// # Errors
    /// Returns `LyricError::Empty` if nothing is left after trimming.
    ///
    /// # Examples
    /// ```
    /// use antakshari::core::Lyric;
    ///
    /// let lyric = Lyric::new("  Echo ends O ").unwrap();
    /// assert_eq!(lyric.text(), "Echo ends O");
    /// assert_eq!(lyric.first_letter(), 'e');
    /// assert_eq!(lyric.last_letter(), 'o');
    ///
    /// assert!(Lyric::new("   ").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, LyricError> {
        let text = text.into().trim().to_string();

        let (Some(first), Some(last)) = (text.chars().next(), text.chars().next_back()) else {
            return Err(LyricError::Empty);
        };

        Ok(Self {
            first: fold_letter(first),
            last: fold_letter(last),
            text,
        })
    }

    /// Get the lyric as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// First letter, lowercased
    #[inline]
    #[must_use]
    pub const fn first_letter(&self) -> char {
        self.first
    }

    /// Last letter, lowercased; becomes the next chain letter once sung
    #[inline]
    #[must_use]
    pub const fn last_letter(&self) -> char {
        self.last
    }

    /// Check whether this lyric may be sung when `required` is in effect
    ///
    /// `None` means any lyric is allowed.
    #[inline]
    #[must_use]
    pub fn starts_with_letter(&self, required: Option<char>) -> bool {
        required.is_none_or(|letter| self.first == fold_letter(letter))
    }
}

impl fmt::Display for Lyric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
