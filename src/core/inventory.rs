//! A participant's private pool of lyrics
//!
//! Sorted once on construction and only ever shrunk by removing one slot at a time,
//! so the remaining lyrics always keep their original relative order.

use super::Lyric;

/// Shrink-only, sorted collection of lyrics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    lyrics: Vec<Lyric>,
}

impl Inventory {
    /// Create an inventory, sorting the lyrics lexicographically
    #[must_use]
    pub fn new(mut lyrics: Vec<Lyric>) -> Self {
        lyrics.sort();
        Self { lyrics }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lyrics.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lyrics.is_empty()
    }

    /// Get the lyric at a zero-based slot
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Lyric> {
        self.lyrics.get(index)
    }

    /// Remaining lyrics in inventory order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Lyric] {
        &self.lyrics
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lyric> {
        self.lyrics.iter()
    }

    /// Slots (with their lyrics) that may be sung under `required`, in inventory order
    pub fn candidates(&self, required: Option<char>) -> impl Iterator<Item = (usize, &Lyric)> {
        self.lyrics
            .iter()
            .enumerate()
            .filter(move |(_, lyric)| lyric.starts_with_letter(required))
    }

    /// Check whether any remaining lyric satisfies `required`
    #[must_use]
    pub fn has_candidate(&self, required: Option<char>) -> bool {
        self.candidates(required).next().is_some()
    }

    /// Remove the lyric at a zero-based slot
    ///
    /// Returns `None` and leaves the inventory untouched when the slot doesn't exist.
    pub fn remove(&mut self, index: usize) -> Option<Lyric> {
        (index < self.lyrics.len()).then(|| self.lyrics.remove(index))
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Lyric;
    type IntoIter = std::slice::Iter<'a, Lyric>;

    fn into_iter(self) -> Self::IntoIter {
        self.lyrics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory(texts: &[&str]) -> Inventory {
        Inventory::new(texts.iter().map(|t| Lyric::new(*t).unwrap()).collect())
    }

    fn texts(inventory: &Inventory) -> Vec<&str> {
        inventory.iter().map(Lyric::text).collect()
    }

    /// True if `sub` appears in `full` in the same relative order
    fn is_subsequence(sub: &[&str], full: &[&str]) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|s| rest.any(|f| f == s))
    }

    #[test]
    fn new_sorts_lyrics() {
        let inv = inventory(&["Owl ends L", "Echo ends O", "Apple ends E"]);
        assert_eq!(texts(&inv), ["Apple ends E", "Echo ends O", "Owl ends L"]);
    }

    #[test]
    fn candidates_filter_by_first_letter() {
        let inv = inventory(&["Apple", "echo", "Eagle", "Owl"]);
        let found: Vec<(usize, &str)> = inv
            .candidates(Some('E'))
            .map(|(i, l)| (i, l.text()))
            .collect();
        assert_eq!(found, [(1, "Eagle"), (3, "echo")]);
    }

    #[test]
    fn candidates_unconstrained_returns_everything() {
        let inv = inventory(&["b", "a", "c"]);
        assert_eq!(inv.candidates(None).count(), 3);
    }

    #[test]
    fn has_candidate_reports_missing_letter() {
        let inv = inventory(&["Apple", "Owl"]);
        assert!(inv.has_candidate(Some('o')));
        assert!(!inv.has_candidate(Some('z')));
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut inv = inventory(&["Apple"]);
        assert_eq!(inv.remove(1), None);
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn removal_keeps_sorted_subsequence() {
        let initial = ["Delta", "Alpha", "Echo", "Charlie", "Bravo", "Foxtrot"];
        let mut inv = inventory(&initial);
        let sorted: Vec<String> = texts(&inv).iter().map(ToString::to_string).collect();
        let sorted: Vec<&str> = sorted.iter().map(String::as_str).collect();

        for index in [3, 0, 2, 1, 0, 0] {
            assert!(inv.remove(index).is_some());
            assert!(is_subsequence(&texts(&inv), &sorted));
        }
        assert!(inv.is_empty());
    }

    #[test]
    fn duplicate_lyrics_occupy_separate_slots() {
        let mut inv = inventory(&["Echo", "Echo"]);
        assert_eq!(inv.len(), 2);
        inv.remove(0);
        assert_eq!(texts(&inv), ["Echo"]);
    }
}
