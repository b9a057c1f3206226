//! Splitting the corpus between the two seats

use super::GameError;
use crate::core::Lyric;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Shuffle `items`, stripe them into even and odd positions, then shuffle which half
/// comes first
///
/// The halves are disjoint and together hold every item exactly once.
pub fn partition<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> [Vec<T>; 2] {
    items.shuffle(rng);

    let mut even = Vec::with_capacity(items.len().div_ceil(2));
    let mut odd = Vec::with_capacity(items.len() / 2);
    for (i, item) in items.into_iter().enumerate() {
        if i % 2 == 0 {
            even.push(item);
        } else {
            odd.push(item);
        }
    }

    let mut halves = [even, odd];
    halves.shuffle(rng);
    halves
}

/// Deal the corpus into `(human, bot)` halves
///
/// The human takes the half that [`partition`] puts last, the bot the other one.
///
/// # Errors
///
/// Returns `GameError::EmptyCorpus` if either half would be empty.
pub fn deal_lyrics<R: Rng + ?Sized>(
    corpus: Vec<Lyric>,
    rng: &mut R,
) -> Result<(Vec<Lyric>, Vec<Lyric>), GameError> {
    let lyrics = corpus.len();
    if lyrics < 2 {
        return Err(GameError::EmptyCorpus { lyrics });
    }

    let [bot, human] = partition(corpus, rng);
    debug!(human = human.len(), bot = bot.len(), "dealt lyrics");
    Ok((human, bot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn halves_are_disjoint_and_complete() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let items: Vec<u32> = (0..11).collect();

            let [a, b] = partition(items.clone(), &mut rng);

            assert!(a.iter().all(|x| !b.contains(x)));
            let mut union: Vec<u32> = a.iter().chain(&b).copied().collect();
            union.sort_unstable();
            assert_eq!(union, items);
        }
    }

    #[test]
    fn halves_differ_by_at_most_one() {
        let mut rng = StdRng::seed_from_u64(5);
        let [a, b] = partition((0..9).collect::<Vec<u32>>(), &mut rng);
        assert_eq!(a.len() + b.len(), 9);
        assert!(a.len().abs_diff(b.len()) == 1);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut rng = StdRng::seed_from_u64(1);
        let [a, b] = partition(vec!["echo", "echo"], &mut rng);
        assert_eq!(a, ["echo"]);
        assert_eq!(b, ["echo"]);
    }

    #[test]
    fn same_seed_same_split() {
        let items: Vec<u32> = (0..30).collect();
        let first = partition(items.clone(), &mut StdRng::seed_from_u64(9));
        let second = partition(items, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn deal_gives_everyone_something() {
        let corpus: Vec<Lyric> = ["Apple", "Echo", "Owl"]
            .iter()
            .map(|t| Lyric::new(*t).unwrap())
            .collect();
        let (human, bot) = deal_lyrics(corpus, &mut StdRng::seed_from_u64(2)).unwrap();
        assert!(!human.is_empty());
        assert!(!bot.is_empty());
        assert_eq!(human.len() + bot.len(), 3);
    }

    #[test]
    fn deal_rejects_tiny_corpus() {
        let corpus = vec![Lyric::new("Apple").unwrap()];
        assert!(matches!(
            deal_lyrics(corpus, &mut StdRng::seed_from_u64(2)),
            Err(GameError::EmptyCorpus { lyrics: 1 })
        ));
        assert!(matches!(
            deal_lyrics(Vec::new(), &mut StdRng::seed_from_u64(2)),
            Err(GameError::EmptyCorpus { lyrics: 0 })
        ));
    }
}
