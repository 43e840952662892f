//! The match's single source of randomness.
//!
//! `MatchEngine::ignite` seeds one `GameRng` and lends it by `&mut` to the
//! turn-order shuffle and to each mulligan draw in seat order. Nothing else
//! in the crate draws random numbers, so a seed pins down the whole setup.
//!
//! ```
//! use eternal_sim::core::GameRng;
//!
//! let mut order = vec![0, 1, 2];
//! let mut same = order.clone();
//! GameRng::new(42).shuffle(&mut order);
//! GameRng::new(42).shuffle(&mut same);
//! assert_eq!(order, same);
//! ```

use std::ops::Range;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed for a separate match, as a batch derives them from its master.
    pub fn next_seed(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Uniform pick from `range`, e.g. how many powers an opening hand gets.
    pub fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform permutation in place: turn order, decklists.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(rng: &mut GameRng) -> Vec<u32> {
        let mut deck: Vec<u32> = (0..75).collect();
        rng.shuffle(&mut deck);
        deck
    }

    #[test]
    fn test_seeded_deal_repeats() {
        assert_eq!(deal(&mut GameRng::new(9)), deal(&mut GameRng::new(9)));
        assert_ne!(deal(&mut GameRng::new(9)), deal(&mut GameRng::new(10)));
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut deck = deal(&mut GameRng::new(3));
        deck.sort_unstable();
        assert_eq!(deck, (0..75).collect::<Vec<_>>());
    }

    #[test]
    fn test_batch_seeds_repeat() {
        let mut master = GameRng::new(7);
        let seeds: Vec<_> = (0..4).map(|_| master.next_seed()).collect();

        let mut again = GameRng::new(7);
        assert_eq!(seeds, (0..4).map(|_| again.next_seed()).collect::<Vec<_>>());
        assert_ne!(seeds[0], seeds[1]);
    }

    #[test]
    fn test_power_count_in_range() {
        let mut rng = GameRng::new(1);
        assert!((0..200).map(|_| rng.gen_range_usize(2..5)).all(|n| (2..5).contains(&n)));
    }
}
