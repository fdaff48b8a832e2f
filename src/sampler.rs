use std::sync::Mutex;

use crate::utils::MutexUtils;

/// Source of randomness used to shuffle a pool before truncating it
pub trait Shuffler {
    /// Permute the items in place
    fn shuffle<T>(&self, items: &mut [T]);
}

/// Non-deterministic shuffle using the thread-local `fastrand` generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadShuffler;

impl Shuffler for ThreadShuffler {
    fn shuffle<T>(&self, items: &mut [T]) {
        fastrand::shuffle(items);
    }
}

/// Reproducible shuffle: the same seed yields the same permutations
#[derive(Debug)]
pub struct SeededShuffler {
    rng: Mutex<fastrand::Rng>,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle<T>(&self, items: &mut [T]) {
        self.rng.with_lock(|mut rng| rng.shuffle(items));
    }
}

/// Take at most `count` items out of the pool, in random order and without replacement.
pub fn sample<T, S: Shuffler>(mut pool: Vec<T>, count: usize, shuffler: &S) -> Vec<T> {
    if count == 0 || pool.is_empty() {
        return Vec::new();
    }

    shuffler.shuffle(&mut pool);
    pool.truncate(count);
    pool
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Reverse the items, so tests know the exact output
    struct ReverseShuffler;

    impl Shuffler for ReverseShuffler {
        fn shuffle<T>(&self, items: &mut [T]) {
            items.reverse();
        }
    }

    #[test]
    fn returns_exactly_count_distinct_items() {
        let pool: Vec<u32> = (0..20).collect();
        for count in 1..=20 {
            let picked = sample(pool.clone(), count, &ThreadShuffler);
            assert_eq!(picked.len(), count);

            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), count);
            assert!(picked.iter().all(|v| pool.contains(v)));
        }
    }

    #[test]
    fn count_above_pool_size_returns_permutation() {
        let pool: Vec<u32> = (0..6).collect();
        let mut picked = sample(pool.clone(), 50, &ThreadShuffler);
        assert_eq!(picked.len(), pool.len());

        picked.sort_unstable();
        assert_eq!(picked, pool);
    }

    #[test]
    fn empty_cases() {
        assert!(sample(vec![1, 2, 3], 0, &ThreadShuffler).is_empty());
        assert!(sample(Vec::<u32>::new(), 4, &ThreadShuffler).is_empty());
    }

    #[test]
    fn shuffles_before_truncating() {
        assert_eq!(sample(vec![1, 2, 3, 4], 2, &ReverseShuffler), vec![4, 3]);
    }

    #[test]
    fn same_seed_same_sample() {
        let pool: Vec<u32> = (0..100).collect();
        let a = sample(pool.clone(), 10, &SeededShuffler::new(42));
        let b = sample(pool, 10, &SeededShuffler::new(42));
        assert_eq!(a, b);
    }
}
