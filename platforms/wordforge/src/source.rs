use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform index source the generator draws words with.
///
/// Implementations are shared by every caller of one generator, hence
/// `Send + Sync`. A source with interior state must synchronize itself.
pub trait RandomSource: Send + Sync {
    /// A uniform value in `[0, len)`. `len` is never zero.
    fn index(&self, len: usize) -> usize;
}

/// Draws from the thread-local `rand` generator, a CSPRNG reseeded from the
/// operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible source: a seeded `StdRng` behind a mutex.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index(&self, len: usize) -> usize {
        // A panic while holding the lock cannot leave the rng in a bad state
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
    fn index(&self, len: usize) -> usize {
        (**self).index(len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn index(&self, len: usize) -> usize {
        (**self).index(len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Arc<R> {
    fn index(&self, len: usize) -> usize {
        (**self).index(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let a = SeededRandom::new(7);
        let b = SeededRandom::new(7);

        let xs: Vec<usize> = (0..32).map(|_| a.index(1000)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.index(1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_sources_behind_pointers() {
        let boxed: Box<dyn RandomSource> = Box::new(SeededRandom::new(1));
        assert!(boxed.index(3) < 3);

        let shared = Arc::new(ThreadRandom);
        assert_eq!((&shared).index(1), 0);
    }

    proptest! {
        #[test]
        fn index_stays_in_range(len in 1usize..10_000, seed in any::<u64>()) {
            prop_assert!(ThreadRandom.index(len) < len);
            prop_assert!(SeededRandom::new(seed).index(len) < len);
        }
    }
}
