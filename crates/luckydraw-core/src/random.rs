// Uniform random source used by the shuffler and the session token generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A uniform pseudo-random source over `[0, 1)`.
///
/// Cryptographic quality is not required.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Default source backed by `rand`'s `StdRng`.
#[derive(Debug, Clone)]
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        SystemRandom {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source for reproducible draws and tests.
    pub fn seeded(seed: u64) -> Self {
        SystemRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SystemRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values outside `[0, 1)` are clamped by consumers, not here.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        SequenceRandom { values, next: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_stays_in_unit_interval() {
        let mut rng = SystemRandom::seeded(7);
        for _ in 0..1_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "{v} outside [0, 1)");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SystemRandom::seeded(99);
        let mut b = SystemRandom::seeded(99);
        for _ in 0..16 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn sequence_random_cycles() {
        let mut rng = SequenceRandom::new(vec![0.1, 0.9]);
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(rng.next_f64(), 0.9);
        assert_eq!(rng.next_f64(), 0.1);
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let mut rng = SequenceRandom::new(vec![]);
        assert_eq!(rng.next_f64(), 0.0);
    }
}
