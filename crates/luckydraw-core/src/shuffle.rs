// In-place Fisher-Yates shuffle.

use crate::random::RandomSource;

/// Shuffle `items` in place and return it for chaining.
///
/// Walks `i` from `len - 1` down to `1`, picks `j` uniformly in `[0, i]` and
/// swaps. Slices of length 0 or 1 are left untouched.
pub fn shuffle<'a, T, R>(items: &'a mut [T], rng: &mut R) -> &'a mut [T]
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = pick_index(rng.next_f64(), i);
        items.swap(i, j);
    }
    items
}

/// Map a `[0, 1)` sample onto `[0, max]`.
///
/// Out-of-range samples from a misbehaving source are clamped so the swap
/// never indexes past `max`.
fn pick_index(sample: f64, max: usize) -> usize {
    let scaled = (sample * (max + 1) as f64).floor();
    if scaled.is_nan() || scaled < 0.0 {
        0
    } else {
        (scaled as usize).min(max)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{SequenceRandom, SystemRandom};

    fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
        let mut v = items.to_vec();
        v.sort();
        v
    }

    #[test]
    fn preserves_multiset_and_length() {
        let mut rng = SystemRandom::seeded(1);
        for len in 0..20 {
            let original: Vec<u32> = (0..len).map(|n| n % 4).collect();
            let mut items = original.clone();
            shuffle(&mut items, &mut rng);
            assert_eq!(items.len(), original.len());
            assert_eq!(sorted(&items), sorted(&original));
        }
    }

    #[test]
    fn short_slices_unchanged() {
        let mut rng = SystemRandom::seeded(2);
        let mut empty: Vec<i32> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec!["only"];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec!["only"]);
    }

    #[test]
    fn zero_samples_rotate_deterministically() {
        // j = 0 at every step: [a,b,c,d] -> swap(3,0) -> [d,b,c,a]
        // -> swap(2,0) -> [c,b,d,a] -> swap(1,0) -> [b,c,d,a]
        let mut rng = SequenceRandom::new(vec![0.0]);
        let mut items = vec!['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut rng);
        assert_eq!(items, vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn high_samples_keep_order() {
        // j = i at every step, so every swap is a no-op.
        let mut rng = SequenceRandom::new(vec![0.999_999]);
        let mut items = vec![1, 2, 3, 4, 5];
        shuffle(&mut items, &mut rng);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn consumes_one_sample_per_swap() {
        struct Counting(usize);
        impl RandomSource for Counting {
            fn next_f64(&mut self) -> f64 {
                self.0 += 1;
                0.5
            }
        }
        let mut rng = Counting(0);
        let mut items: Vec<u8> = (0..10).collect();
        shuffle(&mut items, &mut rng);
        assert_eq!(rng.0, 9);
    }

    #[test]
    fn pick_index_clamps_out_of_range_samples() {
        assert_eq!(pick_index(1.0, 4), 4);
        assert_eq!(pick_index(7.5, 4), 4);
        assert_eq!(pick_index(-0.3, 4), 0);
        assert_eq!(pick_index(f64::NAN, 4), 0);
    }

    #[test]
    fn every_position_is_reachable() {
        // Over many shuffles of [0,1,2], each value should land in the first
        // slot at least once.
        let mut rng = SystemRandom::seeded(3);
        let mut seen_first = [false; 3];
        for _ in 0..200 {
            let mut items = [0usize, 1, 2];
            shuffle(&mut items, &mut rng);
            seen_first[items[0]] = true;
        }
        assert!(seen_first.iter().all(|&s| s));
    }
}
