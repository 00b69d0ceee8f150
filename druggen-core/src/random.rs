//! Uniform random draws over an injected generator.
//!
//! Every draw is expressed through [`uniform01`], a single `f64` in `[0, 1)`,
//! so that one generator call maps to one decision. Callers supply the
//! generator; nothing here touches thread-local or OS entropy.

use rand::Rng;

/// One uniform draw in `[0, 1)`.
#[inline]
pub fn uniform01<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>()
}

/// Uniform integer in `[min, max]`, both ends inclusive.
///
/// Computed as `min + floor(u * (max - min + 1))`. Requires `min <= max`.
pub fn uniform_int<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    debug_assert!(min <= max);
    let span = (max - min + 1) as f64;
    min + (uniform01(rng) * span).floor() as u32
}

/// Uniform index in `[0, n)`. Returns 0 when `n == 0`.
pub fn uniform_index<R: Rng + ?Sized>(rng: &mut R, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    // u < 1.0 keeps the product strictly below n; min() guards rounding.
    ((uniform01(rng) * n as f64).floor() as usize).min(n - 1)
}

/// Pick one element uniformly with replacement.
///
/// Returns `None` for an empty slice.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(uniform_index(rng, items.len()))
}

/// Bernoulli trial that succeeds when the draw is strictly above `threshold`.
pub fn above<R: Rng + ?Sized>(rng: &mut R, threshold: f64) -> bool {
    uniform01(rng) > threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn lowest() -> StepRng {
        StepRng::new(0, 0)
    }

    fn highest() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn uniform_int_hits_both_endpoints() {
        assert_eq!(uniform_int(&mut lowest(), 10, 25), 10);
        assert_eq!(uniform_int(&mut highest(), 10, 25), 25);
    }

    #[test]
    fn uniform_int_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(uniform_int(&mut rng, 42, 42), 42);
        }
    }

    #[test]
    fn uniform_int_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = uniform_int(&mut rng, 30, 45);
            assert!((30..=45).contains(&v), "value {} out of range", v);
        }
    }

    #[test]
    fn pick_first_and_last() {
        let items = ["a", "b", "c"];
        assert_eq!(pick(&mut lowest(), &items), Some(&"a"));
        assert_eq!(pick(&mut highest(), &items), Some(&"c"));
        assert_eq!(pick::<&str, _>(&mut lowest(), &[]), None);
    }

    #[test]
    fn above_threshold() {
        assert!(!above(&mut lowest(), 0.3));
        assert!(above(&mut highest(), 0.3));
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(uniform_int(&mut a, 0, 100), uniform_int(&mut b, 0, 100));
        }
    }
}
