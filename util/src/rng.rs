use std::hash::{Hash, Hasher};

use rand::prelude::*;
use rand_xorshift::XorShiftRng;

/// Construct a throwaway random number generator seeded by a noise value.
///
/// Good for short-term use in immutable contexts given a varying source of
/// noise like map position coordinates.
pub fn srng(seed: &(impl Hash + ?Sized)) -> XorShiftRng {
    let mut h = crate::FastHasher::default();
    seed.hash(&mut h);
    XorShiftRng::seed_from_u64(h.finish())
}

pub trait RngExt {
    fn one_chance_in(&mut self, n: usize) -> bool;
}

impl<T: Rng + ?Sized> RngExt for T {
    fn one_chance_in(&mut self, n: usize) -> bool {
        if n == 0 {
            return false;
        }
        self.gen_range(0..n) == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn seeded_rng_is_stable() {
        let (mut r1, mut r2) = (srng("seed"), srng("seed"));
        let a: Vec<u32> = (0..8).map(|_| r1.gen_range(0..1000)).collect();
        let b: Vec<u32> = (0..8).map(|_| r2.gen_range(0..1000)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_chance() {
        let mut rng = srng(&0);
        assert!(!rng.one_chance_in(0));
        assert!(rng.one_chance_in(1));
    }
}
