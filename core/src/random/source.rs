use rand::Rng;

/// Uniform integer in `0..n`, `n > 0`.
pub trait RandomSource {
    fn intn(&mut self, n: usize) -> usize;
}

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSource;

impl RandomSource for ThreadSource {
    fn intn(&mut self, n: usize) -> usize {
        rand::rng().random_range(0..n)
    }
}

/// Adapts any `rand` generator, e.g. a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn intn(&mut self, n: usize) -> usize {
        self.0.random_range(0..n)
    }
}

impl<F: FnMut(usize) -> usize> RandomSource for F {
    fn intn(&mut self, n: usize) -> usize {
        self(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sources_stay_in_range() {
        let mut thread = ThreadSource;
        let mut seeded = RngSource(StdRng::seed_from_u64(7));
        for n in 1..50 {
            assert!(thread.intn(n) < n);
            assert!(seeded.intn(n) < n);
        }
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = RngSource(StdRng::seed_from_u64(42));
        let mut b = RngSource(StdRng::seed_from_u64(42));
        let xs: Vec<usize> = (0..20).map(|_| a.intn(1000)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.intn(1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn closures_are_sources() {
        let mut last = |n: usize| n - 1;
        assert_eq!(last.intn(5), 4);
    }
}
