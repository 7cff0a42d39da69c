use rand::Rng;

/// Uniform random draws consumed by the annealer.
///
/// Every `rand::Rng` is a `RandomSource`; tests substitute scripted sources to
/// pin down the order in which draws happen.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn uniform_int(&mut self, bound: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn uniform_float(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn uniform_int(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }

    #[inline]
    fn uniform_float(&mut self) -> f64 {
        self.random::<f64>()
    }
}
