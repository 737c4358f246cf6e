/// Source of uniformly random choices.
///
/// Every [`rand::Rng`] is a random source. Tests may substitute a scripted
/// source to get exact, hand-traceable output.
pub trait RandomSource {
    /// Returns a uniformly random index in `0..len`.
    ///
    /// `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng> RandomSource for R {
    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}
