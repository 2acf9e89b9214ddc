use rand::{rngs::SmallRng, Rng};
use rand_distr::StandardNormal;

/// White noise: independent draws, flat spectrum.
#[derive(Debug, Clone)]
pub struct WhiteNoise {
    rng: SmallRng,
}

impl WhiteNoise {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    /// Gaussian draw, mean 0, standard deviation 1.
    #[inline]
    pub fn next_gaussian(&mut self) -> f32 {
        self.rng.sample(StandardNormal)
    }

    /// Uniform draw in [-1, 1).
    #[inline]
    pub fn next_uniform(&mut self) -> f32 {
        self.rng.random_range(-1.0..1.0)
    }
}
