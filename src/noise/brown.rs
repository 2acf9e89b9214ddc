use rand::{rngs::SmallRng, Rng};

/// Default leak factor; slightly below 1 so the walk never drifts off.
pub const DEFAULT_LEAK: f32 = 0.998;
/// Default step size per sample.
pub const DEFAULT_STEP: f32 = 0.05;

/// Brown (red) noise: a leaky random walk.
///
/// `state = clamp(state·leak + (rand·2 - 1)·step, -1, 1)`
#[derive(Debug, Clone)]
pub struct BrownNoise {
    rng: SmallRng,
    state: f32,
    leak: f32,
    step: f32,
}

impl BrownNoise {
    pub fn new(rng: SmallRng) -> Self {
        Self::with_params(rng, DEFAULT_LEAK, DEFAULT_STEP)
    }

    pub fn with_params(rng: SmallRng, leak: f32, step: f32) -> Self {
        Self {
            rng,
            state: 0.0,
            leak: leak.clamp(0.0, 1.0),
            step: step.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn next(&mut self) -> f32 {
        let white = self.rng.random::<f32>() * 2.0 - 1.0;
        self.state = (self.state * self.leak + white * self.step).clamp(-1.0, 1.0);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn walk_is_bounded() {
        let mut brown = BrownNoise::with_params(SmallRng::seed_from_u64(1), 1.0, 0.5);
        for _ in 0..100_000 {
            let x = brown.next();
            assert!((-1.0..=1.0).contains(&x));
        }
    }

    #[test]
    fn consecutive_samples_move_by_at_most_one_step() {
        let mut brown = BrownNoise::new(SmallRng::seed_from_u64(2));
        let mut prev = brown.next();
        for _ in 0..10_000 {
            let x = brown.next();
            // Leak pulls towards zero by at most |prev|·(1-leak).
            let bound = DEFAULT_STEP + prev.abs() * (1.0 - DEFAULT_LEAK) + 1e-6;
            assert!((x - prev).abs() <= bound);
            prev = x;
        }
    }

    #[test]
    fn leak_pulls_back_towards_zero() {
        let mut brown = BrownNoise::with_params(SmallRng::seed_from_u64(3), 0.5, 0.0);
        brown.state = 1.0;
        brown.next();
        assert!((brown.state - 0.5).abs() < 1e-6);
    }
}
