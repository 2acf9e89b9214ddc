//! Individual raindrops.
//!
//! Every frame rolls a Bernoulli trial. On a hit, a drop's energy is split at
//! random between the left and right decay accumulators (~3 ms time
//! constant). Each accumulator gates its own white noise through a narrow
//! bandpass, so a drop is a tiny bright "tick" placed somewhere in the field.
//! Drop probability follows the rain intensity: about 60 drops per second at
//! the average intensity of 0.7, more in the swells, fewer in the lulls.

use rand::{rngs::SmallRng, Rng};

use crate::dsp::{BiquadFilter, Decay, Frame};
use crate::noise::{Seeder, WhiteNoise};

/// Expected drops per second at intensity 0.7.
pub const DROPS_PER_SECOND: f32 = 60.0;
const REFERENCE_INTENSITY: f32 = 0.7;
const DECAY_SECONDS: f32 = 0.003;
const LEFT_CENTER_HZ: f32 = 5_000.0;
const RIGHT_CENTER_HZ: f32 = 5_500.0;
const Q: f32 = 4.0;
const GAIN: f32 = 2.0;

pub struct Raindrops {
    rng: SmallRng,
    noise_left: WhiteNoise,
    noise_right: WhiteNoise,
    env_left: Decay,
    env_right: Decay,
    left: BiquadFilter,
    right: BiquadFilter,
    probability_per_unit: f32,
    drops: u64,
}

impl Raindrops {
    pub fn new(sample_rate: f32, seeder: &mut Seeder) -> Self {
        Self {
            rng: seeder.rng(),
            noise_left: seeder.white(),
            noise_right: seeder.white(),
            env_left: Decay::new(DECAY_SECONDS, sample_rate),
            env_right: Decay::new(DECAY_SECONDS, sample_rate),
            left: BiquadFilter::bandpass(sample_rate, LEFT_CENTER_HZ, Q),
            right: BiquadFilter::bandpass(sample_rate, RIGHT_CENTER_HZ, Q),
            probability_per_unit: DROPS_PER_SECOND / (REFERENCE_INTENSITY * sample_rate),
            drops: 0,
        }
    }

    /// Per-frame drop probability at `intensity`.
    pub fn probability(&self, intensity: f32) -> f32 {
        (self.probability_per_unit * intensity).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn next(&mut self, intensity: f32) -> Frame {
        if self.rng.random::<f32>() < self.probability(intensity) {
            let strength = self.rng.random_range(0.3..1.0);
            let split: f32 = self.rng.random();
            self.env_left.excite(strength * split);
            self.env_right.excite(strength * (1.0 - split));
            self.drops += 1;
        }

        let left = self.noise_left.next_uniform() * self.env_left.next();
        let right = self.noise_right.next_uniform() * self.env_right.next();
        Frame::new(self.left.process(left), self.right.process(right)) * GAIN
    }

    /// Drops fired since construction.
    pub fn drops(&self) -> u64 {
        self.drops
    }
}
