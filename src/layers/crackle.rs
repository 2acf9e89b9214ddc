//! Vinyl crackle: sparse random pops, about 45 per second, each with its own
//! level, polarity and stereo position.

use rand::{rngs::SmallRng, Rng};

use crate::dsp::{pan, Decay, Frame};
use crate::noise::Seeder;

pub const POPS_PER_SECOND: f32 = 45.0;
const DECAY_SECONDS: f32 = 0.0005;
const GAIN: f32 = 0.25;

pub struct Crackle {
    rng: SmallRng,
    probability: f32,
    envelope: Decay,
    polarity: f32,
    pan: f32,
    pops: u64,
}

impl Crackle {
    pub fn new(sample_rate: f32, seeder: &mut Seeder) -> Self {
        Self {
            rng: seeder.rng(),
            probability: (POPS_PER_SECOND / sample_rate).clamp(0.0, 1.0),
            envelope: Decay::new(DECAY_SECONDS, sample_rate),
            polarity: 1.0,
            pan: 0.0,
            pops: 0,
        }
    }

    #[inline]
    pub fn next(&mut self) -> Frame {
        if self.rng.random::<f32>() < self.probability {
            self.envelope.trigger(self.rng.random_range(0.2..1.0));
            self.polarity = if self.rng.random::<bool>() { 1.0 } else { -1.0 };
            self.pan = self.rng.random_range(-1.0..1.0);
            self.pops += 1;
        }

        let level = self.envelope.next();
        if level == 0.0 {
            return Frame::SILENCE;
        }
        pan(level * self.polarity * GAIN, self.pan)
    }

    pub fn pops(&self) -> u64 {
        self.pops
    }
}
