//! Leaf rustle.
//!
//! Short bursts of bright noise at irregular intervals (0.1-0.6 s), each
//! one placed somewhere new in the stereo field.

use rand::{rngs::SmallRng, Rng};

use crate::dsp::{pan, BiquadFilter, Decay, Frame};
use crate::layers::seconds_to_frames;
use crate::noise::{Seeder, WhiteNoise};

const CENTER_HZ: f32 = 7_000.0;
const Q: f32 = 1.5;
const DECAY_SECONDS: f32 = 0.015;
const MIN_INTERVAL_SECONDS: f32 = 0.1;
const MAX_INTERVAL_SECONDS: f32 = 0.6;
const GAIN: f32 = 0.3;

pub struct LeafRustle {
    rng: SmallRng,
    sample_rate: f32,
    noise: WhiteNoise,
    bandpass: BiquadFilter,
    envelope: Decay,
    countdown: u32,
    pan: f32,
    bursts: u64,
}

impl LeafRustle {
    pub fn new(sample_rate: f32, seeder: &mut Seeder) -> Self {
        let mut rustle = Self {
            rng: seeder.rng(),
            sample_rate,
            noise: seeder.white(),
            bandpass: BiquadFilter::bandpass(sample_rate, CENTER_HZ, Q),
            envelope: Decay::new(DECAY_SECONDS, sample_rate),
            countdown: 1,
            pan: 0.0,
            bursts: 0,
        };
        rustle.schedule_next();
        rustle
    }

    fn schedule_next(&mut self) {
        let seconds = self
            .rng
            .random_range(MIN_INTERVAL_SECONDS..MAX_INTERVAL_SECONDS);
        self.countdown = seconds_to_frames(seconds, self.sample_rate);
    }

    #[inline]
    pub fn next(&mut self) -> Frame {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.envelope.trigger(self.rng.random_range(0.4..1.0));
            self.pan = self.rng.random_range(-1.0..1.0);
            self.bursts += 1;
            self.schedule_next();
        }

        let sample = self.noise.next_uniform() * self.envelope.next();
        pan(self.bandpass.process(sample) * GAIN, self.pan)
    }

    /// Bursts fired since construction.
    pub fn bursts(&self) -> u64 {
        self.bursts
    }
}
