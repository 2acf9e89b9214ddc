//! Steady rain hiss.
//!
//! Pink noise through a pair of bandpass filters, one per channel, tuned a
//! few hundred hertz apart so the two sides never sound identical. The
//! generator scales the result by its slow intensity LFO.

use crate::dsp::{BiquadFilter, Frame};
use crate::noise::{PinkNoise, Seeder};

const LEFT_CENTER_HZ: f32 = 3_000.0;
const RIGHT_CENTER_HZ: f32 = 3_500.0;
const Q: f32 = 0.7;
const GAIN: f32 = 4.0;

pub struct RainHiss {
    noise_left: PinkNoise,
    noise_right: PinkNoise,
    left: BiquadFilter,
    right: BiquadFilter,
}

impl RainHiss {
    pub fn new(sample_rate: f32, seeder: &mut Seeder) -> Self {
        Self {
            noise_left: seeder.pink(),
            noise_right: seeder.pink(),
            left: BiquadFilter::bandpass(sample_rate, LEFT_CENTER_HZ, Q),
            right: BiquadFilter::bandpass(sample_rate, RIGHT_CENTER_HZ, Q),
        }
    }

    /// One frame of hiss at the given intensity (0..1).
    #[inline]
    pub fn next(&mut self, intensity: f32) -> Frame {
        let left = self.left.process(self.noise_left.next());
        let right = self.right.process(self.noise_right.next());
        Frame::new(left, right) * (GAIN * intensity)
    }
}
