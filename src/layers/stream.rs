//! Babbling stream.
//!
//! White noise through a pair of high bandpass filters, with a slow (5 s)
//! amplitude swell so the water never settles into a flat hiss.

use crate::dsp::{bipolar_to_unipolar, lerp, BiquadFilter, Frame, Lfo};
use crate::noise::{Seeder, WhiteNoise};

const LEFT_CENTER_HZ: f32 = 5_000.0;
const RIGHT_CENTER_HZ: f32 = 5_500.0;
const Q: f32 = 0.8;
const SWELL_HZ: f32 = 1.0 / 5.0;
const SWELL_FLOOR: f32 = 0.2;
const GAIN: f32 = 0.25;

pub struct Stream {
    noise_left: WhiteNoise,
    noise_right: WhiteNoise,
    left: BiquadFilter,
    right: BiquadFilter,
    swell: Lfo,
}

impl Stream {
    pub fn new(sample_rate: f32, seeder: &mut Seeder) -> Self {
        Self {
            noise_left: seeder.white(),
            noise_right: seeder.white(),
            left: BiquadFilter::bandpass(sample_rate, LEFT_CENTER_HZ, Q),
            right: BiquadFilter::bandpass(sample_rate, RIGHT_CENTER_HZ, Q),
            swell: Lfo::sine(SWELL_HZ, sample_rate),
        }
    }

    /// Amplitude multiplier in [0.2, 1.0].
    pub fn swell(&self) -> f32 {
        lerp(SWELL_FLOOR, 1.0, bipolar_to_unipolar(self.swell.value()))
    }

    #[inline]
    pub fn next(&mut self) -> Frame {
        let amp = self.swell() * GAIN;
        self.swell.advance();

        let left = self.left.process(self.noise_left.next_uniform());
        let right = self.right.process(self.noise_right.next_uniform());
        Frame::new(left, right) * amp
    }
}
