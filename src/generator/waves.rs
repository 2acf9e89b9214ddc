//! Ocean waves.
//!
//! A [`WaveCycle`] supplies the envelope, cutoff, foam gate and pan for
//! every frame. The body is brown plus pink noise through a lowpass that
//! tracks the cutoff; the foam is bright bandpassed white noise riding on
//! top. Both are placed by the wave's pan and the sum is soft clipped.

use crate::dsp::{mix::pan_gains, soft_clip, BiquadFilter, Frame};
use crate::dsp::filter::Q_BUTTERWORTH;
use crate::error::validate_sample_rate;
use crate::generator::{AudioGenerator, FrameSource, StereoOutput, VolumeControl};
use crate::layers::{WaveCycle, WaveState, CONTROL_INTERVAL};
use crate::noise::{BrownNoise, PinkNoise, Seeder, WhiteNoise};
use crate::GeneratorError;

const BROWN_LEVEL: f32 = 0.7;
const PINK_LEVEL: f32 = 0.5;
const BODY_GAIN: f32 = 1.2;
const FOAM_LEFT_HZ: f32 = 6_000.0;
const FOAM_RIGHT_HZ: f32 = 7_000.0;
const FOAM_Q: f32 = 1.0;
const FOAM_GAIN: f32 = 0.35;

struct Layers {
    cycle: WaveCycle,
    brown_left: BrownNoise,
    brown_right: BrownNoise,
    pink_left: PinkNoise,
    pink_right: PinkNoise,
    body_left: BiquadFilter,
    body_right: BiquadFilter,
    foam_left: WhiteNoise,
    foam_right: WhiteNoise,
    spray_left: BiquadFilter,
    spray_right: BiquadFilter,
}

impl FrameSource for Layers {
    #[inline]
    fn next_frame(&mut self, frame: u64) -> Frame {
        let WaveState {
            envelope,
            cutoff,
            foam,
            pan,
            amplitude,
        } = self.cycle.next();

        if frame % CONTROL_INTERVAL == 0 {
            self.body_left.set_cutoff(cutoff, Q_BUTTERWORTH);
            self.body_right.set_cutoff(cutoff, Q_BUTTERWORTH);
        }

        let left = BROWN_LEVEL * self.brown_left.next() + PINK_LEVEL * self.pink_left.next();
        let right = BROWN_LEVEL * self.brown_right.next() + PINK_LEVEL * self.pink_right.next();
        let body = Frame::new(self.body_left.process(left), self.body_right.process(right))
            * (envelope * amplitude * BODY_GAIN);

        let spray = Frame::new(
            self.spray_left.process(self.foam_left.next_uniform()),
            self.spray_right.process(self.foam_right.next_uniform()),
        ) * (foam * amplitude * FOAM_GAIN);

        let (gain_left, gain_right) = pan_gains(pan);
        let mix = body + spray;
        Frame::new(mix.left * gain_left, mix.right * gain_right).map(soft_clip)
    }
}

pub struct WavesGenerator {
    layers: Layers,
    output: StereoOutput,
}

impl WavesGenerator {
    pub fn new(sample_rate: f32) -> Result<Self, GeneratorError> {
        Self::build(sample_rate, Seeder::entropy())
    }

    pub fn with_seed(sample_rate: f32, seed: u64) -> Result<Self, GeneratorError> {
        Self::build(sample_rate, Seeder::fixed(seed))
    }

    fn build(sample_rate: f32, mut seeder: Seeder) -> Result<Self, GeneratorError> {
        let sample_rate = validate_sample_rate(sample_rate)?;
        let cycle = WaveCycle::new(sample_rate, &mut seeder);
        let cutoff = cycle.state().cutoff;
        Ok(Self {
            layers: Layers {
                cycle,
                brown_left: seeder.brown(),
                brown_right: seeder.brown(),
                pink_left: seeder.pink(),
                pink_right: seeder.pink(),
                body_left: BiquadFilter::lowpass(sample_rate, cutoff, Q_BUTTERWORTH),
                body_right: BiquadFilter::lowpass(sample_rate, cutoff, Q_BUTTERWORTH),
                foam_left: seeder.white(),
                foam_right: seeder.white(),
                spray_left: BiquadFilter::bandpass(sample_rate, FOAM_LEFT_HZ, FOAM_Q),
                spray_right: BiquadFilter::bandpass(sample_rate, FOAM_RIGHT_HZ, FOAM_Q),
            },
            output: StereoOutput::new(sample_rate),
        })
    }

    /// Waves begun so far, including the one in progress.
    pub fn waves_started(&self) -> u64 {
        self.layers.cycle.waves_started()
    }
}

impl AudioGenerator for WavesGenerator {
    fn generate(&mut self, buffer: &mut [i16]) -> usize {
        self.output.render(&mut self.layers, buffer)
    }

    fn volume_control(&self) -> VolumeControl {
        self.output.volume().clone()
    }

    fn sample_rate(&self) -> f32 {
        self.output.sample_rate()
    }

    fn frames_rendered(&self) -> u64 {
        self.output.frames()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_wave_starts_from_silence() {
        let mut waves = WavesGenerator::with_seed(44_100.0, 9).unwrap();
        waves.set_volume(1.0);
        let mut buffer = [0i16; 2];
        waves.generate(&mut buffer);
        assert_eq!(buffer, [0, 0]);
        assert_eq!(waves.waves_started(), 1);
    }

    #[test]
    fn waves_keep_coming() {
        let sample_rate = 8_000.0;
        let mut waves = WavesGenerator::with_seed(sample_rate, 10).unwrap();
        // Longest possible wave is 8 s.
        let mut buffer = vec![0i16; sample_rate as usize * 2 * 20];
        waves.generate(&mut buffer);
        assert!(waves.waves_started() >= 3, "{}", waves.waves_started());
    }
}
