//! Plain white noise with a gentle breathing motion.
//!
//! Per channel: Gaussian noise → one-pole lowpass (0.85) to take the edge
//! off → a 45 s ±5% "breathing" swell → soft clip → ×0.3.

use crate::dsp::{soft_clip, Frame, Lfo, OnePoleFilter};
use crate::error::validate_sample_rate;
use crate::generator::{AudioGenerator, FrameSource, StereoOutput, VolumeControl};
use crate::noise::{Seeder, WhiteNoise};
use crate::GeneratorError;

const ROLLOFF: f32 = 0.85;
const BREATH_HZ: f32 = 1.0 / 45.0;
const BREATH_DEPTH: f32 = 0.05;
const SCALE: f32 = 0.3;

struct Core {
    noise_left: WhiteNoise,
    noise_right: WhiteNoise,
    left: OnePoleFilter,
    right: OnePoleFilter,
    breath: Lfo,
}

impl FrameSource for Core {
    #[inline]
    fn next_frame(&mut self, _frame: u64) -> Frame {
        let swell = 1.0 + BREATH_DEPTH * self.breath.next();
        let left = self.left.process(self.noise_left.next_gaussian());
        let right = self.right.process(self.noise_right.next_gaussian());
        Frame::new(left, right).map(|x| soft_clip(x * swell) * SCALE)
    }
}

pub struct WhiteNoiseGenerator {
    core: Core,
    output: StereoOutput,
}

impl WhiteNoiseGenerator {
    pub fn new(sample_rate: f32) -> Result<Self, GeneratorError> {
        Self::build(sample_rate, Seeder::entropy())
    }

    /// Fully deterministic instance for tests and offline renders.
    pub fn with_seed(sample_rate: f32, seed: u64) -> Result<Self, GeneratorError> {
        Self::build(sample_rate, Seeder::fixed(seed))
    }

    fn build(sample_rate: f32, mut seeder: Seeder) -> Result<Self, GeneratorError> {
        let sample_rate = validate_sample_rate(sample_rate)?;
        Ok(Self {
            core: Core {
                noise_left: seeder.white(),
                noise_right: seeder.white(),
                left: OnePoleFilter::new(ROLLOFF),
                right: OnePoleFilter::new(ROLLOFF),
                breath: Lfo::sine(BREATH_HZ, sample_rate),
            },
            output: StereoOutput::new(sample_rate),
        })
    }
}

impl AudioGenerator for WhiteNoiseGenerator {
    fn generate(&mut self, buffer: &mut [i16]) -> usize {
        self.output.render(&mut self.core, buffer)
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
    fn channels_are_independent() {
        let mut generator = WhiteNoiseGenerator::with_seed(44_100.0, 7).unwrap();
        generator.set_volume(1.0);
        let mut buffer = vec![0i16; 8_192];
        generator.generate(&mut buffer);
        let same = buffer
            .chunks_exact(2)
            .filter(|frame| frame[0] == frame[1])
            .count();
        assert!(same < 100, "{same} identical frames");
    }

    #[test]
    fn never_exceeds_the_output_scale() {
        let mut generator = WhiteNoiseGenerator::with_seed(44_100.0, 8).unwrap();
        generator.set_volume(1.0);
        let mut buffer = vec![0i16; 44_100];
        generator.generate(&mut buffer);
        let limit = (SCALE * i16::MAX as f32) as i16 + 1;
        assert!(buffer.iter().all(|s| s.abs() <= limit));
    }

    #[test]
    fn rejects_bad_sample_rates() {
        assert!(WhiteNoiseGenerator::new(0.0).is_err());
        assert!(WhiteNoiseGenerator::new(f32::NAN).is_err());
    }
}
