//! Lo-fi study beat: a warm chord loop, a lazy 75 BPM drum pattern and vinyl
//! crackle, all drifting slightly with tape wobble. The wobble bends every
//! pitched voice: the chord pad and the kick.
//!
//!   mix = soft_clip((pad + drums + crackle) · wobble_amplitude)

use crate::dsp::{soft_clip, Frame};
use crate::error::validate_sample_rate;
use crate::generator::{AudioGenerator, FrameSource, StereoOutput, VolumeControl};
use crate::layers::{ChordPad, Crackle, DrumCounts, DrumMachine, TapeWobble};
use crate::noise::Seeder;
use crate::GeneratorError;

struct Layers {
    wobble: TapeWobble,
    pad: ChordPad,
    drums: DrumMachine,
    crackle: Crackle,
}

impl FrameSource for Layers {
    #[inline]
    fn next_frame(&mut self, frame: u64) -> Frame {
        let (pitch_ratio, amplitude) = self.wobble.next();
        let mix = self.pad.next(frame, pitch_ratio)
            + self.drums.next(frame, pitch_ratio)
            + self.crackle.next();
        mix.map(|x| soft_clip(x * amplitude))
    }
}

pub struct LofiGenerator {
    layers: Layers,
    output: StereoOutput,
}

impl LofiGenerator {
    pub fn new(sample_rate: f32) -> Result<Self, GeneratorError> {
        Self::build(sample_rate, Seeder::entropy())
    }

    pub fn with_seed(sample_rate: f32, seed: u64) -> Result<Self, GeneratorError> {
        Self::build(sample_rate, Seeder::fixed(seed))
    }

    fn build(sample_rate: f32, mut seeder: Seeder) -> Result<Self, GeneratorError> {
        let sample_rate = validate_sample_rate(sample_rate)?;
        Ok(Self {
            layers: Layers {
                wobble: TapeWobble::new(sample_rate),
                pad: ChordPad::new(sample_rate),
                drums: DrumMachine::new(sample_rate, &mut seeder),
                crackle: Crackle::new(sample_rate, &mut seeder),
            },
            output: StereoOutput::new(sample_rate),
        })
    }

    /// Drum hits fired so far.
    pub fn drum_counts(&self) -> DrumCounts {
        self.layers.drums.counts()
    }

    /// Index of the chord under the next frame.
    pub fn current_chord(&self) -> usize {
        self.layers.pad.chord_at(self.output.frames())
    }
}

impl AudioGenerator for LofiGenerator {
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
    fn chord_follows_the_frame_counter() {
        let sample_rate = 8_000.0;
        let mut lofi = LofiGenerator::with_seed(sample_rate, 11).unwrap();
        assert_eq!(lofi.current_chord(), 0);
        let mut buffer = vec![0i16; sample_rate as usize * 2 * 4];
        lofi.generate(&mut buffer);
        assert_eq!(lofi.current_chord(), 1);
    }

    #[test]
    fn drums_start_on_the_first_frame() {
        let mut lofi = LofiGenerator::with_seed(44_100.0, 12).unwrap();
        lofi.generate(&mut [0i16; 2]);
        let counts = lofi.drum_counts();
        assert_eq!((counts.kicks, counts.snares, counts.hats), (1, 0, 1));
    }
}
