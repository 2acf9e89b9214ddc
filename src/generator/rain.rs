//! Rain: steady hiss, individual drops and the odd roll of distant thunder.
//!
//! A 30 s intensity LFO (`0.7 + 0.3·sin`) drives both the hiss level and
//! the drop rate, so the rain swells and eases the way a real shower does.
//!
//!   mix = soft_clip(0.6·hiss + drops + thunder)

use crate::dsp::{soft_clip, Frame, Lfo};
use crate::error::validate_sample_rate;
use crate::generator::{AudioGenerator, FrameSource, StereoOutput, VolumeControl};
use crate::layers::{RainHiss, Raindrops, Thunder};
use crate::noise::Seeder;
use crate::GeneratorError;

const INTENSITY_HZ: f32 = 1.0 / 30.0;
const BASE_INTENSITY: f32 = 0.7;
const INTENSITY_DEPTH: f32 = 0.3;
const HISS_LEVEL: f32 = 0.6;

struct Layers {
    intensity: Lfo,
    hiss: RainHiss,
    drops: Raindrops,
    thunder: Thunder,
}

impl Layers {
    fn new(sample_rate: f32, seeder: &mut Seeder) -> Self {
        Self {
            intensity: Lfo::sine(INTENSITY_HZ, sample_rate),
            hiss: RainHiss::new(sample_rate, seeder),
            drops: Raindrops::new(sample_rate, seeder),
            thunder: Thunder::new(sample_rate, seeder),
        }
    }

    fn intensity(&self) -> f32 {
        BASE_INTENSITY + INTENSITY_DEPTH * self.intensity.value()
    }
}

impl FrameSource for Layers {
    #[inline]
    fn next_frame(&mut self, _frame: u64) -> Frame {
        let intensity = self.intensity();
        self.intensity.advance();

        let mix = self.hiss.next(intensity) * HISS_LEVEL
            + self.drops.next(intensity)
            + self.thunder.next();
        mix.map(soft_clip)
    }
}

pub struct RainGenerator {
    layers: Layers,
    output: StereoOutput,
}

impl RainGenerator {
    pub fn new(sample_rate: f32) -> Result<Self, GeneratorError> {
        Self::build(sample_rate, Seeder::entropy())
    }

    pub fn with_seed(sample_rate: f32, seed: u64) -> Result<Self, GeneratorError> {
        Self::build(sample_rate, Seeder::fixed(seed))
    }

    fn build(sample_rate: f32, mut seeder: Seeder) -> Result<Self, GeneratorError> {
        let sample_rate = validate_sample_rate(sample_rate)?;
        Ok(Self {
            layers: Layers::new(sample_rate, &mut seeder),
            output: StereoOutput::new(sample_rate),
        })
    }

    /// Rain intensity for the next frame, in [0.4, 1.0].
    pub fn intensity(&self) -> f32 {
        self.layers.intensity()
    }

    /// Raindrops fired so far.
    pub fn drops(&self) -> u64 {
        self.layers.drops.drops()
    }

    /// Thunder strikes so far.
    pub fn thunder_strikes(&self) -> u64 {
        self.layers.thunder.events()
    }
}

impl AudioGenerator for RainGenerator {
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
