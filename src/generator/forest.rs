//! Forest: wind in the canopy, bird calls, leaf rustle and a nearby stream,
//! summed and soft clipped.

use crate::dsp::{soft_clip, Frame};
use crate::error::validate_sample_rate;
use crate::generator::{AudioGenerator, FrameSource, StereoOutput, VolumeControl};
use crate::layers::{BirdCalls, LeafRustle, Stream, Wind};
use crate::noise::Seeder;
use crate::GeneratorError;

struct Layers {
    wind: Wind,
    birds: BirdCalls,
    rustle: LeafRustle,
    stream: Stream,
}

impl FrameSource for Layers {
    #[inline]
    fn next_frame(&mut self, frame: u64) -> Frame {
        let mix = self.wind.next(frame)
            + self.birds.next()
            + self.rustle.next()
            + self.stream.next();
        mix.map(soft_clip)
    }
}

pub struct ForestGenerator {
    layers: Layers,
    output: StereoOutput,
}

impl ForestGenerator {
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
                wind: Wind::new(sample_rate, &mut seeder),
                birds: BirdCalls::new(sample_rate, &mut seeder),
                rustle: LeafRustle::new(sample_rate, &mut seeder),
                stream: Stream::new(sample_rate, &mut seeder),
            },
            output: StereoOutput::new(sample_rate),
        })
    }

    /// Bird calls sung so far.
    pub fn bird_calls(&self) -> u64 {
        self.layers.birds.calls()
    }
}

impl AudioGenerator for ForestGenerator {
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
