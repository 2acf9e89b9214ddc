//! The generator contract and the five soundscapes.
//!
//! An [`AudioGenerator`] owns every piece of synthesis state for one playback
//! session: filter delay lines, oscillator phases, RNG streams and a frame
//! counter. The streaming loop calls [`generate`](AudioGenerator::generate)
//! over and over with a fixed-size buffer. A control thread adjusts the
//! level through [`set_volume`](AudioGenerator::set_volume) or a cloned
//! [`VolumeControl`] without ever touching the render state.
//!
//! Output is always interleaved stereo PCM16 (`L R L R ...`). A buffer with
//! an odd length ends half-way through a frame; the right-hand sample is held
//! back and written first on the next call, so the stream is identical no
//! matter how it is chunked.

mod factory;
mod forest;
mod lofi;
mod output;
mod rain;
mod volume;
mod waves;
mod white_noise;

pub use factory::{create_generator, GeneratorType};
pub use forest::ForestGenerator;
pub use lofi::LofiGenerator;
pub use rain::RainGenerator;
pub use volume::VolumeControl;
pub use waves::WavesGenerator;
pub use white_noise::WhiteNoiseGenerator;

pub(crate) use output::{FrameSource, StereoOutput};

/// A procedural soundscape that fills PCM16 buffers on demand.
///
/// `generate` never allocates, never blocks and never fails: it always
/// writes every slot of the buffer with a value in `i16` range and returns
/// the buffer length.
pub trait AudioGenerator: Send {
    /// Fill `buffer` with interleaved stereo samples. Returns `buffer.len()`.
    fn generate(&mut self, buffer: &mut [i16]) -> usize;

    /// Handle to this generator's volume, safe to move to another thread.
    fn volume_control(&self) -> VolumeControl;

    /// Set the output level. Clamped to `[0, 1]`; NaN mutes.
    fn set_volume(&self, volume: f32) {
        self.volume_control().set(volume);
    }

    fn volume(&self) -> f32 {
        self.volume_control().get()
    }

    fn sample_rate(&self) -> f32;

    fn channels(&self) -> u16 {
        crate::CHANNELS
    }

    /// Stereo frames synthesised so far, counting a frame split across two
    /// calls from the call that started it.
    fn frames_rendered(&self) -> u64;
}
