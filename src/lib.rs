//! Procedural ambience for focus sessions.
//!
//! Every generator renders interleaved stereo PCM16 one frame at a time and
//! implements [`AudioGenerator`]. Pick one with [`GeneratorType`] and
//! [`create_generator`], then drive it from a [`runtime::Session`] or call
//! `generate` yourself from an audio thread.

pub mod dsp; // Filters, LFOs, envelopes, shaping
pub mod error;
pub mod generator; // The AudioGenerator contract and the five soundscapes
pub mod layers; // Per-effect building blocks (wind, birds, drums, ...)
pub mod noise; // White, pink and brown noise cores
pub mod runtime; // Generation loop and PCM sinks

pub use error::GeneratorError;
pub use generator::{create_generator, AudioGenerator, GeneratorType, VolumeControl};

/// Sample rate used by the reference playback path.
pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;
/// Lowest sample rate a generator accepts.
pub const MIN_SAMPLE_RATE: f32 = 8_000.0;
/// Highest sample rate a generator accepts.
pub const MAX_SAMPLE_RATE: f32 = 384_000.0;
/// Every generator renders interleaved stereo.
pub const CHANNELS: u16 = 2;

pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
