//! Low-level DSP primitives used by the ambience layers.
//!
//! Everything here is allocation-free and realtime-safe, so it can live inline
//! inside generator structs and be advanced once per frame from the audio
//! thread. Parameter setters clamp instead of failing.

/// Soft clipping and PCM16 conversion.
pub mod distortion;
/// Exponential decays, attack/decay envelopes and fixed envelope shapes.
pub mod envelope;
/// RBJ biquad and one-pole filters.
pub mod filter;
/// Sine LFO phase accumulator and its unipolar mapping.
pub mod lfo;
/// Stereo frames, interpolation and panning.
pub mod mix;

pub use distortion::{soft_clip, to_pcm16};
pub use envelope::{bell, AttackDecay, Decay, EnvelopeStage};
pub use filter::{BiquadFilter, FilterType, OnePoleFilter};
pub use lfo::{bipolar_to_unipolar, Lfo};
pub use mix::{lerp, pan, Frame};
