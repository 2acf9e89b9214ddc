//! Layer algorithms.
//!
//! Each layer is one recognisable sound inside a soundscape: the hiss of
//! rain, a bird call, a kick drum. Layers are small state machines that
//! render one stereo [`Frame`](crate::dsp::Frame) per call and must be
//! advanced exactly once per output frame. Layers that schedule events on a
//! musical or wall-clock grid take the generator's absolute frame index, so
//! timing never depends on how the caller chunks its buffers.
//!
//! Study these to see how each texture is built:
//!
//! - Rain: [`RainHiss`], [`Raindrops`], [`Thunder`]
//! - Forest: [`Wind`], [`BirdCalls`], [`LeafRustle`], [`Stream`]
//! - Waves: [`WaveCycle`]
//! - LoFi: [`ChordPad`], [`DrumMachine`], [`Crackle`], [`TapeWobble`]

mod birds;
mod crackle;
mod drums;
mod hiss;
mod pad;
mod raindrops;
mod rustle;
mod stream;
mod thunder;
mod wave;
mod wind;
mod wobble;

pub use birds::{BirdCalls, BirdPreset, BIRD_PRESETS};
pub use crackle::Crackle;
pub use drums::{DrumCounts, DrumMachine, DRUM_BPM};
pub use hiss::RainHiss;
pub use pad::{ChordPad, CHORD_SECONDS, PROGRESSION};
pub use raindrops::Raindrops;
pub use rustle::LeafRustle;
pub use stream::Stream;
pub use thunder::Thunder;
pub use wave::{WaveCycle, WaveStage, WaveState};
pub use wind::Wind;
pub use wobble::TapeWobble;

/// Swept filters recompute their coefficients once every this many frames.
pub const CONTROL_INTERVAL: u64 = 16;

/// Convert seconds to a whole number of frames (at least one).
#[inline]
pub(crate) fn seconds_to_frames(seconds: f32, sample_rate: f32) -> u32 {
    let frames = (seconds * sample_rate).round();
    if frames.is_finite() && frames >= 1.0 {
        frames.min(u32::MAX as f32) as u32
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_to_frames_rounds_and_floors_at_one() {
        assert_eq!(seconds_to_frames(1.0, 44_100.0), 44_100);
        assert_eq!(seconds_to_frames(0.05, 44_100.0), 2_205);
        assert_eq!(seconds_to_frames(0.0, 44_100.0), 1);
        assert_eq!(seconds_to_frames(f32::NAN, 44_100.0), 1);
    }
}
