//! Tape wobble.
//!
//! Two slow sines shared by the whole lo-fi mix: a 0.4 Hz pitch drift of ±5
//! cents for the pitched voices, and a 0.2 Hz level drift of ±4% for the
//! final mix.

use crate::dsp::Lfo;

const PITCH_HZ: f32 = 0.4;
const PITCH_DEPTH_CENTS: f32 = 5.0;
const AMPLITUDE_HZ: f32 = 0.2;
const AMPLITUDE_DEPTH: f32 = 0.04;

pub struct TapeWobble {
    pitch: Lfo,
    amplitude: Lfo,
}

impl TapeWobble {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            pitch: Lfo::sine(PITCH_HZ, sample_rate),
            amplitude: Lfo::sine(AMPLITUDE_HZ, sample_rate),
        }
    }

    /// Frequency multiplier for pitched voices.
    pub fn pitch_ratio(&self) -> f32 {
        super::pad::cents_to_ratio(PITCH_DEPTH_CENTS * self.pitch.value())
    }

    /// Gain multiplier for the final mix.
    pub fn amplitude(&self) -> f32 {
        1.0 + AMPLITUDE_DEPTH * self.amplitude.value()
    }

    /// `(pitch_ratio, amplitude)` for this frame, then advance.
    #[inline]
    pub fn next(&mut self) -> (f32, f32) {
        let out = (self.pitch_ratio(), self.amplitude());
        self.pitch.advance();
        self.amplitude.advance();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_stays_within_depth() {
        let sample_rate = 8_000.0;
        let mut wobble = TapeWobble::new(sample_rate);
        let max_ratio = (PITCH_DEPTH_CENTS / 1200.0).exp2();
        let (mut ratio_high, mut amp_high, mut amp_low) = (0.0f32, 0.0f32, 2.0f32);
        for _ in 0..(sample_rate as usize * 5) {
            let (ratio, amp) = wobble.next();
            assert!(ratio <= max_ratio + 1e-6 && ratio >= 1.0 / max_ratio - 1e-6);
            ratio_high = ratio_high.max(ratio);
            amp_high = amp_high.max(amp);
            amp_low = amp_low.min(amp);
        }
        assert!(ratio_high > max_ratio - 1e-4);
        assert!((amp_high - 1.04).abs() < 1e-3);
        assert!((amp_low - 0.96).abs() < 1e-3);
    }

    #[test]
    fn starts_centred() {
        let wobble = TapeWobble::new(44_100.0);
        assert_eq!(wobble.pitch_ratio(), 1.0);
        assert_eq!(wobble.amplitude(), 1.0);
    }
}
