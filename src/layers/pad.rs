//! Lo-fi chord pad.
//!
//! A four-chord loop (Cmaj7 → Am7 → Dm7 → G7), four seconds per chord. Each
//! chord is four voices with the root dropped an octave into the bass. A
//! voice is a soft triangle-like tone (fundamental plus the 3rd and 5th
//! harmonics at reduced level), detuned a few cents for warmth. Chord
//! changes crossfade linearly over 50 ms so there is never a click, and the
//! whole pad runs through a 2 kHz lowpass to keep it dark and out of the way.
//!
//! Timing comes from the generator's absolute frame index, so the chord grid
//! is the same however the output is chunked.

use std::f32::consts::TAU;

use crate::dsp::{pan, BiquadFilter, Frame};
use crate::dsp::filter::Q_BUTTERWORTH;

/// Voice frequencies in Hz, lowest first.
pub const PROGRESSION: [[f32; 4]; 4] = [
    [65.41, 164.81, 196.00, 246.94], // Cmaj7
    [55.00, 130.81, 164.81, 196.00], // Am7
    [73.42, 174.61, 220.00, 261.63], // Dm7
    [49.00, 123.47, 146.83, 174.61], // G7
];

pub const CHORD_SECONDS: f32 = 4.0;
const CROSSFADE_SECONDS: f32 = 0.05;
const DETUNE_CENTS: f32 = 3.0;
const LOWPASS_HZ: f32 = 2_000.0;
const VOICE_GAIN: f32 = 0.12;
const VOICE_PANS: [f32; 4] = [0.0, -0.5, 0.5, -0.2];

pub struct ChordPad {
    sample_rate: f32,
    chord_frames: u64,
    crossfade_frames: u64,
    detune: [f32; 4],
    phases: [[f32; 4]; 4],
    left: BiquadFilter,
    right: BiquadFilter,
}

impl ChordPad {
    pub fn new(sample_rate: f32) -> Self {
        let up = cents_to_ratio(DETUNE_CENTS);
        let down = cents_to_ratio(-DETUNE_CENTS);
        Self {
            sample_rate,
            chord_frames: ((CHORD_SECONDS * sample_rate).round() as u64).max(1),
            crossfade_frames: ((CROSSFADE_SECONDS * sample_rate).round() as u64).max(1),
            detune: [up, down, up, down],
            phases: [[0.0; 4]; 4],
            left: BiquadFilter::lowpass(sample_rate, LOWPASS_HZ, Q_BUTTERWORTH),
            right: BiquadFilter::lowpass(sample_rate, LOWPASS_HZ, Q_BUTTERWORTH),
        }
    }

    /// Index into [`PROGRESSION`] sounding at `frame`.
    pub fn chord_at(&self, frame: u64) -> usize {
        ((frame / self.chord_frames) % PROGRESSION.len() as u64) as usize
    }

    /// Render one frame. `pitch_ratio` is the shared tape wobble.
    #[inline]
    pub fn next(&mut self, frame: u64, pitch_ratio: f32) -> Frame {
        let current = self.chord_at(frame);
        let offset = frame % self.chord_frames;

        let dry = if offset < self.crossfade_frames {
            let mix = offset as f32 / self.crossfade_frames as f32;
            let incoming = self.voice_chord(current, pitch_ratio) * mix;
            if frame < self.chord_frames {
                // Very first chord fades in from silence.
                incoming
            } else {
                let previous = (current + PROGRESSION.len() - 1) % PROGRESSION.len();
                incoming + self.voice_chord(previous, pitch_ratio) * (1.0 - mix)
            }
        } else {
            self.voice_chord(current, pitch_ratio)
        };

        Frame::new(self.left.process(dry.left), self.right.process(dry.right))
    }

    fn voice_chord(&mut self, chord: usize, pitch_ratio: f32) -> Frame {
        let mut out = Frame::SILENCE;
        for voice in 0..4 {
            let hz = PROGRESSION[chord][voice] * self.detune[voice] * pitch_ratio;
            let phase = &mut self.phases[chord][voice];
            let sample = soft_triangle(*phase);
            *phase += TAU * hz / self.sample_rate;
            if *phase >= TAU {
                *phase -= TAU;
            }
            out += pan(sample * VOICE_GAIN, VOICE_PANS[voice]);
        }
        out
    }
}

/// Fundamental plus 3rd and 5th harmonics with triangle-wave weights.
#[inline]
fn soft_triangle(phase: f32) -> f32 {
    phase.sin() - (3.0 * phase).sin() / 9.0 + (5.0 * phase).sin() / 25.0
}

#[inline]
pub(crate) fn cents_to_ratio(cents: f32) -> f32 {
    (cents / 1200.0).exp2()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 8_000.0;

    #[test]
    fn chords_change_every_four_seconds_and_loop() {
        let pad = ChordPad::new(SAMPLE_RATE);
        let chord = (CHORD_SECONDS * SAMPLE_RATE) as u64;
        assert_eq!(pad.chord_at(0), 0);
        assert_eq!(pad.chord_at(chord - 1), 0);
        assert_eq!(pad.chord_at(chord), 1);
        assert_eq!(pad.chord_at(chord * 3), 3);
        assert_eq!(pad.chord_at(chord * 4), 0);
    }

    #[test]
    fn bass_sits_at_least_an_octave_below_the_rest() {
        for chord in PROGRESSION {
            assert!(chord[0] * 2.0 <= chord[1] + 1.0);
        }
    }

    #[test]
    fn detune_is_a_few_cents() {
        let ratio = cents_to_ratio(DETUNE_CENTS);
        assert!((ratio - 1.001_734).abs() < 1e-5);
        assert!((cents_to_ratio(-1200.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn chord_change_has_no_click() {
        let sample_rate = 44_100.0;
        let mut pad = ChordPad::new(sample_rate);
        let boundary = (CHORD_SECONDS * sample_rate) as u64;
        let mut previous = Frame::SILENCE;
        for frame in 0..boundary + 4_000 {
            let out = pad.next(frame, 1.0);
            if frame > 0 {
                assert!(
                    (out.left - previous.left).abs() < 0.05,
                    "jump at frame {frame}"
                );
            }
            previous = out;
        }
    }

    #[test]
    fn output_stays_bounded() {
        let mut pad = ChordPad::new(44_100.0);
        for frame in 0..44_100 * 5 {
            let out = pad.next(frame, 1.003);
            assert!(out.left.abs() < 1.0 && out.right.abs() < 1.0);
        }
    }
}
