use std::f32::consts::TAU;

use crate::dsp::{pan, BiquadFilter, Decay, Frame};
use crate::noise::{Seeder, WhiteNoise};

/*
Lo-fi Drum Machine
==================

A fixed 75 BPM, 4/4 pattern on an eighth-note grid:

    eighth   0   1   2   3   4   5   6   7
    beat     0       1       2       3
    kick     ●               ●
    snare            ●               ●
    hat      ●   ●   ●   ●   ●   ●   ●   ●

The grid is derived from the absolute frame index:

    eighth = floor(frame · BPM · 2 / (60 · sample_rate))

and a step fires when that number changes. Nothing counts frames inside a
buffer, so the pattern lands on the same frames whatever the caller's
buffer size.

    kick   sine swept 150 → 50 Hz, 80 ms decay, bent by the tape wobble
    snare  noise through a 1.8 kHz bandpass, 50 ms decay
    hat    noise through a 7 kHz highpass, 20 ms decay
*/

pub const DRUM_BPM: f32 = 75.0;

const KICK_LOW_HZ: f32 = 50.0;
const KICK_SWEEP_HZ: f32 = 100.0;
const KICK_SWEEP_SECONDS: f32 = 0.03;
const KICK_DECAY_SECONDS: f32 = 0.08;
const KICK_GAIN: f32 = 0.7;

const SNARE_HZ: f32 = 1_800.0;
const SNARE_Q: f32 = 0.8;
const SNARE_DECAY_SECONDS: f32 = 0.05;
const SNARE_GAIN: f32 = 0.5;

const HAT_HZ: f32 = 7_000.0;
const HAT_Q: f32 = 0.7;
const HAT_DECAY_SECONDS: f32 = 0.02;
const HAT_GAIN: f32 = 0.25;
const HAT_PAN: f32 = 0.3;

/// How many of each hit have fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrumCounts {
    pub kicks: u64,
    pub snares: u64,
    pub hats: u64,
}

pub struct DrumMachine {
    sample_rate: f32,
    frames_per_minute: f64,
    last_eighth: Option<u64>,

    kick_phase: f32,
    kick_sweep: Decay,
    kick_env: Decay,

    snare_noise: WhiteNoise,
    snare_filter: BiquadFilter,
    snare_env: Decay,

    hat_noise: WhiteNoise,
    hat_filter: BiquadFilter,
    hat_env: Decay,

    counts: DrumCounts,
}

impl DrumMachine {
    pub fn new(sample_rate: f32, seeder: &mut Seeder) -> Self {
        Self {
            sample_rate,
            frames_per_minute: 60.0 * sample_rate as f64,
            last_eighth: None,
            kick_phase: 0.0,
            kick_sweep: Decay::new(KICK_SWEEP_SECONDS, sample_rate),
            kick_env: Decay::new(KICK_DECAY_SECONDS, sample_rate),
            snare_noise: seeder.white(),
            snare_filter: BiquadFilter::bandpass(sample_rate, SNARE_HZ, SNARE_Q),
            snare_env: Decay::new(SNARE_DECAY_SECONDS, sample_rate),
            hat_noise: seeder.white(),
            hat_filter: BiquadFilter::highpass(sample_rate, HAT_HZ, HAT_Q),
            hat_env: Decay::new(HAT_DECAY_SECONDS, sample_rate),
            counts: DrumCounts::default(),
        }
    }

    /// Eighth-note index containing `frame`.
    pub fn eighth_at(&self, frame: u64) -> u64 {
        // Multiply before dividing so whole-frame boundaries stay exact.
        (frame as f64 * (DRUM_BPM as f64 * 2.0) / self.frames_per_minute).floor() as u64
    }

    fn step(&mut self, eighth: u64) {
        let step = eighth % 8;
        if step % 2 == 0 {
            let beat = step / 2;
            if beat % 2 == 0 {
                self.kick_phase = 0.0;
                self.kick_sweep.trigger(1.0);
                self.kick_env.trigger(1.0);
                self.counts.kicks += 1;
            } else {
                self.snare_env.trigger(1.0);
                self.counts.snares += 1;
            }
        }
        self.hat_env.trigger(1.0);
        self.counts.hats += 1;
    }

    /// One frame of drums. `pitch_ratio` bends the kick with the tape.
    #[inline]
    pub fn next(&mut self, frame: u64, pitch_ratio: f32) -> Frame {
        let eighth = self.eighth_at(frame);
        if self.last_eighth != Some(eighth) {
            self.last_eighth = Some(eighth);
            self.step(eighth);
        }

        let kick_hz = (KICK_LOW_HZ + KICK_SWEEP_HZ * self.kick_sweep.next()) * pitch_ratio;
        let kick = self.kick_phase.sin() * self.kick_env.next() * KICK_GAIN;
        self.kick_phase += TAU * kick_hz / self.sample_rate;
        if self.kick_phase >= TAU {
            self.kick_phase -= TAU;
        }

        let snare = self
            .snare_filter
            .process(self.snare_noise.next_uniform() * self.snare_env.next())
            * SNARE_GAIN;
        let hat = self
            .hat_filter
            .process(self.hat_noise.next_uniform() * self.hat_env.next())
            * HAT_GAIN;

        Frame::mono(kick + snare) + pan(hat, HAT_PAN)
    }

    pub fn counts(&self) -> DrumCounts {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 8_000.0;
    // 75 BPM at 8 kHz: 3200 frames per eighth, 25600 per bar.
    const BAR: u64 = 25_600;

    #[test]
    fn eighth_grid_is_exact() {
        let drums = DrumMachine::new(SAMPLE_RATE, &mut Seeder::fixed(61));
        assert_eq!(drums.eighth_at(0), 0);
        assert_eq!(drums.eighth_at(3_199), 0);
        assert_eq!(drums.eighth_at(3_200), 1);
        assert_eq!(drums.eighth_at(BAR), 8);
    }

    #[test]
    fn four_bars_hold_the_pattern() {
        let mut drums = DrumMachine::new(SAMPLE_RATE, &mut Seeder::fixed(62));
        for frame in 0..BAR * 4 {
            drums.next(frame, 1.0);
        }
        assert_eq!(
            drums.counts(),
            DrumCounts {
                kicks: 8,
                snares: 8,
                hats: 32
            }
        );
    }

    #[test]
    fn kick_lands_on_the_downbeat() {
        let mut drums = DrumMachine::new(44_100.0, &mut Seeder::fixed(63));
        let first = drums.next(0, 1.0);
        assert_eq!(drums.counts().kicks, 1);
        // Kick starts at phase zero; only the hat and snare noise contribute.
        assert!(first.left.abs() < 0.5);

        let mut peak = 0.0f32;
        for frame in 1..2_000 {
            peak = peak.max(drums.next(frame, 1.0).left.abs());
        }
        assert!(peak > 0.3, "peak {peak}");
    }

    #[test]
    fn kick_pitch_follows_the_tape() {
        let mut steady = DrumMachine::new(44_100.0, &mut Seeder::fixed(64));
        let mut twin = DrumMachine::new(44_100.0, &mut Seeder::fixed(64));
        let mut bent = DrumMachine::new(44_100.0, &mut Seeder::fixed(64));

        let mut drift = 0.0f32;
        for frame in 0..2_000 {
            let a = steady.next(frame, 1.0);
            assert_eq!(twin.next(frame, 1.0), a);
            drift = drift.max((bent.next(frame, 1.003).left - a.left).abs());
        }
        // Same seed, so the snare and hat noise cancel and only the kick differs.
        assert!(drift > 1e-4, "drift {drift}");
    }
}
