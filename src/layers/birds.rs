use std::f32::consts::TAU;

use rand::{rngs::SmallRng, Rng};

use crate::dsp::{bell, pan, Frame};
use crate::layers::seconds_to_frames;
use crate::noise::Seeder;

/*
FM Bird Calls
=============

A bird chirp is a fast, bright pitch wobble. Two-operator FM gets there with
a couple of sines:

    y(t) = sin(2π·fc·t + I · sin(2π·fm·t))

    fc  carrier    base pitch of the call (2-4 kHz)
    fm  modulator  fc · ratio
    I   index      how far the modulator bends the carrier (brightness)

Each call is shaped by the bell envelope 4·t·(1-t), so it fades in and out
smoothly with no click.

Scheduling
----------

Birds sing in short bursts separated by longer rests:

    ┌─────────┐ countdown ┌─────────┐  call done,  ┌─────────┐
    │ Resting │ ────────→ │ Singing │ ───────────→ │ Pausing │
    └─────────┘  (2-5 s)  └─────────┘  calls left  └─────────┘
         ↑                     │  ↑                     │
         │   burst finished    │  └─────────────────────┘
         └─────────────────────┘     gap (50-200 ms)

A burst is 1-3 calls. Every call picks one of three timbre presets, jitters
its pitch by ±10%, and lands at a random position in the stereo field.
*/

#[derive(Debug, Clone, Copy)]
pub struct BirdPreset {
    pub base_hz: f32,
    pub ratio: f32,
    pub index: f32,
    pub duration: f32,
}

pub const BIRD_PRESETS: [BirdPreset; 3] = [
    BirdPreset {
        base_hz: 2_800.0,
        ratio: 1.5,
        index: 2.0,
        duration: 0.12,
    },
    BirdPreset {
        base_hz: 3_600.0,
        ratio: 2.0,
        index: 1.2,
        duration: 0.08,
    },
    BirdPreset {
        base_hz: 2_200.0,
        ratio: 3.0,
        index: 3.0,
        duration: 0.18,
    },
];

const MIN_REST_SECONDS: f32 = 2.0;
const MAX_REST_SECONDS: f32 = 5.0;
const MIN_GAP_SECONDS: f32 = 0.05;
const MAX_GAP_SECONDS: f32 = 0.2;
const PITCH_JITTER: f32 = 0.1;
const MAX_PAN: f32 = 0.8;
const GAIN: f32 = 0.18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Resting,
    Singing,
    Pausing,
}

pub struct BirdCalls {
    rng: SmallRng,
    sample_rate: f32,
    stage: Stage,
    countdown: u32,
    calls_left: u8,

    carrier_phase: f32,
    modulator_phase: f32,
    carrier_step: f32,
    modulator_step: f32,
    index: f32,
    elapsed: u32,
    length: u32,
    pan: f32,

    calls: u64,
    bursts: u64,
}

impl BirdCalls {
    pub fn new(sample_rate: f32, seeder: &mut Seeder) -> Self {
        let mut birds = Self {
            rng: seeder.rng(),
            sample_rate,
            stage: Stage::Resting,
            countdown: 1,
            calls_left: 0,
            carrier_phase: 0.0,
            modulator_phase: 0.0,
            carrier_step: 0.0,
            modulator_step: 0.0,
            index: 0.0,
            elapsed: 0,
            length: 1,
            pan: 0.0,
            calls: 0,
            bursts: 0,
        };
        birds.rest();
        birds
    }

    fn rest(&mut self) {
        let seconds = self.rng.random_range(MIN_REST_SECONDS..MAX_REST_SECONDS);
        self.countdown = seconds_to_frames(seconds, self.sample_rate);
        self.stage = Stage::Resting;
    }

    fn pause(&mut self) {
        let seconds = self.rng.random_range(MIN_GAP_SECONDS..MAX_GAP_SECONDS);
        self.countdown = seconds_to_frames(seconds, self.sample_rate);
        self.stage = Stage::Pausing;
    }

    fn start_call(&mut self) {
        let preset = BIRD_PRESETS[self.rng.random_range(0..BIRD_PRESETS.len())];
        let jitter = self.rng.random_range(1.0 - PITCH_JITTER..1.0 + PITCH_JITTER);
        let carrier_hz = preset.base_hz * jitter;

        self.carrier_step = TAU * carrier_hz / self.sample_rate;
        self.modulator_step = TAU * carrier_hz * preset.ratio / self.sample_rate;
        self.index = preset.index;
        self.carrier_phase = 0.0;
        self.modulator_phase = 0.0;
        self.elapsed = 0;
        self.length = seconds_to_frames(preset.duration, self.sample_rate);
        self.pan = self.rng.random_range(-MAX_PAN..MAX_PAN);

        self.calls_left = self.calls_left.saturating_sub(1);
        self.calls += 1;
        self.stage = Stage::Singing;
    }

    #[inline]
    pub fn next(&mut self) -> Frame {
        match self.stage {
            Stage::Resting | Stage::Pausing => {
                self.countdown = self.countdown.saturating_sub(1);
                if self.countdown == 0 {
                    if self.stage == Stage::Resting {
                        self.calls_left = self.rng.random_range(1..=3);
                        self.bursts += 1;
                    }
                    self.start_call();
                }
                Frame::SILENCE
            }

            Stage::Singing => {
                let t = self.elapsed as f32 / self.length as f32;
                let modulator = self.modulator_phase.sin();
                let sample = (self.carrier_phase + self.index * modulator).sin() * bell(t);

                self.carrier_phase = (self.carrier_phase + self.carrier_step) % TAU;
                self.modulator_phase = (self.modulator_phase + self.modulator_step) % TAU;
                self.elapsed += 1;

                if self.elapsed >= self.length {
                    if self.calls_left > 0 {
                        self.pause();
                    } else {
                        self.rest();
                    }
                }

                pan(sample * GAIN, self.pan)
            }
        }
    }

    pub fn is_singing(&self) -> bool {
        self.stage == Stage::Singing
    }

    /// Calls started since construction.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Bursts started since construction.
    pub fn bursts(&self) -> u64 {
        self.bursts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 16_000.0;

    #[test]
    fn bursts_hold_one_to_three_calls() {
        let mut birds = BirdCalls::new(SAMPLE_RATE, &mut Seeder::fixed(12));
        for _ in 0..(SAMPLE_RATE as usize * 120) {
            birds.next();
        }
        let bursts = birds.bursts();
        let calls = birds.calls();
        // 120 s with 2-5 s rests plus short bursts: roughly 24-55 bursts.
        assert!((20..=60).contains(&bursts), "bursts {bursts}");
        assert!(calls >= bursts && calls <= bursts * 3, "calls {calls} bursts {bursts}");
    }

    #[test]
    fn calls_are_silent_at_both_ends_and_audible_in_the_middle() {
        let mut birds = BirdCalls::new(SAMPLE_RATE, &mut Seeder::fixed(13));
        while !birds.is_singing() {
            birds.next();
        }
        let length = birds.length as usize;
        let frames: Vec<Frame> = (0..length).map(|_| birds.next()).collect();

        let edge = frames[0].left.abs() + frames[0].right.abs();
        assert!(edge < 1e-6, "call should start silent");
        let peak = frames
            .iter()
            .map(|f| f.left.abs().max(f.right.abs()))
            .fold(0.0f32, f32::max);
        assert!(peak > 0.05 && peak <= GAIN, "peak {peak}");
    }

    #[test]
    fn silent_while_resting() {
        let mut birds = BirdCalls::new(SAMPLE_RATE, &mut Seeder::fixed(14));
        let wait = birds.countdown;
        for _ in 0..wait - 1 {
            assert_eq!(birds.next(), Frame::SILENCE);
        }
    }
}
