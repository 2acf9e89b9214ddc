//! Distant thunder.
//!
//! A rare-event scheduler: every 30-60 seconds a rumble swells in over one
//! second and dies away over 3-5 seconds. The rumble is a low sine (20-80 Hz,
//! drawn per event) blended with lowpassed brown noise, so it is felt as much
//! as heard and never sounds like a pure tone.

use std::f32::consts::TAU;

use rand::{rngs::SmallRng, Rng};

use crate::dsp::{filter::Q_BUTTERWORTH, AttackDecay, BiquadFilter, Frame};
use crate::layers::seconds_to_frames;
use crate::noise::{BrownNoise, Seeder};

const ATTACK_SECONDS: f32 = 1.0;
const MIN_DECAY_SECONDS: f32 = 3.0;
const MAX_DECAY_SECONDS: f32 = 5.0;
const MIN_INTERVAL_SECONDS: f32 = 30.0;
const MAX_INTERVAL_SECONDS: f32 = 60.0;
const MIN_RUMBLE_HZ: f32 = 20.0;
const MAX_RUMBLE_HZ: f32 = 80.0;
const RUMBLE_LOWPASS_HZ: f32 = 200.0;
const SINE_LEVEL: f32 = 0.5;
const NOISE_LEVEL: f32 = 0.6;
const GAIN: f32 = 0.6;

pub struct Thunder {
    rng: SmallRng,
    sample_rate: f32,
    countdown: u32,
    envelope: AttackDecay,
    phase: f32,
    increment: f32,
    brown: BrownNoise,
    lowpass: BiquadFilter,
    events: u64,
}

impl Thunder {
    pub fn new(sample_rate: f32, seeder: &mut Seeder) -> Self {
        let mut thunder = Self {
            rng: seeder.rng(),
            sample_rate,
            countdown: 0,
            envelope: AttackDecay::new(),
            phase: 0.0,
            increment: 0.0,
            brown: seeder.brown(),
            lowpass: BiquadFilter::lowpass(sample_rate, RUMBLE_LOWPASS_HZ, Q_BUTTERWORTH),
            events: 0,
        };
        thunder.schedule_next();
        thunder
    }

    fn schedule_next(&mut self) {
        let seconds = self
            .rng
            .random_range(MIN_INTERVAL_SECONDS..MAX_INTERVAL_SECONDS);
        self.countdown = seconds_to_frames(seconds, self.sample_rate);
    }

    fn strike(&mut self) {
        let decay = self.rng.random_range(MIN_DECAY_SECONDS..MAX_DECAY_SECONDS);
        let rumble_hz = self.rng.random_range(MIN_RUMBLE_HZ..MAX_RUMBLE_HZ);

        self.envelope.trigger(ATTACK_SECONDS, decay, self.sample_rate);
        self.increment = TAU * rumble_hz / self.sample_rate;
        self.events += 1;
        self.schedule_next();
    }

    #[inline]
    pub fn next(&mut self) -> Frame {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.strike();
        }

        let noise = self.lowpass.process(self.brown.next());
        let level = self.envelope.next();
        if level == 0.0 {
            return Frame::SILENCE;
        }

        let sine = self.phase.sin();
        self.phase += self.increment;
        if self.phase >= TAU {
            self.phase -= TAU;
        }

        Frame::mono((SINE_LEVEL * sine + NOISE_LEVEL * noise) * level * GAIN)
    }

    /// Frames until the next strike.
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Strikes since construction.
    pub fn events(&self) -> u64 {
        self.events
    }

    pub fn is_rumbling(&self) -> bool {
        self.envelope.is_active()
    }
}
