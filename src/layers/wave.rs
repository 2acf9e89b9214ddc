use rand::{rngs::SmallRng, Rng};

use crate::dsp::{bipolar_to_unipolar, lerp, Lfo};
use crate::layers::seconds_to_frames;
use crate::noise::Seeder;

/*
Ocean Wave Life-Cycle
=====================

Every wave is its own little event with two stages. It rises fast, then
breaks and drains away slowly:

    envelope
    1.0 ┤      ╭╮
        │     ╱  ╲
        │    │    ╲
        │   ╱      ╲╲
        │  ╱         ╲╲___
    0.0 ┼─╯               ╲──╭── next wave starts immediately
        └─ rise ─┴────── fall ──────┘
          1.5-2 s       4-6 s

    rising   envelope = p^0.6          p = progress through the rise
    falling  envelope = (1 - q)^1.5    q = progress through the fall

The body lowpass opens with the envelope (500 Hz → 6 kHz on the way up,
6 kHz → 500 Hz on the way down), which is what makes a wave sound like it
approaches and then recedes rather than just getting louder.

Foam is the hiss of spray. It is gated on through the rise and the first
30% of the fall, and flutters with a 20-40 Hz micro-LFO drawn per wave.

Each wave glides across the stereo field from one side to the other. Roughly
one wave in seven is a "set" wave, 40% bigger than the rest.
*/

const MIN_RISE_SECONDS: f32 = 1.5;
const MAX_RISE_SECONDS: f32 = 2.0;
const MIN_FALL_SECONDS: f32 = 4.0;
const MAX_FALL_SECONDS: f32 = 6.0;
const RISE_EXPONENT: f32 = 0.6;
const FALL_EXPONENT: f32 = 1.5;
const TROUGH_CUTOFF_HZ: f32 = 500.0;
const CREST_CUTOFF_HZ: f32 = 6_000.0;
const FOAM_TAIL: f32 = 0.3;
const MIN_FLUTTER_HZ: f32 = 20.0;
const MAX_FLUTTER_HZ: f32 = 40.0;
const FLUTTER_FLOOR: f32 = 0.2;
const SET_WAVE_CHANCE: f32 = 0.15;
const SET_WAVE_AMPLITUDE: f32 = 1.4;
const MIN_PAN: f32 = 0.2;
const MAX_PAN: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveStage {
    Rising,
    Falling,
}

/// Control values for one frame of the current wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveState {
    /// Shape of the wave, 0..=1.
    pub envelope: f32,
    /// Body lowpass cutoff in Hz.
    pub cutoff: f32,
    /// Foam gate including its flutter, 0..=1.
    pub foam: f32,
    /// Stereo position, -1..=1.
    pub pan: f32,
    /// 1.0 for a normal wave, 1.4 for a set wave.
    pub amplitude: f32,
}

pub struct WaveCycle {
    rng: SmallRng,
    sample_rate: f32,
    stage: WaveStage,
    elapsed: u32,
    rise_frames: u32,
    fall_frames: u32,
    amplitude: f32,
    pan_from: f32,
    flutter: Lfo,
    waves_started: u64,
}

impl WaveCycle {
    pub fn new(sample_rate: f32, seeder: &mut Seeder) -> Self {
        let mut cycle = Self {
            rng: seeder.rng(),
            sample_rate,
            stage: WaveStage::Rising,
            elapsed: 0,
            rise_frames: 1,
            fall_frames: 1,
            amplitude: 1.0,
            pan_from: 0.0,
            flutter: Lfo::sine(MIN_FLUTTER_HZ, sample_rate),
            waves_started: 0,
        };
        cycle.start_wave();
        cycle
    }

    fn start_wave(&mut self) {
        let rise = self.rng.random_range(MIN_RISE_SECONDS..MAX_RISE_SECONDS);
        let fall = self.rng.random_range(MIN_FALL_SECONDS..MAX_FALL_SECONDS);
        self.rise_frames = seconds_to_frames(rise, self.sample_rate);
        self.fall_frames = seconds_to_frames(fall, self.sample_rate);

        self.amplitude = if self.rng.random::<f32>() < SET_WAVE_CHANCE {
            SET_WAVE_AMPLITUDE
        } else {
            1.0
        };

        let side = self.rng.random_range(MIN_PAN..MAX_PAN);
        self.pan_from = if self.rng.random::<bool>() { side } else { -side };

        let flutter_hz = self.rng.random_range(MIN_FLUTTER_HZ..MAX_FLUTTER_HZ);
        self.flutter.set_frequency(flutter_hz, self.sample_rate);

        self.stage = WaveStage::Rising;
        self.elapsed = 0;
        self.waves_started += 1;
    }

    /// Control values for the current frame, without advancing.
    pub fn state(&self) -> WaveState {
        let done = match self.stage {
            WaveStage::Rising => u64::from(self.elapsed),
            WaveStage::Falling => u64::from(self.rise_frames) + u64::from(self.elapsed),
        };
        let total = u64::from(self.rise_frames) + u64::from(self.fall_frames);
        let life = done as f32 / total as f32;
        let pan = lerp(self.pan_from, -self.pan_from, life);
        let flutter = lerp(FLUTTER_FLOOR, 1.0, bipolar_to_unipolar(self.flutter.value()));

        let (envelope, cutoff, gate) = match self.stage {
            WaveStage::Rising => {
                let p = self.elapsed as f32 / self.rise_frames as f32;
                (
                    p.powf(RISE_EXPONENT),
                    lerp(TROUGH_CUTOFF_HZ, CREST_CUTOFF_HZ, p),
                    p,
                )
            }
            WaveStage::Falling => {
                let q = self.elapsed as f32 / self.fall_frames as f32;
                let gate = if q < FOAM_TAIL { 1.0 - q / FOAM_TAIL } else { 0.0 };
                (
                    (1.0 - q).powf(FALL_EXPONENT),
                    lerp(CREST_CUTOFF_HZ, TROUGH_CUTOFF_HZ, q),
                    gate,
                )
            }
        };

        WaveState {
            envelope,
            cutoff,
            foam: gate * flutter,
            pan,
            amplitude: self.amplitude,
        }
    }

    /// Return the current frame's control values, then advance one frame.
    #[inline]
    pub fn next(&mut self) -> WaveState {
        let state = self.state();

        self.flutter.advance();
        self.elapsed += 1;
        match self.stage {
            WaveStage::Rising if self.elapsed >= self.rise_frames => {
                self.stage = WaveStage::Falling;
                self.elapsed = 0;
            }
            WaveStage::Falling if self.elapsed >= self.fall_frames => self.start_wave(),
            _ => {}
        }

        state
    }

    pub fn stage(&self) -> WaveStage {
        self.stage
    }

    pub fn waves_started(&self) -> u64 {
        self.waves_started
    }
}
