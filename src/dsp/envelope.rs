use crate::MIN_TIME;

/*
Envelopes for Ambience
======================

Ambient layers do not have note-on/note-off gates the way a keyboard synth
does. Instead, each layer fires its own events (a raindrop lands, a leaf
rustles, thunder rolls in) and needs a loudness curve that plays out by
itself. Three shapes cover everything:


Exponential Decay
-----------------

  Level
    1.0 ┐╲
        │ ╲
        │  ╲__
        │     ‾‾──___
    0.0 └────────────‾‾‾──→ Time

An instant hit that dies away. Each frame the level is multiplied by a fixed
factor:

    multiplier = exp(-1 / (time_constant · sample_rate))

After one time constant the level has fallen to 1/e ≈ 37%. Drops (~3 ms),
leaf rustles (~15 ms), kick (80 ms), snare (50 ms) and hats (20 ms) all use
this. `excite()` adds energy on top of what is still ringing, so two raindrops
landing close together sum instead of cutting each other off.


Attack / Decay
--------------

  Level
    1.0 ┐      ╱╲
        │     ╱  ╲
        │    ╱    ╲__
        │   ╱        ‾‾──___
    0.0 └──╱────────────────‾──→ Time
          Attack   Decay

A linear swell followed by an exponential tail that reaches -60 dB exactly
when the decay time runs out. Distant thunder uses 1 s of attack and a
3-5 s decay.

    ┌──────┐  trigger  ┌────────┐  level=1  ┌───────┐  time up  ┌──────┐
    │ Idle │ ────────→ │ Attack │ ────────→ │ Decay │ ────────→ │ Idle │
    └──────┘           └────────┘           └───────┘           └──────┘

Re-triggering during Attack or Decay restarts the attack from the CURRENT
level, not zero, so a new event never clicks.


Bell
----

    4 · t · (1 - t),  t ∈ [0, 1]

A symmetric hump that is 0 at both ends and 1 in the middle. Bird calls are
short enough that a smooth in-and-out matters more than a realistic attack.
*/

/// The tail of an attack/decay envelope stops at this level (-60 dB).
pub const DECAY_FLOOR: f32 = 0.001;

/// Levels below this are snapped to zero.
const SILENCE_THRESHOLD: f32 = 1.0e-6;

/// Exponential decay with a fixed time constant.
#[derive(Debug, Clone)]
pub struct Decay {
    level: f32,
    multiplier: f32,
}

impl Decay {
    pub fn new(time_constant: f32, sample_rate: f32) -> Self {
        Self {
            level: 0.0,
            multiplier: decay_multiplier(time_constant, sample_rate),
        }
    }

    /// Restart at `level`.
    #[inline]
    pub fn trigger(&mut self, level: f32) {
        self.level = sanitize(level);
    }

    /// Add `amount` on top of whatever is still ringing.
    #[inline]
    pub fn excite(&mut self, amount: f32) {
        self.level = sanitize(self.level + amount);
    }

    /// Return the current level, then decay one frame.
    #[inline]
    pub fn next(&mut self) -> f32 {
        let out = self.level;
        self.level *= self.multiplier;
        if self.level < SILENCE_THRESHOLD {
            self.level = 0.0;
        }
        out
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn is_active(&self) -> bool {
        self.level > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    Idle,   // Nothing playing, level = 0
    Attack, // Linear ramp up to 1.0
    Decay,  // Exponential fall towards DECAY_FLOOR
}

/// Linear attack, exponential decay, then idle.
#[derive(Debug, Clone)]
pub struct AttackDecay {
    stage: EnvelopeStage,
    level: f32,
    attack_step: f32,
    decay_multiplier: f32,
    decay_remaining: u32,
    decay_total: u32,
}

impl AttackDecay {
    pub fn new() -> Self {
        Self {
            stage: EnvelopeStage::Idle,
            level: 0.0,
            attack_step: 1.0,
            decay_multiplier: 0.0,
            decay_remaining: 0,
            decay_total: 0,
        }
    }

    /// Start a new event with the given attack and decay durations (seconds).
    pub fn trigger(&mut self, attack: f32, decay: f32, sample_rate: f32) {
        let attack_frames = (attack.max(MIN_TIME) * sample_rate).max(1.0);
        let decay_frames = (decay.max(MIN_TIME) * sample_rate).max(1.0);

        self.attack_step = 1.0 / attack_frames;
        self.decay_multiplier = (DECAY_FLOOR.ln() / decay_frames).exp();
        self.decay_total = decay_frames as u32;
        self.decay_remaining = self.decay_total;
        self.stage = EnvelopeStage::Attack;
    }

    /// Return the current level, then advance one frame.
    #[inline]
    pub fn next(&mut self) -> f32 {
        let out = self.level;

        match self.stage {
            EnvelopeStage::Idle => {
                self.level = 0.0;
            }

            EnvelopeStage::Attack => {
                self.level += self.attack_step;
                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.stage = EnvelopeStage::Decay;
                }
            }

            EnvelopeStage::Decay => {
                self.level *= self.decay_multiplier;
                self.decay_remaining = self.decay_remaining.saturating_sub(1);
                if self.decay_remaining == 0 {
                    self.level = 0.0;
                    self.stage = EnvelopeStage::Idle;
                }
            }
        }

        debug_assert!((0.0..=1.0).contains(&self.level));
        out
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.stage, EnvelopeStage::Idle)
    }
}

impl Default for AttackDecay {
    fn default() -> Self {
        Self::new()
    }
}

/// `4·t·(1-t)` on [0, 1], zero elsewhere.
#[inline]
pub fn bell(t: f32) -> f32 {
    if (0.0..=1.0).contains(&t) {
        4.0 * t * (1.0 - t)
    } else {
        0.0
    }
}

#[inline]
fn decay_multiplier(time_constant: f32, sample_rate: f32) -> f32 {
    let frames = time_constant.max(MIN_TIME) * sample_rate;
    let multiplier = (-1.0 / frames).exp();
    if multiplier.is_finite() {
        multiplier.clamp(0.0, 1.0 - f32::EPSILON)
    } else {
        0.0
    }
}

#[inline]
fn sanitize(level: f32) -> f32 {
    if level.is_finite() {
        level.clamp(0.0, 4.0)
    } else {
        0.0
    }
}
