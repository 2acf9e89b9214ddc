//! Low Frequency Oscillator (LFO).

use std::f32::consts::TAU;

/*
Low Frequency Oscillators
=========================

An LFO is an oscillator running at sub-audio frequencies. It does not make
sound itself; it moves some other parameter slowly over time. Every
soundscape in this crate is built on a handful of them:

    Generator    Rate         Target
    ---------    ----------   -----------------------------------------
    WhiteNoise   1/45 Hz      "breathing" amplitude, ±5%
    Rain         1/30 Hz      hiss intensity and drop density
    Forest       1/12 Hz      wind bandpass centre, 1-3 kHz
                 1/5 Hz       stream amplitude
    Waves        20-40 Hz     foam flutter (audio-rate AM, drawn per wave)
    LoFi         0.4 Hz       tape pitch wobble, ±5 cents
                 0.2 Hz       tape amplitude wobble, ±4%


Vocabulary
----------

  period      Time for one complete oscillation. At 1/30 Hz the period is
              30 seconds.

  bipolar     Output swings -1.0 to +1.0. Natural for symmetric effects
              such as pitch wobble (sharp AND flat).

  unipolar    Output stays in 0.0 to 1.0. Natural for "how much" effects.
              Convert: unipolar = (bipolar + 1.0) / 2.0


Phase Accumulation
------------------

Each LFO keeps a phase in radians and adds a fixed increment per frame:

    increment = 2π · frequency / sample_rate

The phase wraps at 2π so it never loses precision, however long a study
session runs. Because the increment is applied exactly once per frame, the
LFO position depends only on how many frames have been rendered, never on
how the caller chunks its buffers.
*/

/// Sine LFO driven by a per-frame phase accumulator.
#[derive(Debug, Clone)]
pub struct Lfo {
    phase: f32,
    increment: f32,
}

impl Lfo {
    /// A sine LFO starting at phase 0 (output 0, rising).
    pub fn sine(frequency_hz: f32, sample_rate: f32) -> Self {
        Self {
            phase: 0.0,
            increment: phase_increment(frequency_hz, sample_rate),
        }
    }

    /// Start from a specific phase in radians.
    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = wrap_phase(phase);
        self
    }

    /// Current output without advancing.
    #[inline]
    pub fn value(&self) -> f32 {
        self.phase.sin()
    }

    /// Return the current output, then advance one frame.
    #[inline]
    pub fn next(&mut self) -> f32 {
        let value = self.value();
        self.advance();
        value
    }

    #[inline]
    pub fn advance(&mut self) {
        self.phase += self.increment;
        if self.phase >= TAU {
            self.phase -= TAU;
        }
    }

    pub fn set_frequency(&mut self, frequency_hz: f32, sample_rate: f32) {
        self.increment = phase_increment(frequency_hz, sample_rate);
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}

#[inline]
fn phase_increment(frequency_hz: f32, sample_rate: f32) -> f32 {
    let increment = TAU * frequency_hz / sample_rate;
    if increment.is_finite() {
        increment.clamp(0.0, TAU)
    } else {
        0.0
    }
}

#[inline]
fn wrap_phase(phase: f32) -> f32 {
    if phase.is_finite() {
        phase.rem_euclid(TAU)
    } else {
        0.0
    }
}

/// Map a bipolar LFO value (-1.0 to +1.0) onto 0.0 to 1.0.
#[inline]
pub fn bipolar_to_unipolar(bipolar: f32) -> f32 {
    (bipolar + 1.0) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unipolar_mapping_covers_the_unit_range() {
        assert_eq!(bipolar_to_unipolar(-1.0), 0.0);
        assert_eq!(bipolar_to_unipolar(0.0), 0.5);
        assert_eq!(bipolar_to_unipolar(1.0), 1.0);
    }

    #[test]
    fn sine_lfo_starts_at_zero_and_stays_in_range() {
        let mut lfo = Lfo::sine(5.0, 48_000.0);
        assert_eq!(lfo.next(), 0.0);
        for _ in 0..48_000 {
            let value = lfo.next();
            assert!((-1.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn quarter_period_reaches_peak() {
        let sample_rate = 1_000.0;
        let mut lfo = Lfo::sine(1.0, sample_rate);
        for _ in 0..250 {
            lfo.advance();
        }
        assert!((lfo.value() - 1.0).abs() < 1e-3, "got {}", lfo.value());
    }

    #[test]
    fn phase_wraps_after_full_cycle() {
        let mut lfo = Lfo::sine(10.0, 1_000.0);
        for _ in 0..1_000 {
            lfo.advance();
            assert!(lfo.phase() < TAU);
        }
        assert!(lfo.value().abs() < 1e-2);
    }

    #[test]
    fn with_phase_offsets_output() {
        let lfo = Lfo::sine(1.0, 1_000.0).with_phase(std::f32::consts::FRAC_PI_2);
        assert!((lfo.value() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn invalid_frequency_freezes_instead_of_failing() {
        let mut lfo = Lfo::sine(f32::NAN, 44_100.0);
        lfo.advance();
        assert_eq!(lfo.value(), 0.0);
    }
}
