use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Biquad Filters
==============

Every band-limited layer in the crate (rain hiss, wind, foam, snare) is white
or pink noise pushed through one of these. The biquad is the classic
second-order IIR section:

    y[n] = b0·x[n] + b1·x[n-1] + b2·x[n-2] - a1·y[n-1] - a2·y[n-2]

| type      | passes          | rejects         | used for                    |
| --------- | --------------- | --------------- | --------------------------- |
| low-pass  | below cutoff    | above cutoff    | wave body, pad, thunder     |
| high-pass | above cutoff    | below cutoff    | hi-hat                      |
| band-pass | around cutoff   | both sides      | hiss, wind, drops, foam     |

Coefficients come from the RBJ Audio EQ Cookbook:

    w0    = 2π · cutoff / sample_rate
    alpha = sin(w0) / (2Q)

    low-pass:   b = [(1-cos)/2,  1-cos,   (1-cos)/2]
    high-pass:  b = [(1+cos)/2, -(1+cos), (1+cos)/2]
    band-pass:  b = [alpha,      0,       -alpha]      (0 dB peak)
    all types:  a = [1+alpha,   -2cos,    1-alpha]     (normalised by a0)

Coefficients are a pure function of (type, cutoff, Q, sample rate). Moving
the cutoff recomputes them but leaves the delay line alone, which is what
turns a stepped cutoff into a smooth audible sweep instead of a click.
*/

/// Lowest cutoff any filter will accept.
pub const MIN_CUTOFF_HZ: f32 = 20.0;
/// Lowest Q any filter will accept.
pub const MIN_Q: f32 = 0.01;
/// Butterworth Q, flat passband.
pub const Q_BUTTERWORTH: f32 = std::f32::consts::FRAC_1_SQRT_2;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    LowPass,
    HighPass,
    BandPass,
}

#[derive(Debug, Clone)]
pub struct BiquadFilter {
    filter_type: FilterType,
    sample_rate: f32,
    cutoff_hz: f32,
    q: f32,

    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,

    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl BiquadFilter {
    pub fn new(filter_type: FilterType, sample_rate: f32, cutoff_hz: f32, q: f32) -> Self {
        let mut filter = Self {
            filter_type,
            sample_rate,
            cutoff_hz: 1_000.0,
            q: Q_BUTTERWORTH,
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        };
        filter.set_cutoff(cutoff_hz, q);
        filter
    }

    pub fn lowpass(sample_rate: f32, cutoff_hz: f32, q: f32) -> Self {
        Self::new(FilterType::LowPass, sample_rate, cutoff_hz, q)
    }

    pub fn highpass(sample_rate: f32, cutoff_hz: f32, q: f32) -> Self {
        Self::new(FilterType::HighPass, sample_rate, cutoff_hz, q)
    }

    pub fn bandpass(sample_rate: f32, cutoff_hz: f32, q: f32) -> Self {
        Self::new(FilterType::BandPass, sample_rate, cutoff_hz, q)
    }

    /// Highest cutoff this filter accepts: one hertz below Nyquist.
    pub fn max_cutoff(&self) -> f32 {
        (self.sample_rate * 0.5 - 1.0).max(MIN_CUTOFF_HZ)
    }

    /// Move the cutoff and Q, recomputing coefficients. The delay line is kept.
    ///
    /// `cutoff_hz` is clamped to `[20, sample_rate/2 - 1]` and `q` to at least
    /// 0.01. A non-finite cutoff keeps the previous one.
    pub fn set_cutoff(&mut self, cutoff_hz: f32, q: f32) {
        let cutoff_hz = if cutoff_hz.is_finite() {
            cutoff_hz
        } else {
            self.cutoff_hz
        };
        self.cutoff_hz = cutoff_hz.clamp(MIN_CUTOFF_HZ, self.max_cutoff());
        self.q = if q.is_finite() { q.max(MIN_Q) } else { self.q };
        self.update_coefficients();
    }

    fn update_coefficients(&mut self) {
        let w0 = TAU * self.cutoff_hz as f64 / self.sample_rate as f64;
        let (sin_w0, cos_w0) = w0.sin_cos();
        let alpha = sin_w0 / (2.0 * self.q as f64);

        let (b0, b1, b2) = match self.filter_type {
            FilterType::LowPass => {
                let b1 = 1.0 - cos_w0;
                (b1 * 0.5, b1, b1 * 0.5)
            }
            FilterType::HighPass => {
                let b1 = -(1.0 + cos_w0);
                (-b1 * 0.5, b1, -b1 * 0.5)
            }
            FilterType::BandPass => (alpha, 0.0, -alpha),
        };
        let a0 = 1.0 + alpha;

        self.b0 = (b0 / a0) as f32;
        self.b1 = (b1 / a0) as f32;
        self.b2 = (b2 / a0) as f32;
        self.a1 = (-2.0 * cos_w0 / a0) as f32;
        self.a2 = ((1.0 - alpha) / a0) as f32;
    }

    /// Run one sample through the filter.
    #[inline]
    pub fn process(&mut self, x: f32) -> f32 {
        let y = self.b0 * x + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        if !y.is_finite() {
            self.reset();
            return 0.0;
        }

        self.x2 = self.x1;
        self.x1 = x;
        self.y2 = self.y1;
        self.y1 = flush_denormal(y);
        y
    }

    /// Filter a whole buffer in place.
    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Zero the delay line. Only ever called explicitly.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    pub fn cutoff(&self) -> f32 {
        self.cutoff_hz
    }

    pub fn q(&self) -> f32 {
        self.q
    }

    pub fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    /// `(b0, b1, b2, a1, a2)`, normalised by a0.
    pub fn coefficients(&self) -> [f32; 5] {
        [self.b0, self.b1, self.b2, self.a1, self.a2]
    }

    /// `(x1, x2, y1, y2)`.
    pub fn delay_line(&self) -> [f32; 4] {
        [self.x1, self.x2, self.y1, self.y2]
    }
}

/// One-pole lowpass: `y = y_prev·coeff + x·(1 - coeff)`.
///
/// Higher `coeff` means a darker, slower response. Cheap enough to run on every
/// channel of a noise bed just to take the edge off the top octave.
#[derive(Debug, Clone)]
pub struct OnePoleFilter {
    coeff: f32,
    prev: f32,
}

impl OnePoleFilter {
    /// `coeff` is clamped to `[0, 0.9999]`.
    pub fn new(coeff: f32) -> Self {
        let coeff = if coeff.is_finite() { coeff } else { 0.0 };
        Self {
            coeff: coeff.clamp(0.0, 0.9999),
            prev: 0.0,
        }
    }

    #[inline]
    pub fn process(&mut self, x: f32) -> f32 {
        let y = self.prev * self.coeff + x * (1.0 - self.coeff);
        self.prev = if y.is_finite() { flush_denormal(y) } else { 0.0 };
        self.prev
    }

    pub fn coeff(&self) -> f32 {
        self.coeff
    }

    pub fn reset(&mut self) {
        self.prev = 0.0;
    }
}

#[inline]
fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1.0e-20 {
        0.0
    } else {
        x
    }
}
