//! Soft clipping and the final float-to-PCM16 stage.
//!
//! Every generator sums several layers whose peaks can overlap (a thunder
//! swell under a burst of raindrops, a kick under a chord change). Instead of
//! hard clipping those peaks we run the mix through `tanh`, which is close to
//! linear for small signals and bends smoothly towards ±1 as the signal grows:
//!
//!   input   0.10 → 0.0997
//!   input   0.50 → 0.462
//!   input   1.00 → 0.762
//!   input   3.00 → 0.995
//!
//! The PCM stage afterwards is a plain hard clamp. By then the signal is
//! already bounded, so the clamp only exists so that a NaN or an out-of-range
//! float can never leak into the device buffer.

/// Smooth tanh limiter, output in (-1, 1).
#[inline]
pub fn soft_clip(sample: f32) -> f32 {
    sample.tanh()
}

/// Convert a float sample to PCM16. NaN becomes silence and anything outside
/// [-1, 1] is clamped.
#[inline]
pub fn to_pcm16(sample: f32) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}
