//! Stereo frames, interpolation and panning.

use std::f32::consts::FRAC_PI_4;
use std::ops::{Add, AddAssign, Mul};

/*
Panning
=======

Layers are mostly rendered mono (one bird call, one leaf, one crackle) and
then placed in the stereo field. We use an equal-power pan law so that a
sound gliding across the field does not dip in loudness at the centre:

    angle = (position + 1) · π/4          position ∈ [-1, +1]
    left  = x · cos(angle)
    right = x · sin(angle)

    position   left    right
    -1.0       1.000   0.000
     0.0       0.707   0.707
    +1.0       0.000   1.000

left² + right² is always x², so perceived power stays constant.
*/

/// One stereo sample pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    pub left: f32,
    pub right: f32,
}

impl Frame {
    pub const SILENCE: Frame = Frame {
        left: 0.0,
        right: 0.0,
    };

    pub fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Same value on both channels.
    pub fn mono(sample: f32) -> Self {
        Self {
            left: sample,
            right: sample,
        }
    }

    /// Apply `f` to both channels.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            left: f(self.left),
            right: f(self.right),
        }
    }
}

impl Add for Frame {
    type Output = Frame;

    fn add(self, rhs: Frame) -> Frame {
        Frame {
            left: self.left + rhs.left,
            right: self.right + rhs.right,
        }
    }
}

impl AddAssign for Frame {
    fn add_assign(&mut self, rhs: Frame) {
        self.left += rhs.left;
        self.right += rhs.right;
    }
}

impl Mul<f32> for Frame {
    type Output = Frame;

    fn mul(self, gain: f32) -> Frame {
        Frame {
            left: self.left * gain,
            right: self.right * gain,
        }
    }
}

/// Linear interpolation: `a + (b - a)·t`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Equal-power gains for `position` in [-1, 1] (clamped).
#[inline]
pub fn pan_gains(position: f32) -> (f32, f32) {
    let position = if position.is_finite() {
        position.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let angle = (position + 1.0) * FRAC_PI_4;
    let (sin, cos) = angle.sin_cos();
    (cos, sin)
}

/// Place a mono sample in the stereo field.
#[inline]
pub fn pan(sample: f32, position: f32) -> Frame {
    let (left, right) = pan_gains(position);
    Frame::new(sample * left, sample * right)
}
