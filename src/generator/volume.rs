use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Default level for a new generator.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Shared output level, stored as the bit pattern of an `f32`.
///
/// Writers and the render thread only ever do single relaxed loads and
/// stores, so a change shows up within a buffer or so and the audio path
/// never takes a lock.
#[derive(Debug, Clone)]
pub struct VolumeControl {
    bits: Arc<AtomicU32>,
}

impl VolumeControl {
    pub fn new(volume: f32) -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(sanitize(volume).to_bits())),
        }
    }

    /// Store a new level, clamped to `[0, 1]`. NaN is treated as 0.
    pub fn set(&self, volume: f32) {
        self.bits.store(sanitize(volume).to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Add `delta` to the current level (clamped).
    pub fn nudge(&self, delta: f32) -> f32 {
        let volume = sanitize(self.get() + delta);
        self.set(volume);
        volume
    }
}

impl Default for VolumeControl {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME)
    }
}

#[inline]
fn sanitize(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}
