//! Benchmarks for DSP primitives and full soundscapes.
//!
//! Run with: cargo bench
//!
//! The generation loop must refill each buffer faster than the device drains
//! it. Deadlines at 44.1 kHz stereo (samples are interleaved, so a buffer of
//! N samples holds N/2 frames):
//!   - 64 samples   = 0.73ms
//!   - 256 samples  = 2.90ms
//!   - 1024 samples = 11.61ms
//!
//! Benchmark groups:
//!   - dsp/*        Filters, noise cores, shaping
//!   - scenarios/*  `generate` for every soundscape

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

pub const SAMPLE_RATE: f32 = 44_100.0;

/// Buffer sizes in interleaved samples.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

criterion_group!(
    benches,
    // Low-level DSP primitives
    dsp::bench_filter,
    dsp::bench_noise,
    dsp::bench_distortion,
    // Whole generators
    scenarios::bench_generators,
);
criterion_main!(benches);
