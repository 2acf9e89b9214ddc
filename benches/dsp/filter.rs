//! Benchmarks for the biquad and one-pole filters.

use std::hint::black_box;

use ambience_dsp::dsp::{filter::Q_BUTTERWORTH, BiquadFilter, OnePoleFilter};
use criterion::{BenchmarkId, Criterion};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Sawtooth-like ramp
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        let mut filter = BiquadFilter::lowpass(SAMPLE_RATE, 1_000.0, Q_BUTTERWORTH);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer));
            })
        });

        let mut filter = BiquadFilter::bandpass(SAMPLE_RATE, 3_000.0, 0.7);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("bandpass", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer));
            })
        });

        // Swept: coefficients recomputed every 16 samples, as the wind and
        // wave layers do
        let mut filter = BiquadFilter::bandpass(SAMPLE_RATE, 2_000.0, 0.9);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("bandpass_swept", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                for (i, chunk) in buffer.chunks_mut(16).enumerate() {
                    filter.set_cutoff(1_000.0 + 100.0 * (i % 20) as f32, 0.9);
                    filter.render(black_box(chunk));
                }
            })
        });

        let mut filter = OnePoleFilter::new(0.85);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("one_pole", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                for sample in buffer.iter_mut() {
                    *sample = filter.process(black_box(*sample));
                }
            })
        });
    }

    group.finish();
}
