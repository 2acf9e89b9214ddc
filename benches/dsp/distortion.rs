//! Benchmarks for soft clipping and PCM conversion.

use std::hint::black_box;

use ambience_dsp::dsp::{soft_clip, to_pcm16};
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    for &size in BLOCK_SIZES {
        // Ramp from -2 to +2 so the curve is exercised past its knee
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 4.0 - 2.0)
            .collect();

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("soft_clip", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                for sample in black_box(&mut buffer).iter_mut() {
                    *sample = soft_clip(*sample);
                }
            })
        });

        let mut pcm = vec![0i16; size];
        group.bench_with_input(BenchmarkId::new("to_pcm16", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in pcm.iter_mut().zip(&input) {
                    *out = to_pcm16(black_box(x));
                }
                black_box(&pcm);
            })
        });
    }

    group.finish();
}
