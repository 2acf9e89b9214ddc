//! Benchmarks for the noise cores.

use std::hint::black_box;

use ambience_dsp::noise::Seeder;
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");
    let mut seeder = Seeder::fixed(7);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut white = seeder.white();
        group.bench_with_input(BenchmarkId::new("white_gaussian", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = white.next_gaussian();
                }
                black_box(&buffer);
            })
        });

        let mut pink = seeder.pink();
        group.bench_with_input(BenchmarkId::new("pink", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = pink.next();
                }
                black_box(&buffer);
            })
        });

        let mut brown = seeder.brown();
        group.bench_with_input(BenchmarkId::new("brown", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = brown.next();
                }
                black_box(&buffer);
            })
        });
    }

    group.finish();
}
