//! Benchmarks for `AudioGenerator::generate` across all soundscapes.

use std::hint::black_box;

use ambience_dsp::GeneratorType;
use criterion::{BenchmarkId, Criterion};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/generators");

    for kind in GeneratorType::ALL {
        for &size in BLOCK_SIZES {
            let mut generator = kind
                .create_seeded(SAMPLE_RATE, 42)
                .expect("44.1 kHz is a valid sample rate");
            let mut buffer = vec![0i16; size];

            group.bench_with_input(BenchmarkId::new(kind.name(), size), &size, |b, _| {
                b.iter(|| {
                    generator.generate(black_box(&mut buffer));
                })
            });
        }
    }

    group.finish();
}
