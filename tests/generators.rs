use ambience_dsp::generator::{LofiGenerator, RainGenerator, WhiteNoiseGenerator};
use ambience_dsp::{create_generator, AudioGenerator, GeneratorError, GeneratorType, MAX_SAMPLE_RATE};

const SAMPLE_RATE: f32 = 44_100.0;

/// `to_pcm16` never produces `i16::MIN`, so any survivor was never written.
const SENTINEL: i16 = i16::MIN;

fn rms(samples: &[i16]) -> f32 {
    let sum: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum / samples.len() as f64).sqrt() as f32
}

fn render_chunked(generator: &mut dyn AudioGenerator, total: usize, chunks: &[usize]) -> Vec<i16> {
    let mut out = Vec::with_capacity(total);
    let mut sizes = chunks.iter().cycle();
    while out.len() < total {
        let len = (*sizes.next().unwrap()).min(total - out.len());
        let mut buffer = vec![SENTINEL; len];
        assert_eq!(generator.generate(&mut buffer), len);
        out.extend_from_slice(&buffer);
    }
    out
}

#[test]
fn every_generator_fills_every_buffer_size() {
    for kind in GeneratorType::ALL {
        let mut generator = create_generator(kind, SAMPLE_RATE).unwrap();
        for len in [0, 1, 2, 63, 64, 512, 1_024, 4_410] {
            let mut buffer = vec![SENTINEL; len];
            assert_eq!(generator.generate(&mut buffer), len, "{kind}");
            assert!(
                buffer.iter().all(|&s| s != SENTINEL),
                "{kind} left part of a {len}-sample buffer unwritten"
            );
        }
    }
}

#[test]
fn volume_is_clamped_and_idempotent() {
    for kind in GeneratorType::ALL {
        let generator = create_generator(kind, SAMPLE_RATE).unwrap();
        generator.set_volume(2.0);
        assert_eq!(generator.volume(), 1.0);
        generator.set_volume(-0.5);
        assert_eq!(generator.volume(), 0.0);
        generator.set_volume(f32::NAN);
        assert_eq!(generator.volume(), 0.0);
        generator.set_volume(0.4);
        generator.set_volume(0.4);
        assert_eq!(generator.volume(), 0.4);
    }
}

#[test]
fn zero_volume_is_silence_from_the_next_call() {
    for kind in GeneratorType::ALL {
        let mut generator = create_generator(kind, SAMPLE_RATE).unwrap();
        generator.set_volume(1.0);
        let mut buffer = vec![0i16; 4_096];
        generator.generate(&mut buffer);

        generator.set_volume(0.0);
        generator.generate(&mut buffer);
        assert!(buffer.iter().all(|&s| s == 0), "{kind}");
    }
}

#[test]
fn white_noise_level_at_half_volume() {
    let mut generator = WhiteNoiseGenerator::new(SAMPLE_RATE).unwrap();
    generator.set_volume(0.5);
    let mut buffer = vec![0i16; 4_410];
    assert_eq!(generator.generate(&mut buffer), 4_410);

    // One-pole output RMS ≈ 0.285, soft clip ≈ 0.28, × 0.3 × 0.5 full scale.
    let level = rms(&buffer);
    assert!((800.0..1_800.0).contains(&level), "rms {level}");
    let limit = (0.3 * 0.5 * i16::MAX as f32) as i16 + 1;
    assert!(buffer.iter().all(|s| s.abs() <= limit));
}

#[test]
fn output_does_not_depend_on_chunking() {
    let total = 20_001;
    for kind in GeneratorType::ALL {
        let mut whole = kind.create_seeded(SAMPLE_RATE, 99).unwrap();
        let mut pieces = kind.create_seeded(SAMPLE_RATE, 99).unwrap();

        let expected = render_chunked(whole.as_mut(), total, &[total]);
        let actual = render_chunked(pieces.as_mut(), total, &[1, 7, 64, 333, 2, 1_023]);
        assert_eq!(expected, actual, "{kind} changed with buffer size");
        assert_eq!(whole.frames_rendered(), pieces.frames_rendered());
    }
}

#[test]
fn lofi_pattern_holds_for_any_buffer_size() {
    // 75 BPM at 8 kHz: 3200 frames per eighth, 25600 per bar.
    let sample_rate = 8_000.0;
    let bars = 4;
    let samples = 25_600 * 2 * bars;

    let cases: [&[usize]; 4] = [&[4_096], &[1, 333, 17], &[3_200], &[6_399, 2]];
    for chunks in cases {
        let mut lofi = LofiGenerator::with_seed(sample_rate, 5).unwrap();
        render_chunked(&mut lofi, samples, chunks);
        let counts = lofi.drum_counts();
        assert_eq!(counts.kicks, 2 * bars as u64, "chunks {chunks:?}");
        assert_eq!(counts.snares, 2 * bars as u64, "chunks {chunks:?}");
        assert_eq!(counts.hats, 8 * bars as u64, "chunks {chunks:?}");
    }
}

#[test]
fn rain_intensity_starts_at_base() {
    let rain = RainGenerator::with_seed(SAMPLE_RATE, 3).unwrap();
    assert!((rain.intensity() - 0.7).abs() < 1e-6);
}

#[test]
fn separate_instances_never_share_state() {
    let mut a = create_generator(GeneratorType::Rain, SAMPLE_RATE).unwrap();
    let mut b = create_generator(GeneratorType::Rain, SAMPLE_RATE).unwrap();
    let mut first = vec![0i16; 2_048];
    let mut second = vec![0i16; 2_048];
    a.generate(&mut first);
    b.generate(&mut second);
    assert_ne!(first, second);
    assert_eq!(b.frames_rendered(), 1_024);
}

#[test]
fn sample_rates_above_the_ceiling_are_rejected_up_front() {
    for kind in GeneratorType::ALL {
        for rate in [MAX_SAMPLE_RATE + 1.0, 1.0e12] {
            assert_eq!(
                create_generator(kind, rate).err(),
                Some(GeneratorError::InvalidSampleRate(rate)),
                "{kind} at {rate} Hz"
            );
        }

        let mut generator = create_generator(kind, MAX_SAMPLE_RATE).unwrap();
        let mut buffer = vec![SENTINEL; 1_024];
        assert_eq!(generator.generate(&mut buffer), 1_024, "{kind}");
        assert!(buffer.iter().all(|&s| s != SENTINEL), "{kind}");
    }
}
