use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use ambience_dsp::generator::WhiteNoiseGenerator;
use ambience_dsp::runtime::{RingSink, Session, SinkError};
use ambience_dsp::{create_generator, GeneratorType};

#[test]
fn stops_promptly_even_when_the_ring_is_full() {
    let generator = create_generator(GeneratorType::Forest, 44_100.0).unwrap();
    // Nobody drains the consumer, so the loop is parked inside `write`.
    let (sink, _consumer) = RingSink::with_capacity(256);
    let session = Session::start(generator, sink, 128).unwrap();
    thread::sleep(Duration::from_millis(50));

    let started = Instant::now();
    let (report, _sink) = session.stop().unwrap();
    assert!(started.elapsed() < Duration::from_secs(1));
    assert!(report.buffers_written >= 2);
    assert_eq!(report.sink_error, None);
}

#[test]
fn feeds_a_draining_consumer() {
    let generator = create_generator(GeneratorType::LofiStudy, 22_050.0).unwrap();
    let (sink, mut consumer) = RingSink::with_capacity(4_096);
    let session = Session::start(generator, sink, 512).unwrap();

    let mut received = 0usize;
    let deadline = Instant::now() + Duration::from_secs(5);
    while received < 44_100 && Instant::now() < deadline {
        match consumer.pop() {
            Ok(_) => received += 1,
            Err(_) => thread::yield_now(),
        }
    }
    let (report, _) = session.stop().unwrap();
    assert!(received >= 44_100, "only {received} samples arrived");
    assert!(report.frames_rendered >= 22_050);
}

#[test]
fn volume_changes_reach_the_generation_thread() {
    let generator = Box::new(WhiteNoiseGenerator::new(44_100.0).unwrap());
    let silent = Arc::new(AtomicBool::new(false));
    let seen = silent.clone();
    let sink = move |samples: &[i16]| -> Result<(), SinkError> {
        if samples.iter().all(|&s| s == 0) {
            seen.store(true, Ordering::Relaxed);
        }
        thread::sleep(Duration::from_millis(1));
        Ok(())
    };

    let session = Session::start(generator, sink, 256).unwrap();
    thread::sleep(Duration::from_millis(20));
    assert!(!silent.load(Ordering::Relaxed));

    let control = session.volume();
    thread::spawn(move || control.set(0.0)).join().unwrap();

    let deadline = Instant::now() + Duration::from_secs(2);
    while !silent.load(Ordering::Relaxed) && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    assert!(silent.load(Ordering::Relaxed));
    session.stop().unwrap();
}

#[test]
fn dropping_the_consumer_ends_the_session() {
    let generator = create_generator(GeneratorType::Waves, 44_100.0).unwrap();
    let (sink, consumer) = RingSink::with_capacity(1_024);
    let session = Session::start(generator, sink, 256).unwrap();
    drop(consumer);

    let deadline = Instant::now() + Duration::from_secs(2);
    while !session.is_finished() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    let (report, _) = session.stop().unwrap();
    assert_eq!(report.sink_error, Some(SinkError::Disconnected));
}
