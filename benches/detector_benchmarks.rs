//! Benchmarks for the full per-frame counting path

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pushup_counter::{
    clock::ManualClock,
    constants::{LEFT_ELBOW, LEFT_WRIST, NOSE, NUM_BODY_LANDMARKS, RIGHT_ELBOW, RIGHT_WRIST},
    counter::RepCounter,
    detector::PushupDetector,
    landmarks::Landmark,
};
use std::time::Duration;

/// Simulated push-up session: joints oscillate around the shoulder line at 30 FPS
fn session(frames: usize) -> Vec<Vec<Landmark>> {
    (0..frames)
        .map(|i| {
            let t = i as f64 / 30.0;
            // One rep every two seconds, plus tracking noise
            let depth = (t * std::f64::consts::PI).sin();
            let noise = 0.01 * (rand::random::<f64>() - 0.5);
            let mut frame = vec![Landmark::new(0.5, 0.5, 0.9); NUM_BODY_LANDMARKS];
            for idx in [LEFT_WRIST, RIGHT_WRIST] {
                frame[idx].y = 0.5 + 0.25 * depth + noise;
            }
            for idx in [LEFT_ELBOW, RIGHT_ELBOW] {
                frame[idx].y = 0.5 + 0.1 * depth + noise;
            }
            frame[NOSE].y = 0.5 + 0.15 * depth + noise;
            frame
        })
        .collect()
}

fn benchmark_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("rep_counter");
    let frames = session(300);
    let mut counter = RepCounter::new();

    group.bench_function("single_update", |b| {
        let mut t = Duration::ZERO;
        b.iter(|| {
            t += Duration::from_millis(33);
            black_box(counter.update(black_box(&frames[0]), t))
        });
    });

    group.bench_function("session_300_frames", |b| {
        b.iter(|| {
            counter.reset();
            for (i, frame) in frames.iter().enumerate() {
                let now = Duration::from_millis(33 * i as u64);
                black_box(counter.update(black_box(frame), now));
            }
        });
    });

    group.finish();
}

fn benchmark_detector(c: &mut Criterion) {
    let frames = session(300);
    let mut detector = PushupDetector::with_clock(ManualClock::new());

    c.bench_function("detector_process_300_frames", |b| {
        b.iter(|| {
            detector.reset();
            detector.clock().set(Duration::ZERO);
            for frame in &frames {
                detector.clock().advance(Duration::from_millis(33));
                black_box(detector.process(black_box(frame)));
            }
        });
    });
}

criterion_group!(benches, benchmark_counter, benchmark_detector);
criterion_main!(benches);
