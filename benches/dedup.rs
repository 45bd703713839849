use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use royale_scout::{Candidate, DetectionConfig, Deduplicator, NoiseRng, Position, Timestamp};

/// A busy frame: `cards` plays, each reported three times, plus clutter.
fn noisy_frame(rng: &mut NoiseRng, cards: usize) -> Vec<Candidate> {
    const NAMES: [&str; 8] = [
        "knight", "archers", "fireball", "zap", "giant", "musketeer", "minions", "hog_rider",
    ];
    let mut frame = Vec::with_capacity(cards * 3 + 4);
    for i in 0..cards {
        let anchor = Position::new(25.0 + 50.0 * (i % 14) as f32, 25.0 + 50.0 * (i / 14) as f32);
        for _ in 0..3 {
            let (dx, dy) = rng.jitter(6.0);
            let confidence = rng.gen_f32(0.6, 0.95);
            frame.push(Candidate::new(NAMES[i % NAMES.len()], anchor, confidence).translated(dx, dy));
        }
    }
    for _ in 0..4 {
        let position = Position::new(rng.gen_f32(0.0, 720.0), rng.gen_f32(0.0, 1280.0));
        frame.push(Candidate::new("goblins", position, rng.gen_f32(0.1, 0.45)));
    }
    frame
}

fn processing_frames(c: &mut Criterion) {
    let mut rng = NoiseRng::new(11);
    let frames: Vec<Vec<Candidate>> = (0..64).map(|i| noisy_frame(&mut rng, 1 + i % 6)).collect();

    c.bench_function("dedup 64 noisy frames", |b| {
        b.iter(|| {
            let mut dedup = Deduplicator::new(DetectionConfig::default());
            let mut emitted = 0;
            for (i, frame) in frames.iter().enumerate() {
                let now = Timestamp::new(Duration::from_millis(200 * i as u64));
                emitted += dedup.process(frame.clone(), now).len();
            }
            black_box(emitted)
        })
    });
}

fn suppressing_crowded_frame(c: &mut Criterion) {
    let mut rng = NoiseRng::new(5);
    let frame = noisy_frame(&mut rng, 40);

    c.bench_function("nms on a 124-candidate frame", |b| {
        b.iter(|| royale_scout::detection::nms::suppress(black_box(frame.clone()), 30.0).len())
    });
}

criterion_group!(benches, processing_frames, suppressing_crowded_frame);
criterion_main!(benches);
