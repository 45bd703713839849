//! Detection deduplication pipeline tests.
//!
//! Frames here look like what a recognizer reports while a card is on
//! screen: several overlapping hits per frame, repeated frame after frame.

use std::time::Duration;

use royale_scout::{
    Candidate, CardSensor, DetectionConfig, Deduplicator, Position, ScriptedSensor,
    SyntheticSensor, Timestamp,
};

fn hit(card: &str, x: f32, y: f32, confidence: f32) -> Candidate {
    Candidate::new(card, Position::new(x, y), confidence)
}

fn at(millis: u64) -> Timestamp {
    Timestamp::from_millis(millis)
}

// =============================================================================
// Single frame
// =============================================================================

/// Overlapping hits of one card collapse to the most confident one.
#[test]
fn test_overlapping_hits_collapse() {
    let mut dedup = Deduplicator::new(DetectionConfig::default());
    let events = dedup.process(
        vec![
            hit("knight", 120.0, 130.0, 0.70),
            hit("knight", 125.0, 128.0, 0.92),
            hit("knight", 118.0, 135.0, 0.81),
        ],
        at(0),
    );

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].card.as_str(), "knight");
    assert_eq!(events[0].confidence, 0.92);
    assert_eq!(events[0].detected_at, at(0));
}

/// Different cards in the same place are both reported.
#[test]
fn test_distinct_cards_survive() {
    let mut dedup = Deduplicator::new(DetectionConfig::default());
    let events = dedup.process(
        vec![hit("knight", 120.0, 130.0, 0.9), hit("zap", 122.0, 131.0, 0.8)],
        at(0),
    );
    assert_eq!(events.len(), 2);
}

/// Low-confidence and malformed candidates never become events.
#[test]
fn test_threshold_and_validation() {
    let mut dedup = Deduplicator::new(DetectionConfig::default());
    let events = dedup.process(
        vec![
            hit("knight", 100.0, 100.0, 0.54),
            hit("zap", f32::NAN, 100.0, 0.9),
            hit("golem", 300.0, 300.0, 1.5),
            hit("", 200.0, 200.0, 0.9),
        ],
        at(0),
    );

    assert!(events.is_empty());
    let stats = dedup.stats();
    assert_eq!(stats.below_threshold, 1);
    assert_eq!(stats.malformed, 3);
    assert_eq!(stats.emitted, 0);
}

/// The threshold is inclusive.
#[test]
fn test_threshold_inclusive() {
    let mut dedup = Deduplicator::new(DetectionConfig::default().with_min_confidence(0.6));
    assert_eq!(dedup.process(vec![hit("knight", 10.0, 10.0, 0.6)], at(0)).len(), 1);
}

/// A per-call threshold overrides the configured one.
#[test]
fn test_explicit_threshold() {
    let mut dedup = Deduplicator::new(DetectionConfig::default());
    let frame = vec![hit("knight", 10.0, 10.0, 0.7)];
    assert!(dedup.process_with_threshold(frame, 0.8, at(0)).is_empty());
}

// =============================================================================
// Across frames
// =============================================================================

/// A card that stays on screen is reported once per cooldown window.
#[test]
fn test_cooldown_across_frames() {
    let mut dedup = Deduplicator::new(DetectionConfig::default());
    let mut emitted = 0;
    for frame in 0..10 {
        let events = dedup.process(vec![hit("knight", 120.0, 130.0, 0.9)], at(frame * 200));
        emitted += events.len();
    }
    assert_eq!(emitted, 1);
    assert_eq!(dedup.stats().cooling, 9);

    // Window elapsed: the same card in the same place counts again.
    assert_eq!(dedup.process(vec![hit("knight", 120.0, 130.0, 0.9)], at(2000)).len(), 1);
}

/// The same card in another grid cell is a separate play.
#[test]
fn test_cooldown_is_per_cell() {
    let mut dedup = Deduplicator::new(DetectionConfig::default());
    assert_eq!(dedup.process(vec![hit("knight", 120.0, 130.0, 0.9)], at(0)).len(), 1);
    assert_eq!(dedup.process(vec![hit("knight", 420.0, 130.0, 0.9)], at(200)).len(), 1);
}

/// Clearing forgets cooldowns; stale entries are pruned as time passes.
#[test]
fn test_clear_and_prune() {
    let mut dedup = Deduplicator::new(DetectionConfig::default().with_cooldown(Duration::from_secs(1)));
    dedup.process(vec![hit("knight", 10.0, 10.0, 0.9)], at(0));
    dedup.clear();
    assert_eq!(dedup.process(vec![hit("knight", 10.0, 10.0, 0.9)], at(100)).len(), 1);

    assert_eq!(dedup.cooldown_entries(), 1);
    assert_eq!(dedup.prune(at(600)), 0);
    assert_eq!(dedup.prune(at(5000)), 1);
    assert_eq!(dedup.cooldown_entries(), 0);
}

// =============================================================================
// With sensors
// =============================================================================

/// A noisy synthetic match yields exactly one event per scripted play.
#[test]
fn test_synthetic_match_one_event_per_play() {
    let mut sensor = SyntheticSensor::new(21)
        .with_play(at(500), "hog_rider", Position::new(125.0, 225.0))
        .with_play(at(3500), "musketeer", Position::new(375.0, 575.0))
        .with_play(at(6500), "hog_rider", Position::new(125.0, 225.0))
        .with_play(at(9500), "zap", Position::new(625.0, 75.0))
        .with_jitter(6.0)
        .with_linger(Duration::from_millis(800))
        .with_clutter(0.5, vec!["goblins".into(), "archers".into()]);

    let mut dedup = Deduplicator::new(DetectionConfig::default());
    let mut cards = Vec::new();
    for step in 0..60 {
        let now = at(step * 200);
        let frame = sensor.poll(now).unwrap();
        for event in dedup.process(frame, now) {
            cards.push(event.card.to_string());
        }
    }

    assert_eq!(cards, ["hog_rider", "musketeer", "hog_rider", "zap"]);
    assert!(dedup.stats().candidates > 4);
}

/// Scripted frames pass through unchanged apart from deduplication.
#[test]
fn test_scripted_frames() {
    let mut sensor = ScriptedSensor::new()
        .with_frame(vec![hit("knight", 10.0, 10.0, 0.9), hit("knight", 12.0, 11.0, 0.8)])
        .with_frame(vec![hit("knight", 11.0, 10.0, 0.95)]);
    let mut dedup = Deduplicator::new(DetectionConfig::default());

    let first = dedup.process(sensor.poll(at(0)).unwrap(), at(0));
    let second = dedup.process(sensor.poll(at(200)).unwrap(), at(200));
    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}
