//! Per-identity non-maximum suppression.
//!
//! Suppression is scoped to one card identity: two different cards can
//! legitimately overlap on screen, but two hits of the same card within the
//! radius are the same object.

use super::candidate::Candidate;

/// Keep at most one candidate per object.
///
/// Candidates are visited by confidence, highest first; ties keep input
/// order (stable sort). A candidate is dropped when an already-kept
/// candidate of the same card lies strictly closer than `radius`.
#[must_use]
pub fn suppress(mut candidates: Vec<Candidate>, radius: f32) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let mut kept: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let duplicate = kept.iter().any(|k| {
            k.card == candidate.card && k.position.distance(candidate.position) < radius
        });
        if !duplicate {
            kept.push(candidate);
        }
    }
    kept
}
