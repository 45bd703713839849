//! Detection deduplication.
//!
//! The upstream sensor (template matching, a vision model, anything) reports
//! every match it sees in a frame. This module reduces that to one
//! `DetectionEvent` per physically played card:
//!
//! - `nms::suppress`: same-frame, same-card suppression within a radius
//! - `CooldownMap`: cross-frame suppression per (card, grid cell)
//! - `Deduplicator`: the full pipeline plus counters

pub mod candidate;
pub mod cooldown;
pub mod deduplicator;
pub mod nms;

pub use candidate::{Candidate, DetectionEvent, Position};
pub use cooldown::{CooldownMap, GridCell};
pub use deduplicator::{DedupStats, Deduplicator};
