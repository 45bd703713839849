//! Sensor that replays a prepared queue.

use std::collections::VecDeque;

use super::CardSensor;
use crate::core::Timestamp;
use crate::detection::Candidate;
use crate::error::{Result, ScoutError};

#[derive(Clone, Debug)]
enum Step {
    Frame(Vec<Candidate>),
    Failure(String),
}

/// Returns queued frames in order, then empty frames forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSensor {
    steps: VecDeque<Step>,
    polls: usize,
}

impl ScriptedSensor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a frame.
    #[must_use]
    pub fn with_frame(mut self, candidates: Vec<Candidate>) -> Self {
        self.steps.push_back(Step::Frame(candidates));
        self
    }

    /// Queue a poll that fails.
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.steps.push_back(Step::Failure(message.into()));
        self
    }

    /// Steps not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    /// Number of times `poll` has been called.
    #[must_use]
    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl CardSensor for ScriptedSensor {
    fn name(&self) -> &str {
        "scripted"
    }

    fn poll(&mut self, _now: Timestamp) -> Result<Vec<Candidate>> {
        self.polls += 1;
        match self.steps.pop_front() {
            Some(Step::Frame(candidates)) => Ok(candidates),
            Some(Step::Failure(message)) => Err(ScoutError::Sensor(message)),
            None => Ok(Vec::new()),
        }
    }
}
