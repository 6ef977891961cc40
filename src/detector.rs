//! Session-level push-up detector.
//!
//! Wraps a [`RepCounter`] with a frame quality gate and a clock, which is how
//! a capture loop is expected to drive the counter: one detector per tracked
//! person, one `process` call per frame.

use crate::clock::{Clock, MonotonicClock};
use crate::config::Config;
use crate::counter::{RepCounter, RepUpdate};
use crate::landmarks::{Landmark, QualityGate};
use log::debug;
use serde::{Deserialize, Serialize};

/// What happened to a frame handed to the detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FrameOutcome {
    /// Frame passed the quality gate and updated the counter
    Counted(RepUpdate),
    /// Frame was too poorly tracked; the counter was not touched
    Rejected {
        /// Mean key-landmark visibility of the frame
        quality: f64,
    },
}

impl FrameOutcome {
    /// The counter update, if the frame was counted
    #[must_use]
    pub fn update(&self) -> Option<&RepUpdate> {
        match self {
            Self::Counted(update) => Some(update),
            Self::Rejected { .. } => None,
        }
    }

    #[must_use]
    pub fn rep_completed(&self) -> bool {
        self.update().is_some_and(|u| u.rep_completed)
    }
}

/// Push-up detector for a single session
#[derive(Debug)]
pub struct PushupDetector<C: Clock = MonotonicClock> {
    counter: RepCounter,
    gate: QualityGate,
    clock: C,
}

impl PushupDetector<MonotonicClock> {
    /// Detector with default settings on the monotonic system clock
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for PushupDetector<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PushupDetector<C> {
    /// Detector with default settings on the given clock
    pub fn with_clock(clock: C) -> Self {
        Self::from_config(&Config::default(), clock)
    }

    pub fn from_config(config: &Config, clock: C) -> Self {
        Self {
            counter: RepCounter::from_config(config),
            gate: QualityGate::new(config.quality),
            clock,
        }
    }

    /// Gate a frame on tracking quality, then feed it to the counter
    pub fn process(&mut self, landmarks: &[Landmark]) -> FrameOutcome {
        if !self.gate.accepts(landmarks) {
            let quality = self.gate.quality(landmarks);
            debug!("Rejected frame with quality {quality:.2}");
            return FrameOutcome::Rejected { quality };
        }
        FrameOutcome::Counted(self.update(landmarks))
    }

    /// Feed a frame to the counter without quality gating
    pub fn update(&mut self, landmarks: &[Landmark]) -> RepUpdate {
        let now = self.clock.now();
        self.counter.update(landmarks, now)
    }

    pub fn reset(&mut self) {
        self.counter.reset();
    }

    #[must_use]
    pub fn rep_count(&self) -> u32 {
        self.counter.rep_count()
    }

    #[must_use]
    pub fn counter(&self) -> &RepCounter {
        &self.counter
    }

    #[must_use]
    pub fn gate(&self) -> &QualityGate {
        &self.gate
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
