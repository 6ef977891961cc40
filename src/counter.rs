//! Repetition state machine.
//!
//! The counter is a pattern matcher over a rolling history of smoothed
//! labels. A rep completes when the newest label is `Up`, a `Down` appears
//! earlier in the inspected span, and the span changes label often enough to
//! rule out two-frame flicker. A debounce interval separates counted reps,
//! and the history is cleared on every completion so the same movement is
//! never counted twice.

use crate::classifier::PhaseClassifier;
use crate::config::{Config, RepConfig};
use crate::landmarks::Landmark;
use crate::phase::PhaseLabel;
use crate::ring_buffer::RingBuffer;
use crate::smoother::PhaseSmoother;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result record produced for every frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepUpdate {
    /// Smoothed phase for this frame
    pub phase: PhaseLabel,
    /// Reps counted so far in the session
    pub rep_count: u32,
    /// Whether this frame completed a rep
    pub rep_completed: bool,
    /// Rep history after this frame, oldest first
    pub history: Vec<PhaseLabel>,
}

/// Per-session detector state
#[derive(Debug, Clone)]
pub struct RepCounter {
    classifier: PhaseClassifier,
    smoother: PhaseSmoother,
    config: RepConfig,
    min_rep_interval: Duration,
    current_phase: PhaseLabel,
    last_phase: PhaseLabel,
    rep_history: RingBuffer<PhaseLabel>,
    rep_count: u32,
    last_rep_time: Option<Duration>,
}

impl RepCounter {
    /// Create a counter with the default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Create a counter from a configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            classifier: PhaseClassifier::new(config.classifier),
            smoother: PhaseSmoother::new(config.smoothing),
            config: config.reps,
            min_rep_interval: config.reps.min_rep_interval(),
            current_phase: PhaseLabel::Neutral,
            last_phase: PhaseLabel::Neutral,
            rep_history: RingBuffer::new(config.reps.history_capacity),
            rep_count: 0,
            last_rep_time: None,
        }
    }

    /// Feed one frame observed at `now` (elapsed time on a monotonic clock).
    ///
    /// Malformed frames are deliberately tolerated: a landmark sequence of
    /// the wrong length is classified `Neutral` and simply fails to advance
    /// the rep pattern. This never fails.
    pub fn update(&mut self, landmarks: &[Landmark], now: Duration) -> RepUpdate {
        let raw = self.classifier.classify(landmarks);
        let smoothed = self.smoother.apply(raw);
        self.advance(smoothed, now)
    }

    /// Push an already smoothed label and evaluate rep completion
    pub fn advance(&mut self, phase: PhaseLabel, now: Duration) -> RepUpdate {
        self.last_phase = self.current_phase;
        self.current_phase = phase;
        self.rep_history.push(phase);

        let rep_completed = self.check_rep_completion(now);
        if rep_completed {
            self.count_rep(now);
        } else if self.last_phase != self.current_phase {
            debug!("Phase {} -> {}", self.last_phase, self.current_phase);
        }

        RepUpdate {
            phase,
            rep_count: self.rep_count,
            rep_completed,
            history: self.rep_history.to_vec(),
        }
    }

    fn check_rep_completion(&self, now: Duration) -> bool {
        if self.rep_history.len() < self.config.min_history {
            return false;
        }

        // Clock readings that go backwards are treated as zero elapsed time
        if let Some(last) = self.last_rep_time {
            if now.saturating_sub(last) < self.min_rep_interval {
                return false;
            }
        }

        let recent: Vec<PhaseLabel> = self.rep_history.iter_last(self.config.inspect_span).collect();
        let Some((&newest, earlier)) = recent.split_last() else {
            return false;
        };

        let has_down = earlier.contains(&PhaseLabel::Down);
        let is_up_now = newest == PhaseLabel::Up;
        if !(has_down && is_up_now) {
            return false;
        }

        Self::count_transitions(&recent) >= self.config.min_transitions
    }

    /// Number of adjacent label changes
    fn count_transitions(labels: &[PhaseLabel]) -> usize {
        labels.windows(2).filter(|pair| pair[0] != pair[1]).count()
    }

    fn count_rep(&mut self, now: Duration) {
        self.rep_count += 1;
        self.last_rep_time = Some(now);
        self.rep_history.clear();
        info!("Rep {} completed at {:.2}s", self.rep_count, now.as_secs_f64());
    }

    /// Clear counters and histories, keeping configuration
    pub fn reset(&mut self) {
        self.rep_count = 0;
        self.current_phase = PhaseLabel::Neutral;
        self.last_phase = PhaseLabel::Neutral;
        self.rep_history.clear();
        self.smoother.reset();
        self.last_rep_time = None;
        info!("Rep counter reset");
    }

    #[must_use]
    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    #[must_use]
    pub fn current_phase(&self) -> PhaseLabel {
        self.current_phase
    }

    #[must_use]
    pub fn last_phase(&self) -> PhaseLabel {
        self.last_phase
    }

    /// Time of the last counted rep, `None` until the first one
    #[must_use]
    pub fn last_rep_time(&self) -> Option<Duration> {
        self.last_rep_time
    }

    /// Smoothed labels since the last rep, oldest first
    #[must_use]
    pub fn rep_history(&self) -> Vec<PhaseLabel> {
        self.rep_history.to_vec()
    }

    /// Raw labels held by the smoother, oldest first
    #[must_use]
    pub fn smoothing_window(&self) -> Vec<PhaseLabel> {
        self.smoother.window()
    }

    #[must_use]
    pub fn min_rep_interval(&self) -> Duration {
        self.min_rep_interval
    }
}

impl Default for RepCounter {
    fn default() -> Self {
        Self::new()
    }
}
