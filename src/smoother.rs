//! Short-window majority voting over raw phase labels.

use crate::config::SmoothingConfig;
use crate::phase::PhaseLabel;
use crate::ring_buffer::RingBuffer;

/// Stabilizes noisy per-frame labels.
///
/// Keeps the last `window_capacity` raw labels. Once `vote_span` labels have
/// been seen, the most frequent label among the newest `vote_span` wins; ties
/// go to whichever tied label was observed most recently. Until then the raw
/// label passes through unchanged.
#[derive(Debug, Clone)]
pub struct PhaseSmoother {
    window: RingBuffer<PhaseLabel>,
    vote_span: usize,
}

impl PhaseSmoother {
    #[must_use]
    pub fn new(config: SmoothingConfig) -> Self {
        Self {
            window: RingBuffer::new(config.window_capacity),
            vote_span: config.vote_span.max(1),
        }
    }

    /// Record a raw label and return the smoothed one
    pub fn apply(&mut self, raw: PhaseLabel) -> PhaseLabel {
        self.window.push(raw);

        if self.window.len() < self.vote_span {
            return raw;
        }

        Self::majority(self.window.iter_last(self.vote_span)).unwrap_or(raw)
    }

    /// Most frequent label, ties broken in favour of the latest occurrence
    fn majority(labels: impl Iterator<Item = PhaseLabel>) -> Option<PhaseLabel> {
        // (label, count, position of latest occurrence)
        let mut tally: Vec<(PhaseLabel, usize, usize)> = Vec::with_capacity(4);
        for (position, label) in labels.enumerate() {
            match tally.iter_mut().find(|(seen, _, _)| *seen == label) {
                Some(entry) => {
                    entry.1 += 1;
                    entry.2 = position;
                }
                None => tally.push((label, 1, position)),
            }
        }

        tally
            .into_iter()
            .max_by_key(|&(_, count, latest)| (count, latest))
            .map(|(label, _, _)| label)
    }

    /// Raw labels currently held, oldest first
    #[must_use]
    pub fn window(&self) -> Vec<PhaseLabel> {
        self.window.to_vec()
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }
}

impl Default for PhaseSmoother {
    fn default() -> Self {
        Self::new(SmoothingConfig::default())
    }
}
