//! Geometric push-up phase classification.
//!
//! Three vertical relationships are measured against the shoulder line:
//! wrists, elbows and nose. Each one casts weighted votes for Up or Down, and
//! a frame is labelled once either side reaches the quorum. A single badly
//! tracked joint cannot flip the label on its own.

use crate::config::ClassifierConfig;
use crate::constants::{
    LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST, NOSE, RIGHT_ELBOW, RIGHT_SHOULDER, RIGHT_WRIST,
};
use crate::landmarks::{validate_shape, Landmark};
use crate::phase::PhaseLabel;
use crate::Result;
use log::trace;

/// Vertical offsets of the tracked joints from the mean shoulder height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseGeometry {
    /// Mean wrist y minus mean shoulder y
    pub wrist_shoulder_diff: f64,
    /// Mean elbow y minus mean shoulder y
    pub elbow_shoulder_diff: f64,
    /// Nose y minus mean shoulder y
    pub nose_shoulder_diff: f64,
}

impl PoseGeometry {
    /// Measure a landmark sequence
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFrameShape` unless there are exactly 33 landmarks
    pub fn from_landmarks(landmarks: &[Landmark]) -> Result<Self> {
        validate_shape(landmarks)?;

        let mean_y = |a: usize, b: usize| (landmarks[a].y + landmarks[b].y) / 2.0;
        let shoulder_y = mean_y(LEFT_SHOULDER, RIGHT_SHOULDER);

        Ok(Self {
            wrist_shoulder_diff: mean_y(LEFT_WRIST, RIGHT_WRIST) - shoulder_y,
            elbow_shoulder_diff: mean_y(LEFT_ELBOW, RIGHT_ELBOW) - shoulder_y,
            nose_shoulder_diff: landmarks[NOSE].y - shoulder_y,
        })
    }
}

/// Vote tallies for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorVotes {
    pub up: u32,
    pub down: u32,
}

/// Weighted-vote phase classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseClassifier {
    config: ClassifierConfig,
}

impl PhaseClassifier {
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a single frame.
    ///
    /// A sequence that is not exactly 33 landmarks long is labelled
    /// `Neutral` rather than reported as an error.
    #[must_use]
    pub fn classify(&self, landmarks: &[Landmark]) -> PhaseLabel {
        match PoseGeometry::from_landmarks(landmarks) {
            Ok(geometry) => self.decide(self.votes(&geometry)),
            Err(e) => {
                trace!("Classifying frame as neutral: {e}");
                PhaseLabel::Neutral
            }
        }
    }

    /// Tally the indicator votes for measured geometry
    #[must_use]
    pub fn votes(&self, geometry: &PoseGeometry) -> IndicatorVotes {
        let c = &self.config;
        let mut votes = IndicatorVotes::default();

        // Wrists above the shoulders is the strongest up signal
        Self::cast(
            &mut votes,
            geometry.wrist_shoulder_diff,
            (c.wrist_up_threshold, c.wrist_up_weight),
            (c.wrist_down_threshold, c.wrist_down_weight),
        );
        Self::cast(
            &mut votes,
            geometry.elbow_shoulder_diff,
            (c.elbow_up_threshold, c.elbow_weight),
            (c.elbow_down_threshold, c.elbow_weight),
        );
        Self::cast(
            &mut votes,
            geometry.nose_shoulder_diff,
            (c.nose_up_threshold, c.nose_weight),
            (c.nose_down_threshold, c.nose_weight),
        );

        votes
    }

    /// Turn vote tallies into a label. Up wins when both sides reach quorum.
    #[must_use]
    pub fn decide(&self, votes: IndicatorVotes) -> PhaseLabel {
        if votes.up >= self.config.vote_quorum {
            PhaseLabel::Up
        } else if votes.down >= self.config.vote_quorum {
            PhaseLabel::Down
        } else {
            PhaseLabel::Transition
        }
    }

    fn cast(
        votes: &mut IndicatorVotes,
        diff: f64,
        (up_below, up_weight): (f64, u32),
        (down_above, down_weight): (f64, u32),
    ) {
        if diff < up_below {
            votes.up += up_weight;
        } else if diff > down_above {
            votes.down += down_weight;
        }
    }
}
