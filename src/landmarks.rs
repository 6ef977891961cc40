//! Body landmark frames and frame quality scoring.
//!
//! The pose model emits 33 normalized landmarks per frame, with the origin at
//! the top-left of the image and y growing downward. Only frames with exactly
//! that many points are ever interpreted geometrically.

use crate::config::QualityConfig;
use crate::constants::{KEY_BODY_LANDMARKS, NUM_BODY_LANDMARKS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single tracked body keypoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized horizontal position (0.0-1.0)
    pub x: f64,
    /// Normalized vertical position (0.0-1.0), growing downward
    pub y: f64,
    /// Visibility/confidence reported by the pose model (0.0-1.0)
    #[serde(default = "full_visibility")]
    pub visibility: f64,
}

fn full_visibility() -> f64 {
    1.0
}

impl Landmark {
    #[must_use]
    pub const fn new(x: f64, y: f64, visibility: f64) -> Self {
        Self { x, y, visibility }
    }
}

impl From<(f64, f64)> for Landmark {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y, full_visibility())
    }
}

/// Check that a landmark sequence has the shape the pose model emits
///
/// # Errors
///
/// Returns `Error::InvalidFrameShape` if the sequence does not hold exactly
/// 33 landmarks
pub fn validate_shape(landmarks: &[Landmark]) -> Result<()> {
    if landmarks.len() == NUM_BODY_LANDMARKS {
        Ok(())
    } else {
        Err(Error::InvalidFrameShape {
            expected: NUM_BODY_LANDMARKS,
            actual: landmarks.len(),
        })
    }
}

/// A structurally valid frame of exactly 33 landmarks
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkFrame {
    landmarks: Vec<Landmark>,
}

impl LandmarkFrame {
    /// Validate and wrap a landmark sequence
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFrameShape` if the sequence does not hold exactly
    /// 33 landmarks
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self> {
        validate_shape(&landmarks)?;
        Ok(Self { landmarks })
    }

    /// Build a frame from bare `(x, y)` points, treating every point as fully visible
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFrameShape` if there are not exactly 33 points
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        Self::new(points.iter().copied().map(Landmark::from).collect())
    }

    /// Landmark at a model index, if it exists
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Landmark] {
        &self.landmarks
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Landmark> {
        self.landmarks
    }
}

impl AsRef<[Landmark]> for LandmarkFrame {
    fn as_ref(&self) -> &[Landmark] {
        &self.landmarks
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkFrame {
    type Error = Error;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self> {
        Self::new(landmarks)
    }
}

/// Rejects frames whose key landmarks are too poorly tracked to classify
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityGate {
    config: QualityConfig,
}

impl QualityGate {
    #[must_use]
    pub fn new(config: QualityConfig) -> Self {
        Self { config }
    }

    /// Mean visibility of the key body landmarks, or 0.0 for a malformed frame
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // 12 landmarks
    pub fn quality(&self, landmarks: &[Landmark]) -> f64 {
        if validate_shape(landmarks).is_err() {
            return 0.0;
        }
        let total: f64 = KEY_BODY_LANDMARKS.iter().map(|&i| landmarks[i].visibility).sum();
        total / KEY_BODY_LANDMARKS.len() as f64
    }

    /// Whether enough key landmarks are individually visible
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn is_pose_visible(&self, landmarks: &[Landmark]) -> bool {
        if validate_shape(landmarks).is_err() {
            return false;
        }
        let visible = KEY_BODY_LANDMARKS
            .iter()
            .filter(|&&i| landmarks[i].visibility > self.config.visibility_threshold)
            .count();
        visible as f64 >= KEY_BODY_LANDMARKS.len() as f64 * self.config.min_visible_fraction
    }

    /// Whether the frame should be passed on to the counter
    #[must_use]
    pub fn accepts(&self, landmarks: &[Landmark]) -> bool {
        self.is_pose_visible(landmarks) && self.quality(landmarks) > self.config.min_quality
    }
}
