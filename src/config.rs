//! Configuration management for the push-up counter

use crate::constants::{
    DEFAULT_INSPECT_SPAN, DEFAULT_MIN_HISTORY, DEFAULT_MIN_QUALITY, DEFAULT_MIN_REP_INTERVAL_SECS,
    DEFAULT_MIN_TRANSITIONS, DEFAULT_MIN_VISIBLE_FRACTION, DEFAULT_REP_HISTORY, DEFAULT_SMOOTHING_VOTE_SPAN,
    DEFAULT_SMOOTHING_WINDOW, DEFAULT_VISIBILITY_THRESHOLD, DEFAULT_VOTE_QUORUM, ELBOW_DOWN_THRESHOLD,
    ELBOW_UP_THRESHOLD, NOSE_DOWN_THRESHOLD, NOSE_UP_THRESHOLD, SECONDARY_WEIGHT, WRIST_DOWN_THRESHOLD,
    WRIST_DOWN_WEIGHT, WRIST_UP_THRESHOLD, WRIST_UP_WEIGHT,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Phase classifier thresholds and weights
    pub classifier: ClassifierConfig,

    /// Raw label smoothing
    pub smoothing: SmoothingConfig,

    /// Rep completion rules
    pub reps: RepConfig,

    /// Frame quality gate
    pub quality: QualityConfig,
}

/// Geometric voting thresholds.
///
/// Differences are in normalized image units with y growing downward, so a
/// negative difference means the joint sits above the shoulders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Wrist-shoulder difference below which the wrists vote Up
    pub wrist_up_threshold: f64,
    /// Wrist-shoulder difference above which the wrists vote Down
    pub wrist_down_threshold: f64,
    /// Up votes cast by the wrists
    pub wrist_up_weight: u32,
    /// Down votes cast by the wrists
    pub wrist_down_weight: u32,

    /// Elbow-shoulder difference below which the elbows vote Up
    pub elbow_up_threshold: f64,
    /// Elbow-shoulder difference above which the elbows vote Down
    pub elbow_down_threshold: f64,
    /// Votes cast by the elbows
    pub elbow_weight: u32,

    /// Nose-shoulder difference below which the head votes Up
    pub nose_up_threshold: f64,
    /// Nose-shoulder difference above which the head votes Down
    pub nose_down_threshold: f64,
    /// Votes cast by the head
    pub nose_weight: u32,

    /// Votes needed to label a frame Up or Down
    pub vote_quorum: u32,
}

/// Majority-vote smoothing of raw labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Raw labels retained
    pub window_capacity: usize,

    /// Newest raw labels taking part in the vote
    pub vote_span: usize,
}

/// Rep completion rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepConfig {
    /// Smoothed labels retained between reps
    pub history_capacity: usize,

    /// Labels required before completion is evaluated
    pub min_history: usize,

    /// Newest labels inspected for the down-to-up pattern
    pub inspect_span: usize,

    /// Label changes required inside the inspected span
    pub min_transitions: usize,

    /// Minimum time between two counted reps, in seconds
    pub min_rep_interval_secs: f64,
}

/// Frame quality gate applied before frames reach the counter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Mean key-landmark visibility a frame must exceed
    pub min_quality: f64,

    /// Visibility above which a landmark counts as visible
    pub visibility_threshold: f64,

    /// Fraction of key landmarks that must be visible
    pub min_visible_fraction: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            wrist_up_threshold: WRIST_UP_THRESHOLD,
            wrist_down_threshold: WRIST_DOWN_THRESHOLD,
            wrist_up_weight: WRIST_UP_WEIGHT,
            wrist_down_weight: WRIST_DOWN_WEIGHT,
            elbow_up_threshold: ELBOW_UP_THRESHOLD,
            elbow_down_threshold: ELBOW_DOWN_THRESHOLD,
            elbow_weight: SECONDARY_WEIGHT,
            nose_up_threshold: NOSE_UP_THRESHOLD,
            nose_down_threshold: NOSE_DOWN_THRESHOLD,
            nose_weight: SECONDARY_WEIGHT,
            vote_quorum: DEFAULT_VOTE_QUORUM,
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window_capacity: DEFAULT_SMOOTHING_WINDOW,
            vote_span: DEFAULT_SMOOTHING_VOTE_SPAN,
        }
    }
}

impl Default for RepConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_REP_HISTORY,
            min_history: DEFAULT_MIN_HISTORY,
            inspect_span: DEFAULT_INSPECT_SPAN,
            min_transitions: DEFAULT_MIN_TRANSITIONS,
            min_rep_interval_secs: DEFAULT_MIN_REP_INTERVAL_SECS,
        }
    }
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            min_quality: DEFAULT_MIN_QUALITY,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            min_visible_fraction: DEFAULT_MIN_VISIBLE_FRACTION,
        }
    }
}

impl RepConfig {
    /// Debounce interval as a `Duration`.
    ///
    /// Negative or non-finite values fall back to the default interval.
    #[must_use]
    pub fn min_rep_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.min_rep_interval_secs)
            .unwrap_or_else(|_| Duration::from_secs_f64(DEFAULT_MIN_REP_INTERVAL_SECS))
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let classifier = &self.classifier;
        if !(classifier.wrist_up_threshold < 0.0
            && classifier.elbow_up_threshold < 0.0
            && classifier.nose_up_threshold < 0.0)
        {
            return Err(Error::ConfigError(
                "Up thresholds must be negative (joint above the shoulders)".to_string(),
            ));
        }
        if !(classifier.wrist_down_threshold > 0.0
            && classifier.elbow_down_threshold > 0.0
            && classifier.nose_down_threshold > 0.0)
        {
            return Err(Error::ConfigError(
                "Down thresholds must be positive (joint below the shoulders)".to_string(),
            ));
        }
        if classifier.vote_quorum == 0 {
            return Err(Error::ConfigError("Vote quorum must be greater than 0".to_string()));
        }

        // Smoothing
        if self.smoothing.window_capacity == 0 || self.smoothing.vote_span == 0 {
            return Err(Error::ConfigError(
                "Smoothing window and vote span must be greater than 0".to_string(),
            ));
        }
        if self.smoothing.vote_span > self.smoothing.window_capacity {
            return Err(Error::ConfigError(format!(
                "Smoothing vote span ({}) cannot exceed the window capacity ({})",
                self.smoothing.vote_span, self.smoothing.window_capacity
            )));
        }

        // Rep detection
        let reps = &self.reps;
        if reps.history_capacity == 0 || reps.inspect_span == 0 {
            return Err(Error::ConfigError(
                "Rep history capacity and inspect span must be greater than 0".to_string(),
            ));
        }
        if reps.inspect_span > reps.history_capacity {
            return Err(Error::ConfigError(format!(
                "Inspect span ({}) cannot exceed the rep history capacity ({})",
                reps.inspect_span, reps.history_capacity
            )));
        }
        if reps.min_history < 2 || reps.min_history > reps.history_capacity {
            return Err(Error::ConfigError(format!(
                "Minimum history must be between 2 and {}",
                reps.history_capacity
            )));
        }
        if !reps.min_rep_interval_secs.is_finite() || reps.min_rep_interval_secs < 0.0 {
            return Err(Error::ConfigError(
                "Minimum rep interval must be a non-negative number of seconds".to_string(),
            ));
        }

        // Quality gate
        for (name, value) in [
            ("min_quality", self.quality.min_quality),
            ("visibility_threshold", self.quality.visibility_threshold),
            ("min_visible_fraction", self.quality.min_visible_fraction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::ConfigError(format!("Quality {name} must be between 0.0 and 1.0")));
            }
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Push-up Counter Configuration

# Phase classifier (normalized image units, y grows downward)
classifier:
  wrist_up_threshold: -0.15
  wrist_down_threshold: 0.10
  wrist_up_weight: 2
  wrist_down_weight: 1
  elbow_up_threshold: -0.05
  elbow_down_threshold: 0.05
  elbow_weight: 1
  nose_up_threshold: -0.10
  nose_down_threshold: 0.05
  nose_weight: 1
  vote_quorum: 2

# Majority vote over raw labels
smoothing:
  window_capacity: 5
  vote_span: 3

# Rep completion
reps:
  history_capacity: 10
  min_history: 4
  inspect_span: 6
  min_transitions: 2
  min_rep_interval_secs: 1.0

# Frames below this quality never reach the counter
quality:
  min_quality: 0.6
  visibility_threshold: 0.5
  min_visible_fraction: 0.6
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_matches_defaults() {
        let parsed = Config::from_yaml(EXAMPLE_CONFIG).unwrap();
        assert_eq!(parsed, Config::default());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let parsed = Config::from_yaml("reps:\n  min_rep_interval_secs: 0.5\n").unwrap();
        assert_eq!(parsed.reps.min_rep_interval_secs, 0.5);
        assert_eq!(parsed.reps.history_capacity, DEFAULT_REP_HISTORY);
        assert_eq!(parsed.classifier, ClassifierConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let result = Config::from_yaml("reps: [not, a, map]");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.smoothing.vote_span = 6;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.reps.inspect_span = 11;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.reps.min_rep_interval_secs = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.classifier.wrist_up_threshold = 0.15;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.quality.min_quality = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_rep_interval() {
        let mut reps = RepConfig::default();
        assert_eq!(reps.min_rep_interval(), Duration::from_secs(1));

        reps.min_rep_interval_secs = 0.25;
        assert_eq!(reps.min_rep_interval(), Duration::from_millis(250));

        reps.min_rep_interval_secs = -3.0;
        assert_eq!(reps.min_rep_interval(), Duration::from_secs(1));
    }
}
