//! Discrete push-up phase labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body configuration classified for a single frame.
///
/// The ordering derived here only exists so labels can be tallied in ordered
/// collections; it says nothing about how "far down" a phase is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseLabel {
    /// No usable geometry (wrong frame shape, or nothing observed yet)
    #[default]
    Neutral,
    /// Arms extended, body raised
    Up,
    /// Arms bent, body lowered
    Down,
    /// Between the up and down positions
    Transition,
}

impl PhaseLabel {
    /// Lowercase name, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Up => "up",
            Self::Down => "down",
            Self::Transition => "transition",
        }
    }
}

impl fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(PhaseLabel::default(), PhaseLabel::Neutral);
    }

    #[test]
    fn test_serialized_form_matches_display() {
        for label in [PhaseLabel::Neutral, PhaseLabel::Up, PhaseLabel::Down, PhaseLabel::Transition] {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{label}\""));
        }
    }
}
