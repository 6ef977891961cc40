//! Constants used throughout the crate

/// Number of body landmarks emitted per frame by the pose model
pub const NUM_BODY_LANDMARKS: usize = 33;

/// Landmark indices consulted by the phase classifier
pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;

/// Key body landmarks used for frame quality scoring
/// (shoulders, elbows, wrists, hips, knees, ankles)
pub const KEY_BODY_LANDMARKS: [usize; 12] = [11, 12, 13, 14, 15, 16, 23, 24, 25, 26, 27, 28];

/// Wrist/shoulder indicator thresholds and weights
pub const WRIST_UP_THRESHOLD: f64 = -0.15;
pub const WRIST_DOWN_THRESHOLD: f64 = 0.10;
pub const WRIST_UP_WEIGHT: u32 = 2;
pub const WRIST_DOWN_WEIGHT: u32 = 1;

/// Elbow/shoulder indicator thresholds
pub const ELBOW_UP_THRESHOLD: f64 = -0.05;
pub const ELBOW_DOWN_THRESHOLD: f64 = 0.05;

/// Nose/shoulder indicator thresholds
pub const NOSE_UP_THRESHOLD: f64 = -0.10;
pub const NOSE_DOWN_THRESHOLD: f64 = 0.05;

/// Weight of the elbow and nose indicators
pub const SECONDARY_WEIGHT: u32 = 1;

/// Votes needed before a frame is labelled Up or Down
pub const DEFAULT_VOTE_QUORUM: u32 = 2;

/// Phase smoother defaults
pub const DEFAULT_SMOOTHING_WINDOW: usize = 5;
pub const DEFAULT_SMOOTHING_VOTE_SPAN: usize = 3;

/// Rep counter defaults
pub const DEFAULT_REP_HISTORY: usize = 10;
pub const DEFAULT_MIN_HISTORY: usize = 4;
pub const DEFAULT_INSPECT_SPAN: usize = 6;
pub const DEFAULT_MIN_TRANSITIONS: usize = 2;
pub const DEFAULT_MIN_REP_INTERVAL_SECS: f64 = 1.0;

/// Frame quality defaults
pub const DEFAULT_MIN_QUALITY: f64 = 0.6;
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MIN_VISIBLE_FRACTION: f64 = 0.6;
