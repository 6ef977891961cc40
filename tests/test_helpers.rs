//! Helper functions and utilities for tests
#![allow(dead_code)]

use pushup_counter::constants::{
    LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST, NOSE, NUM_BODY_LANDMARKS, RIGHT_ELBOW, RIGHT_SHOULDER, RIGHT_WRIST,
};
use pushup_counter::landmarks::Landmark;
use std::time::Duration;

/// Shoulder height used by the synthetic frames
pub const SHOULDER_Y: f64 = 0.45;

/// Create a 33-landmark frame with joints offset vertically from the shoulders
pub fn pose_frame(wrist_diff: f64, elbow_diff: f64, nose_diff: f64) -> Vec<Landmark> {
    let mut landmarks = vec![Landmark::new(0.5, SHOULDER_Y, 0.95); NUM_BODY_LANDMARKS];
    landmarks[LEFT_SHOULDER].x = 0.4;
    landmarks[RIGHT_SHOULDER].x = 0.6;
    for i in [LEFT_WRIST, RIGHT_WRIST] {
        landmarks[i].y = SHOULDER_Y + wrist_diff;
    }
    for i in [LEFT_ELBOW, RIGHT_ELBOW] {
        landmarks[i].y = SHOULDER_Y + elbow_diff;
    }
    landmarks[NOSE].y = SHOULDER_Y + nose_diff;
    landmarks
}

/// Bottom of a push-up: wrists, elbows and head below the shoulder line
pub fn down_frame() -> Vec<Landmark> {
    pose_frame(0.2, 0.08, 0.1)
}

/// Top of a push-up: wrists well above the shoulder line
pub fn up_frame() -> Vec<Landmark> {
    pose_frame(-0.25, -0.08, -0.12)
}

/// Halfway between: no indicator fires
pub fn mid_frame() -> Vec<Landmark> {
    pose_frame(-0.05, 0.0, 0.0)
}

/// Frames for one full repetition: lowered, passing through, raised
pub fn rep_frames(down: usize, mid: usize, up: usize) -> Vec<Vec<Landmark>> {
    let mut frames = vec![down_frame(); down];
    frames.extend(vec![mid_frame(); mid]);
    frames.extend(vec![up_frame(); up]);
    frames
}

/// Set every landmark's visibility
pub fn with_visibility(mut frame: Vec<Landmark>, visibility: f64) -> Vec<Landmark> {
    for landmark in &mut frame {
        landmark.visibility = visibility;
    }
    frame
}

pub fn secs(value: f64) -> Duration {
    Duration::from_secs_f64(value)
}
