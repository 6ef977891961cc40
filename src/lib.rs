//! Rule-based push-up repetition counting from 2-D body landmarks.
//!
//! The crate turns a per-frame stream of 33 normalized body landmarks (as
//! emitted by an external pose model) into a push-up count, using geometry
//! alone rather than a trained classifier.
//!
//! The counting pipeline consists of:
//! 1. Frame validation: only frames with exactly 33 landmarks are interpreted
//! 2. Phase classification by weighted voting over wrist, elbow and nose height
//! 3. Majority-vote smoothing of the raw phase labels
//! 4. A rep state machine that matches a down-to-up pattern with a debounce
//!
//! # Examples
//!
//! ## Counting With Explicit Timestamps
//!
//! ```
//! use pushup_counter::{counter::RepCounter, landmarks::Landmark};
//! use std::time::Duration;
//!
//! let mut counter = RepCounter::new();
//! let frame = vec![Landmark::new(0.5, 0.5, 0.9); 33];
//!
//! let update = counter.update(&frame, Duration::from_millis(33));
//! println!("Phase: {}, reps: {}", update.phase, update.rep_count);
//! ```
//!
//! ## Session Detector
//!
//! ```no_run
//! use pushup_counter::{detector::PushupDetector, landmarks::Landmark};
//!
//! # fn next_frame() -> Option<Vec<Landmark>> { None }
//! let mut detector = PushupDetector::new();
//!
//! while let Some(landmarks) = next_frame() {
//!     let outcome = detector.process(&landmarks);
//!     if outcome.rep_completed() {
//!         println!("Rep {} completed!", detector.rep_count());
//!     }
//! }
//! ```

/// Replay application for recorded landmark streams
pub mod app;

/// Phase classification from landmark geometry
pub mod classifier;

/// Monotonic and manual time sources
pub mod clock;

/// Configuration management
pub mod config;

/// Constants used throughout the crate
pub mod constants;

/// Rep counting state machine
pub mod counter;

/// Session-level detector with quality gating
pub mod detector;

/// Error types and result handling
pub mod error;

/// Landmark frames and frame quality
pub mod landmarks;

/// Phase labels
pub mod phase;

/// Fixed-capacity circular buffer
pub mod ring_buffer;

/// Majority-vote phase smoothing
pub mod smoother;

pub use error::{Error, Result};
