//! Configuration loading and its effect on the counter

mod test_helpers;

use pushup_counter::{
    config::{Config, EXAMPLE_CONFIG},
    counter::RepCounter,
    Error,
};
use std::path::PathBuf;
use test_helpers::{rep_frames, secs};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pushup-counter-{}-{name}", std::process::id()))
}

#[test]
fn test_save_and_load_file() {
    let path = temp_path("config.yaml");
    let mut config = Config::default();
    config.reps.min_rep_interval_secs = 0.75;
    config.quality.min_quality = 0.4;

    config.to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_example_config_file() {
    let path = temp_path("example.yaml");
    std::fs::write(&path, EXAMPLE_CONFIG).unwrap();
    let loaded = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(loaded.validate().is_ok());
    assert_eq!(loaded.reps.history_capacity, 10);
    assert_eq!(loaded.smoothing.window_capacity, 5);
    assert_eq!(loaded.classifier.wrist_up_weight, 2);
}

#[test]
fn test_missing_file() {
    let result = Config::from_file("/nonexistent/pushup-counter.yaml");
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn test_shorter_interval_allows_faster_reps() {
    let mut config = Config::default();
    config.reps.min_rep_interval_secs = 0.3;
    let mut relaxed = RepCounter::from_config(&config);
    let mut strict = RepCounter::new();

    // Two reps, each 12 frames at 50ms
    let frames: Vec<_> = rep_frames(5, 2, 5).into_iter().chain(rep_frames(5, 2, 5)).collect();
    for (i, frame) in frames.iter().enumerate() {
        let now = secs(1.0 + i as f64 * 0.05);
        relaxed.update(frame, now);
        strict.update(frame, now);
    }

    assert_eq!(relaxed.rep_count(), 2);
    assert_eq!(strict.rep_count(), 1);
    assert_eq!(relaxed.min_rep_interval(), secs(0.3));
}

#[test]
fn test_stricter_quorum_needs_more_evidence() {
    let yaml = "classifier:\n  vote_quorum: 4\n";
    let config = Config::from_yaml(yaml).unwrap();
    assert!(config.validate().is_ok());

    let mut counter = RepCounter::from_config(&config);
    for (i, frame) in rep_frames(5, 2, 5).iter().enumerate() {
        counter.update(frame, secs(2.0 + i as f64 * 0.1));
    }
    // Down frames only muster three votes, so nothing is ever labelled Down
    assert_eq!(counter.rep_count(), 0);
}
