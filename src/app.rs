//! Replay application: drives a detector from a recorded landmark stream.
//!
//! The stream is JSON Lines. Each line is either a frame captured by the pose
//! model, with its capture timestamp in seconds, or a reset marker:
//!
//! ```text
//! {"type":"frame","timestamp":0.033,"landmarks":[{"x":0.5,"y":0.4,"visibility":0.98}, ...]}
//! {"type":"reset"}
//! ```
//!
//! Frame timestamps drive a [`ManualClock`], so a replay produces the same
//! counts no matter how fast it runs.

use crate::clock::ManualClock;
use crate::config::Config;
use crate::detector::{FrameOutcome, PushupDetector};
use crate::landmarks::Landmark;
use crate::{Error, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Where the landmark stream comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read from standard input
    Stdin,
    /// Read from a JSON Lines file
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin, anything else is a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Self::File(path) => {
                info!("Opening landmark stream: {}", path.display());
                let file = File::open(path)
                    .map_err(|e| Error::IoError(format!("Cannot open {}: {e}", path.display())))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Replay settings
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Landmark stream to replay
    pub input: InputSource,
    /// Drop poorly tracked frames before they reach the counter
    pub quality_gate: bool,
}

/// One record of the landmark stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// A frame from the pose model
    Frame {
        /// Capture time in seconds since the start of the recording
        timestamp: f64,
        landmarks: Vec<Landmark>,
    },
    /// Start a new set
    Reset,
}

/// Totals for a finished replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// Frames handed to the detector
    pub frames: usize,
    /// Frames dropped by the quality gate
    pub rejected: usize,
    /// Lines that could not be used
    pub skipped_lines: usize,
    /// Reps counted since the last reset
    pub reps: u32,
}

/// Replays a landmark stream through a push-up detector
pub struct ReplayApp {
    config: ReplayConfig,
    detector: PushupDetector<ManualClock>,
    summary: ReplaySummary,
}

impl ReplayApp {
    #[must_use]
    pub fn new(config: ReplayConfig, settings: &Config) -> Self {
        Self {
            config,
            detector: PushupDetector::from_config(settings, ManualClock::new()),
            summary: ReplaySummary::default(),
        }
    }

    /// Replay the configured input, writing one JSON outcome per frame to stdout
    pub fn run(&mut self) -> Result<ReplaySummary> {
        let reader = self.config.input.open()?;
        let stdout = io::stdout();
        self.run_with(reader, stdout.lock())
    }

    /// Replay from any reader into any writer
    pub fn run_with<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<ReplaySummary> {
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let event: StreamEvent = match serde_json::from_str(&line) {
                Ok(event) => event,
                Err(e) => {
                    warn!("Skipping line {line_number}: {e}");
                    self.summary.skipped_lines += 1;
                    continue;
                }
            };

            match self.handle_event(event) {
                Ok(Some(outcome)) => {
                    serde_json::to_writer(&mut writer, &outcome)?;
                    writeln!(writer)?;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Skipping line {line_number}: {e}");
                    self.summary.skipped_lines += 1;
                }
            }
        }
        writer.flush()?;

        self.summary.reps = self.detector.rep_count();
        info!(
            "Replay finished: {} frames, {} rejected, {} skipped, {} reps",
            self.summary.frames, self.summary.rejected, self.summary.skipped_lines, self.summary.reps
        );
        Ok(self.summary)
    }

    /// Apply one stream event to the detector
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` for a frame with a negative or non-finite timestamp
    pub fn handle_event(&mut self, event: StreamEvent) -> Result<Option<FrameOutcome>> {
        match event {
            StreamEvent::Reset => {
                self.detector.reset();
                Ok(None)
            }
            StreamEvent::Frame { timestamp, landmarks } => {
                let elapsed = Duration::try_from_secs_f64(timestamp)
                    .map_err(|_| Error::InvalidInput(format!("Invalid frame timestamp {timestamp}")))?;
                self.detector.clock().set(elapsed);

                let outcome = if self.config.quality_gate {
                    self.detector.process(&landmarks)
                } else {
                    FrameOutcome::Counted(self.detector.update(&landmarks))
                };

                self.summary.frames += 1;
                if matches!(outcome, FrameOutcome::Rejected { .. }) {
                    self.summary.rejected += 1;
                }
                Ok(Some(outcome))
            }
        }
    }

    #[must_use]
    pub fn detector(&self) -> &PushupDetector<ManualClock> {
        &self.detector
    }
}
