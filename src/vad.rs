//! Silence detection for automatic end-of-speech stop
//!
//! Operates on windows of normalized audio samples: once the average absolute
//! amplitude stays below a threshold for long enough, the recording session is
//! told to stop. Loudness at any point resets the countdown.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};

/// Configuration for silence detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VadConfig {
    /// Minimum time a session must run before silence can stop it
    /// Default: 500ms
    pub min_recording_duration: Duration,

    /// Average absolute amplitude below which a window counts as silent
    /// Default: 0.01
    pub silence_threshold: f32,

    /// How long continuous silence must last before stopping
    /// Default: 500ms
    pub silence_duration: Duration,

    /// Number of trailing samples inspected per evaluation
    /// Default: 1600 (100ms at 16kHz)
    pub window_size: usize,
}

impl Default for VadConfig {
    fn default() -> Self {
        Self {
            min_recording_duration: Duration::from_millis(500),
            silence_threshold: 0.01,
            silence_duration: Duration::from_millis(500),
            window_size: 1600,
        }
    }
}

/// Outcome of one silence evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VadDecision {
    /// Keep recording
    Continue,
    /// Sustained silence detected, stop the session
    TriggerStop,
}

/// Tracks contiguous silence across evaluations.
///
/// The timer accumulates only while the session has run longer than
/// `min_recording_duration` and the current window averages below
/// `silence_threshold`; any other condition zeroes it.
#[derive(Debug, Clone)]
pub struct SilenceDetector {
    config: VadConfig,
    silence_timer: Duration,
}

impl SilenceDetector {
    pub fn new(config: VadConfig) -> Self {
        Self {
            config,
            silence_timer: Duration::ZERO,
        }
    }

    /// Reset accumulated silence for a new session
    pub fn reset(&mut self) {
        self.silence_timer = Duration::ZERO;
    }

    pub fn config(&self) -> &VadConfig {
        &self.config
    }

    /// Accumulated contiguous silence
    pub fn silence_timer(&self) -> Duration {
        self.silence_timer
    }

    /// Mean absolute amplitude of a window. Returns 0.0 for empty input.
    pub fn average_volume(samples: &[f32]) -> f32 {
        if samples.is_empty() {
            return 0.0;
        }
        samples.iter().map(|s| s.abs()).sum::<f32>() / samples.len() as f32
    }

    /// Evaluate one window of trailing samples.
    ///
    /// `dt` is the time since the previous evaluation and `elapsed` the total
    /// session duration including this tick. The caller must pass a full
    /// window; short reads are skipped upstream without touching the timer.
    pub fn evaluate(&mut self, window: &[f32], dt: Duration, elapsed: Duration) -> VadDecision {
        let avg_volume = Self::average_volume(window);
        let is_silent = avg_volume < self.config.silence_threshold;

        trace!(
            "avg_volume={:.4}, threshold={:.4}, is_silent={}, elapsed={:?}",
            avg_volume,
            self.config.silence_threshold,
            is_silent,
            elapsed
        );

        if is_silent && elapsed > self.config.min_recording_duration {
            self.silence_timer += dt;

            if self.silence_timer > self.config.silence_duration {
                debug!(
                    "sustained silence for {:?}, triggering stop",
                    self.silence_timer
                );
                return VadDecision::TriggerStop;
            }
        } else {
            self.silence_timer = Duration::ZERO;
        }

        VadDecision::Continue
    }
}
