use super::config::SessionConfig;
use super::error::SessionError;
use super::events::SessionEvent;
use super::stats::SessionStats;
use crate::audio::{encode_wav, AudioCapture};
use crate::stt::SpeechRecognizer;
use crate::vad::{SilenceDetector, VadDecision};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, trace, warn};

/// Lifecycle of a capture session
///
/// `Stopped` is terminal for a session instance; a new `start` begins a fresh
/// session and discards the prior buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    Recording,
    Stopped,
}

/// A recording session that manages audio capture, silence-triggered stop,
/// and hand-off of the finalized buffer to the speech recognizer.
///
/// Driven by strictly sequential `tick` calls from the host loop; the only
/// background work is the recognition request, spawned onto the Tokio runtime
/// at finalization so it never blocks the tick loop.
pub struct RecordingSession {
    /// Session configuration
    config: SessionConfig,

    /// Audio capture collaborator (exclusively owned)
    capture: Box<dyn AudioCapture>,

    /// Recognition transport, shared with the background task
    recognizer: Arc<dyn SpeechRecognizer>,

    /// Outbound notification sink
    events: mpsc::UnboundedSender<SessionEvent>,

    state: SessionState,

    /// Whether the silence-detector path is active for this session
    continuous: bool,

    /// When the current (or last) recording started
    started_at: chrono::DateTime<chrono::Utc>,

    /// Ticked duration of the current session
    elapsed: Duration,

    /// Read cursor into the capture stream
    read_position: u64,

    /// Append-only sample buffer, owned by the session until finalization
    buffer: Vec<f32>,

    /// Samples captured by the current (or last) session
    samples_captured: usize,

    detector: SilenceDetector,
}

impl RecordingSession {
    pub fn new(
        config: SessionConfig,
        capture: Box<dyn AudioCapture>,
        recognizer: Arc<dyn SpeechRecognizer>,
        events: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        let detector = SilenceDetector::new(config.vad.clone());

        Self {
            config,
            capture,
            recognizer,
            events,
            state: SessionState::Idle,
            continuous: false,
            started_at: Utc::now(),
            elapsed: Duration::ZERO,
            read_position: 0,
            buffer: Vec::new(),
            samples_captured: 0,
            detector,
        }
    }

    /// Begin a capture session.
    ///
    /// `continuous` enables the tick-driven silence detector; without it the
    /// session is a manually bounded capture that only `stop` ends.
    /// `max_duration` bounds how much audio the capture collaborator buffers.
    pub fn start(&mut self, continuous: bool, max_duration: Duration) -> Result<()> {
        if self.state == SessionState::Recording {
            return Err(SessionError::AlreadyRecording.into());
        }

        info!(
            "Starting recording session: {} (continuous={})",
            self.config.session_id, continuous
        );

        self.capture
            .start(max_duration)
            .context("Failed to start audio capture")?;

        self.buffer.clear();
        self.samples_captured = 0;
        self.detector.reset();
        self.elapsed = Duration::ZERO;
        self.read_position = self.capture.write_position();
        self.continuous = continuous;
        self.started_at = Utc::now();
        self.state = SessionState::Recording;

        Ok(())
    }

    /// Advance the session by one host frame.
    ///
    /// Drains newly captured samples into the session buffer and, for
    /// continuous sessions, evaluates the trailing window for silence.
    pub fn tick(&mut self, dt: Duration) -> Result<()> {
        if self.state != SessionState::Recording {
            return Err(SessionError::NoActiveSession.into());
        }

        self.elapsed += dt;

        let write_position = self.capture.write_position();
        if write_position > self.read_position {
            self.capture
                .read_from(self.read_position, &mut self.buffer)
                .context("Failed to read captured samples")?;
            self.read_position = write_position;
            self.samples_captured = self.buffer.len();
        }

        if !self.continuous {
            return Ok(());
        }

        let window_size = self.config.vad.window_size;
        if self.buffer.len() < window_size {
            // Capture just started; not enough audio for a full window yet
            trace!(
                "skipping silence evaluation: {} of {} window samples captured",
                self.buffer.len(),
                window_size
            );
            return Ok(());
        }

        let window = &self.buffer[self.buffer.len() - window_size..];
        if self.detector.evaluate(window, dt, self.elapsed) == VadDecision::TriggerStop {
            info!(
                "Silence detected, stopping session: {}",
                self.config.session_id
            );
            self.finalize();
        }

        Ok(())
    }

    /// Force the session to stop, regardless of silence-detector state
    pub fn stop(&mut self) -> Result<()> {
        if self.state != SessionState::Recording {
            return Err(SessionError::NoActiveSession.into());
        }

        info!("Stopping recording session: {}", self.config.session_id);
        self.finalize();

        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Snapshot of the session
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            state: self.state,
            started_at: self.started_at,
            duration_secs: self.elapsed.as_secs_f64(),
            samples_captured: self.samples_captured,
        }
    }

    /// Transition to Stopped: release the capture device, emit the stop
    /// notification, and hand the finalized buffer to the recognizer on a
    /// background task. The session does not wait for transcription.
    fn finalize(&mut self) {
        self.state = SessionState::Stopped;

        if let Err(e) = self.capture.stop() {
            warn!("Failed to stop audio capture: {:#}", e);
        }

        let samples = std::mem::take(&mut self.buffer);

        info!(
            "Recording session {} stopped after {:.1}s ({} samples)",
            self.config.session_id,
            self.elapsed.as_secs_f64(),
            samples.len()
        );

        self.send_event(SessionEvent::Stopped);

        let recognizer = Arc::clone(&self.recognizer);
        let events = self.events.clone();
        let sample_rate = self.config.sample_rate;
        let session_id = self.config.session_id.clone();

        tokio::spawn(async move {
            let wav = match encode_wav(&samples, sample_rate) {
                Ok(wav) => wav,
                Err(e) => {
                    error!("Failed to encode audio for session {}: {:#}", session_id, e);
                    return;
                }
            };

            match recognizer.recognize(wav).await {
                Ok(Some(transcript)) => {
                    info!(
                        "Transcript ready for session {} (confidence: {})",
                        session_id,
                        transcript
                            .confidence
                            .map(|c| format!("{:.2}", c))
                            .unwrap_or_else(|| "N/A".to_string())
                    );

                    if events
                        .send(SessionEvent::TranscriptReady(transcript.text))
                        .is_err()
                    {
                        warn!("Event receiver dropped before transcript delivery");
                    }
                }
                Ok(None) => {
                    info!("No transcript recognized for session {}", session_id);
                }
                Err(e) => {
                    error!("Transcription failed for session {}: {:#}", session_id, e);
                }
            }
        });
    }

    fn send_event(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            warn!("Session event receiver dropped");
        }
    }
}
