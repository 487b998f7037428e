use crate::session::SessionConfig;
use crate::vad::VadConfig;
use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub capture: CaptureConfig,
    pub vad: VadSettings,
    pub recognition: RecognitionSettings,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CaptureConfig {
    pub sample_rate: u32,
}

/// Silence-detection settings as they appear in the config file
/// (millisecond primitives; converted to `Duration` at the session boundary)
#[derive(Debug, Deserialize)]
pub struct VadSettings {
    pub min_recording_duration_ms: u64,
    pub silence_threshold: f32,
    pub silence_duration_ms: u64,
    pub window_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct RecognitionSettings {
    pub api_key: String,
    pub language: String,
    /// Override the recognition endpoint (e.g. a local stub)
    pub endpoint: Option<String>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Build a per-session configuration from the file settings
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            sample_rate: self.capture.sample_rate,
            language: self.recognition.language.clone(),
            vad: VadConfig {
                min_recording_duration: Duration::from_millis(self.vad.min_recording_duration_ms),
                silence_threshold: self.vad.silence_threshold,
                silence_duration: Duration::from_millis(self.vad.silence_duration_ms),
                window_size: self.vad.window_size,
            },
            ..SessionConfig::default()
        }
    }
}
