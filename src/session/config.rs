use crate::vad::VadConfig;
use serde::{Deserialize, Serialize};

/// Configuration for a recording session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier
    pub session_id: String,

    /// Capture sample rate in Hz (the recognition payload declares this rate)
    pub sample_rate: u32,

    /// BCP-47 language tag sent with each recognition request
    pub language: String,

    /// Silence-detection parameters
    pub vad: VadConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("capture-{}", uuid::Uuid::new_v4()),
            sample_rate: 16000,
            language: "pt-BR".to_string(),
            vad: VadConfig::default(),
        }
    }
}
