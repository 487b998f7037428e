pub mod client;
pub mod messages;

pub use client::CloudSpeechClient;

use anyhow::Result;

/// A recognized transcript: the first alternative of the first result
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub text: String,
    /// Confidence score (0.0 to 1.0), if the service reported one
    pub confidence: Option<f32>,
}

/// Transport/recognition collaborator
///
/// Takes an encoded WAV payload and returns the best transcript, `None` when
/// the service succeeded but recognized nothing.
#[async_trait::async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, wav: Vec<u8>) -> Result<Option<Transcript>>;
}
