use anyhow::{Context, Result};
use base64::Engine;
use tracing::info;

use super::messages::{RecognitionAudio, RecognitionConfig, RecognizeRequest, RecognizeResponse};
use super::{SpeechRecognizer, Transcript};

pub const DEFAULT_ENDPOINT: &str = "https://speech.googleapis.com/v1/speech:recognize";

/// Cloud speech-recognition client
///
/// Submits a complete WAV payload to the `speech:recognize` REST endpoint and
/// returns the best transcript, if any. No retries; a failed call surfaces the
/// raw error message to the caller.
pub struct CloudSpeechClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    language: String,
    sample_rate: u32,
}

impl CloudSpeechClient {
    pub fn new(api_key: String, language: String, sample_rate: u32) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string(), api_key, language, sample_rate)
    }

    /// Point the client at a non-default endpoint (e.g. a local stub)
    pub fn with_endpoint(
        endpoint: String,
        api_key: String,
        language: String,
        sample_rate: u32,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key,
            language,
            sample_rate,
        }
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for CloudSpeechClient {
    async fn recognize(&self, wav: Vec<u8>) -> Result<Option<Transcript>> {
        let request = RecognizeRequest {
            config: RecognitionConfig {
                encoding: "LINEAR16".to_string(),
                sample_rate_hertz: self.sample_rate,
                language_code: self.language.clone(),
            },
            audio: RecognitionAudio {
                content: base64::engine::general_purpose::STANDARD.encode(&wav),
            },
        };

        info!(
            "Submitting {} bytes of audio for recognition (language={})",
            wav.len(),
            self.language
        );

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .context("Failed to reach recognition endpoint")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Recognition request failed ({}): {}", status, body);
        }

        let parsed: RecognizeResponse = response
            .json()
            .await
            .context("Failed to decode recognition response")?;

        Ok(parsed.into_best())
    }
}
