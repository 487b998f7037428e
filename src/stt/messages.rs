use serde::{Deserialize, Serialize};

/// Request body for the cloud `speech:recognize` endpoint
#[derive(Debug, Serialize)]
pub struct RecognizeRequest {
    pub config: RecognitionConfig,
    pub audio: RecognitionAudio,
}

/// Recognition parameters for the request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    /// Audio encoding, always "LINEAR16" for our WAV payloads
    pub encoding: String,
    pub sample_rate_hertz: u32,
    /// BCP-47 language tag (e.g. "pt-BR")
    pub language_code: String,
}

/// Base64-encoded audio payload
#[derive(Debug, Serialize)]
pub struct RecognitionAudio {
    pub content: String,
}

/// Response from the cloud `speech:recognize` endpoint
///
/// A success response with no results means no speech was recognized; that is
/// not an error.
#[derive(Debug, Default, Deserialize)]
pub struct RecognizeResponse {
    #[serde(default)]
    pub results: Vec<RecognitionResult>,
}

#[derive(Debug, Deserialize)]
pub struct RecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<RecognitionAlternative>,
}

#[derive(Debug, Deserialize)]
pub struct RecognitionAlternative {
    pub transcript: String,
    pub confidence: Option<f32>,
}

impl RecognizeResponse {
    /// First alternative of the first result; alternate hypotheses are never
    /// interpreted.
    pub fn into_best(self) -> Option<super::Transcript> {
        self.results
            .into_iter()
            .next()
            .and_then(|result| result.alternatives.into_iter().next())
            .map(|alt| super::Transcript {
                text: alt.transcript,
                confidence: alt.confidence,
            })
    }
}
