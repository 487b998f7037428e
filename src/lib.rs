pub mod audio;
pub mod config;
pub mod session;
pub mod stt;
pub mod vad;

pub use audio::{encode_wav, AudioCapture, AudioFile, MemoryCapture};
pub use config::Config;
pub use session::{
    RecordingSession, SessionConfig, SessionError, SessionEvent, SessionState, SessionStats,
};
pub use stt::{CloudSpeechClient, SpeechRecognizer, Transcript};
pub use vad::{SilenceDetector, VadConfig, VadDecision};
