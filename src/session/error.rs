use thiserror::Error;

/// State-machine misuse errors
///
/// These reject the call immediately with no partial mutation; everything else
/// (transport failures, empty transcripts) is reported out-of-band and never
/// alters session state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// `start` was called while a session is recording
    #[error("a recording session is already active")]
    AlreadyRecording,

    /// `tick` or `stop` was called with no recording in progress
    #[error("no active recording session")]
    NoActiveSession,
}
