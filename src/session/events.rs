/// Outbound session notifications
///
/// `Stopped` is emitted synchronously when a session finalizes, so it always
/// precedes the `TranscriptReady` for the same session; the two are not
/// adjacent in time because the recognition call runs in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session left the Recording state (manual stop or silence trigger)
    Stopped,

    /// The cloud recognizer returned a non-empty transcript
    TranscriptReady(String),
}
