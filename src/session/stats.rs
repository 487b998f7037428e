use super::session::SessionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a recording session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Current state of the session
    pub state: SessionState,

    /// When the current (or last) recording started
    pub started_at: DateTime<Utc>,

    /// Ticked session duration in seconds
    pub duration_secs: f64,

    /// Number of samples captured into the session buffer
    pub samples_captured: usize,
}
