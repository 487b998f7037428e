//! Recording session management
//!
//! This module provides the `RecordingSession` abstraction that manages:
//! - The capture lifecycle (Idle -> Recording -> Stopped)
//! - Silence-triggered and manual stop
//! - Hand-off of the finalized buffer to the speech recognizer
//! - Outbound notifications and session statistics

mod config;
mod error;
mod events;
mod session;
mod stats;

pub use config::SessionConfig;
pub use error::SessionError;
pub use events::SessionEvent;
pub use session::{RecordingSession, SessionState};
pub use stats::SessionStats;
