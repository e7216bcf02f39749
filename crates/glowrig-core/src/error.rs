//! Error types for the Glowrig panel core

use thiserror::Error;

/// Result type alias for panel operations
pub type PanelResult<T> = Result<T, PanelError>;

/// Errors that can occur in the device link and playback paths
#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Socket connect error: {0}")]
    Connect(String),

    #[error("Sound fetch error: {0}")]
    SoundFetch(String),

    #[error("Audio playback error: {0}")]
    Playback(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
