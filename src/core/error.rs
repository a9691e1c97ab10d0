//! Custom error types for the application.
//!
//! None of these are fatal to the page. Each domain recovers locally:
//!
//! - [`StorageError`] - localStorage access for the theme preference
//! - [`ProbeError`] - subtitle existence probes
//! - [`PlayerError`] - preview player configuration and playback

use thiserror::Error;

/// Persistence errors for the preference backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available (disabled, sandboxed frame, private mode).
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to read from localStorage.
    #[error("failed to read from localStorage")]
    ReadFailed,
    /// Failed to write to localStorage (quota, permissions).
    #[error("failed to save to localStorage")]
    WriteFailed,
}

/// A sibling file could not be confirmed to exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// Request never produced a response (network failure, CORS, abort).
    #[error("request failed: {0}")]
    RequestFailed(String),
    /// Server answered with a non-success status.
    #[error("HTTP error: {0}")]
    Status(u16),
}

/// Preview player errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The `<video>` element is not mounted.
    #[error("video element not available")]
    ElementMissing,
    /// Setting the media source failed.
    #[error("failed to set media source: {0}")]
    SourceFailed(String),
    /// Attaching a caption track failed.
    #[error("failed to attach caption track: {0}")]
    TrackFailed(String),
    /// Starting or pausing playback failed.
    #[error("playback failed: {0}")]
    PlaybackFailed(String),
    /// Entering or leaving fullscreen failed.
    #[error("fullscreen request failed: {0}")]
    FullscreenFailed(String),
}
