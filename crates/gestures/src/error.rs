//! # Gesture Errors
//!
//! Error types for gesture recognition.
//!
//! Only [`GestureError::Configuration`] (and the file-loading errors that
//! produce it) ever reaches a caller. Everything else is recovered inside the
//! tick and reported through the [`DiagnosticSink`](crate::DiagnosticSink).

use thiserror::Error;

use crate::types::{FingerId, GestureKind, TouchPhase};

/// Gesture recognition error types.
#[derive(Error, Debug)]
pub enum GestureError {
    // ========================================================================
    // Construction Errors
    // ========================================================================

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Settings could not be serialized: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // ========================================================================
    // Tick Errors (recovered, never returned from update)
    // ========================================================================

    #[error("Duplicate touch: finger {finger_id} began while already tracked")]
    DuplicateTouch { finger_id: FingerId },

    #[error("Stale event ignored: {phase:?} for untracked finger {finger_id}")]
    StaleEvent { finger_id: FingerId, phase: TouchPhase },

    #[error("Invalid sample for finger {finger_id}: {reason}")]
    InvalidSample { finger_id: FingerId, reason: String },

    // ========================================================================
    // Dispatch Errors
    // ========================================================================

    #[error("Subscriber for {kind:?} failed: {message}")]
    Subscriber { kind: GestureKind, message: String },
}

impl GestureError {
    /// Check if this error is handled inside the tick instead of failing a call.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GestureError::DuplicateTouch { .. }
                | GestureError::StaleEvent { .. }
                | GestureError::InvalidSample { .. }
                | GestureError::Subscriber { .. }
        )
    }
}

/// Result type for gesture operations.
pub type GestureResult<T> = Result<T, GestureError>;
