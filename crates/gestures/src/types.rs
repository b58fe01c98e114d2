// =============================================================================
// Eustress Gestures - Core Types
// =============================================================================
// Table of Contents:
// 1. Touch Samples
// 2. Gesture Kinds
// 3. Gesture Events
// =============================================================================

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Host-assigned finger identifier. Negative ids are rejected by the tracker.
pub type FingerId = i32;

// -----------------------------------------------------------------------------
// 1. Touch Samples
// -----------------------------------------------------------------------------

/// Lifecycle phase of one finger as reported by the host for this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TouchPhase {
    /// Finger touched down
    Began,
    /// Finger moved since the previous tick
    Moved,
    /// Finger is down but has not moved (treated like `Moved`)
    Stationary,
    /// Finger lifted
    Ended,
    /// Platform aborted the touch; tears down state without classifying
    Cancelled,
}

/// One finger's reported position, phase and time for the current tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchSample {
    pub finger_id: FingerId,
    pub position: Vec2,
    pub phase: TouchPhase,
    /// Seconds on the host's clock
    pub timestamp: f64,
}

impl TouchSample {
    pub fn new(finger_id: FingerId, position: Vec2, phase: TouchPhase, timestamp: f64) -> Self {
        Self {
            finger_id,
            position,
            phase,
            timestamp,
        }
    }

    pub fn began(finger_id: FingerId, position: Vec2, timestamp: f64) -> Self {
        Self::new(finger_id, position, TouchPhase::Began, timestamp)
    }

    pub fn moved(finger_id: FingerId, position: Vec2, timestamp: f64) -> Self {
        Self::new(finger_id, position, TouchPhase::Moved, timestamp)
    }

    pub fn ended(finger_id: FingerId, position: Vec2, timestamp: f64) -> Self {
        Self::new(finger_id, position, TouchPhase::Ended, timestamp)
    }

    pub fn cancelled(finger_id: FingerId, position: Vec2, timestamp: f64) -> Self {
        Self::new(finger_id, position, TouchPhase::Cancelled, timestamp)
    }
}

// -----------------------------------------------------------------------------
// 2. Gesture Kinds
// -----------------------------------------------------------------------------

/// Fieldless gesture discriminant, used as the subscription key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GestureKind {
    Tap,
    DoubleTap,
    Swipe,
    LongPress,
    Pinch,
    Flick,
}

impl GestureKind {
    pub const ALL: [GestureKind; 6] = [
        GestureKind::Tap,
        GestureKind::DoubleTap,
        GestureKind::Swipe,
        GestureKind::LongPress,
        GestureKind::Pinch,
        GestureKind::Flick,
    ];
}

/// Swipe direction quantized to the four cardinal values (y up).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

// -----------------------------------------------------------------------------
// 3. Gesture Events
// -----------------------------------------------------------------------------

/// A classified gesture. Each variant carries only the fields relevant to it.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// Short touch that barely moved
    Tap {
        position: Vec2,
        duration: f64,
        distance: f32,
    },
    /// Second tap close in time and space to the previous one (opt-in)
    DoubleTap { position: Vec2, interval: f64 },
    /// Fast drag past the swipe distance, fired while the finger is still down
    Swipe {
        start_position: Vec2,
        end_position: Vec2,
        /// Normalized `end - start`
        direction: Vec2,
        bucketed_direction: SwipeDirection,
        distance: f32,
        duration: f64,
    },
    /// Finger held in place past the long-press threshold
    LongPress { position: Vec2, duration: f64 },
    /// Change of distance between exactly two fingers since the previous tick
    Pinch {
        delta: f32,
        distance: f32,
        finger_count: u8,
    },
    /// Fast release (opt-in)
    Flick {
        start_position: Vec2,
        end_position: Vec2,
        /// Pixels per second along `end - start`
        velocity: Vec2,
        speed: f32,
        bucketed_direction: SwipeDirection,
    },
}

impl GestureEvent {
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureEvent::Tap { .. } => GestureKind::Tap,
            GestureEvent::DoubleTap { .. } => GestureKind::DoubleTap,
            GestureEvent::Swipe { .. } => GestureKind::Swipe,
            GestureEvent::LongPress { .. } => GestureKind::LongPress,
            GestureEvent::Pinch { .. } => GestureKind::Pinch,
            GestureEvent::Flick { .. } => GestureKind::Flick,
        }
    }
}
