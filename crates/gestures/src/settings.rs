//! # Gesture Settings
//!
//! Numeric thresholds behind every classification decision.
//!
//! Settings are plain data: build them in code, or load them from a TOML
//! file where any omitted field keeps its default. Out-of-range values are
//! never rejected, [`GestureSettings::validate`] clamps them and the clamped
//! value is what the tracker uses.
//!
//! ```toml
//! tap_time_threshold = 0.25
//! swipe_min_distance = 80.0
//! double_tap_enabled = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::GestureResult;

// ============================================================================
// Defaults
// ============================================================================

/// Built-in default values.
pub mod defaults {
    pub const TAP_TIME_THRESHOLD: f64 = 0.3;
    pub const DOUBLE_TAP_TIME_THRESHOLD: f64 = 0.5;
    pub const TAP_DISTANCE_THRESHOLD: f32 = 50.0;
    pub const LONG_PRESS_TIME_THRESHOLD: f64 = 1.0;
    pub const SWIPE_MIN_DISTANCE: f32 = 100.0;
    pub const SWIPE_MAX_TIME: f64 = 1.0;
    pub const SWIPE_ANGLE_THRESHOLD: f32 = 45.0;
    pub const PINCH_MIN_DISTANCE: f32 = 50.0;
    pub const PINCH_SENSITIVITY: f32 = 1.0;
    pub const FLICK_MIN_VELOCITY: f32 = 500.0;
    pub const FLICK_MAX_TIME: f64 = 0.5;
    pub const TOUCH_HISTORY_TIMEOUT: f64 = 5.0;
    pub const CLEANUP_INTERVAL: f64 = 10.0;
}

/// Floors and ranges enforced by [`GestureSettings::validate`].
pub mod limits {
    pub const MIN_TAP_TIME: f64 = 0.01;
    pub const MIN_TAP_DISTANCE: f32 = 1.0;
    pub const MIN_LONG_PRESS_TIME: f64 = 0.1;
    pub const MIN_SWIPE_DISTANCE: f32 = 10.0;
    pub const MIN_SWIPE_TIME: f64 = 0.1;
    pub const MAX_SWIPE_ANGLE: f32 = 90.0;
    pub const MIN_PINCH_DISTANCE: f32 = 1.0;
    pub const MIN_PINCH_SENSITIVITY: f32 = 0.1;
    /// Keeps the pinch threshold above zero, so still fingers never pinch
    pub const MAX_PINCH_SENSITIVITY: f32 = 100.0;
    pub const MIN_FLICK_VELOCITY: f32 = 10.0;
    pub const MIN_FLICK_TIME: f64 = 0.1;
}

// ============================================================================
// GestureSettings
// ============================================================================

/// Gesture thresholds. Times are seconds, distances are pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    // === TAP ===
    /// A tap must end before this long
    pub tap_time_threshold: f64,
    /// Maximum gap between two taps forming a double tap
    pub double_tap_time_threshold: f64,
    /// A tap must stay within this distance; also the long-press dead zone
    pub tap_distance_threshold: f32,
    /// Emit `DoubleTap` after the second of two close taps
    pub double_tap_enabled: bool,

    // === LONG PRESS ===
    pub long_press_time_threshold: f64,

    // === SWIPE ===
    /// Distance from the start position that triggers a swipe
    pub swipe_min_distance: f32,
    /// A swipe must cross `swipe_min_distance` within this long
    pub swipe_max_time: f64,
    /// Maximum deviation (degrees) of a swipe from the nearest axis
    pub swipe_angle_threshold: f32,

    // === PINCH ===
    /// Two fingers closer than this never pinch
    pub pinch_min_distance: f32,
    /// Higher values fire on smaller distance changes
    pub pinch_sensitivity: f32,

    // === FLICK ===
    pub flick_enabled: bool,
    /// Release speed in px/s
    pub flick_min_velocity: f32,
    pub flick_max_time: f64,

    // === HISTORY ===
    /// Idle time after which a history record is evicted
    pub touch_history_timeout: f64,
    /// Minimum time between two history cleanup passes
    pub cleanup_interval: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            tap_time_threshold: defaults::TAP_TIME_THRESHOLD,
            double_tap_time_threshold: defaults::DOUBLE_TAP_TIME_THRESHOLD,
            tap_distance_threshold: defaults::TAP_DISTANCE_THRESHOLD,
            double_tap_enabled: false,
            long_press_time_threshold: defaults::LONG_PRESS_TIME_THRESHOLD,
            swipe_min_distance: defaults::SWIPE_MIN_DISTANCE,
            swipe_max_time: defaults::SWIPE_MAX_TIME,
            swipe_angle_threshold: defaults::SWIPE_ANGLE_THRESHOLD,
            pinch_min_distance: defaults::PINCH_MIN_DISTANCE,
            pinch_sensitivity: defaults::PINCH_SENSITIVITY,
            flick_enabled: false,
            flick_min_velocity: defaults::FLICK_MIN_VELOCITY,
            flick_max_time: defaults::FLICK_MAX_TIME,
            touch_history_timeout: defaults::TOUCH_HISTORY_TIMEOUT,
            cleanup_interval: defaults::CLEANUP_INTERVAL,
        }
    }
}

impl GestureSettings {
    /// Clamp every field into its safe range. Never fails.
    ///
    /// `f32::max`/`f64::max` discard NaN, so a NaN field lands on its floor.
    pub fn validate(&mut self) {
        use limits::*;

        self.tap_time_threshold = self.tap_time_threshold.max(MIN_TAP_TIME);
        self.double_tap_time_threshold = self.double_tap_time_threshold.max(self.tap_time_threshold);
        self.tap_distance_threshold = self.tap_distance_threshold.max(MIN_TAP_DISTANCE);
        self.long_press_time_threshold = self.long_press_time_threshold.max(MIN_LONG_PRESS_TIME);
        self.swipe_min_distance = self.swipe_min_distance.max(MIN_SWIPE_DISTANCE);
        self.swipe_max_time = self.swipe_max_time.max(MIN_SWIPE_TIME);
        self.swipe_angle_threshold = self.swipe_angle_threshold.max(0.0).min(MAX_SWIPE_ANGLE);
        self.pinch_min_distance = self.pinch_min_distance.max(MIN_PINCH_DISTANCE);
        self.pinch_sensitivity = self
            .pinch_sensitivity
            .max(MIN_PINCH_SENSITIVITY)
            .min(MAX_PINCH_SENSITIVITY);
        self.flick_min_velocity = self.flick_min_velocity.max(MIN_FLICK_VELOCITY);
        self.flick_max_time = self.flick_max_time.max(MIN_FLICK_TIME);
        self.touch_history_timeout = self.touch_history_timeout.max(0.0);
        self.cleanup_interval = self.cleanup_interval.max(0.0);
    }

    /// Consuming form of [`validate`](Self::validate).
    pub fn validated(mut self) -> Self {
        self.validate();
        self
    }

    /// Restore the built-in defaults.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    /// Overwrite every field with `other`'s.
    pub fn copy_from(&mut self, other: &GestureSettings) {
        self.clone_from(other);
    }

    /// Parse settings from TOML text. Missing fields keep their defaults.
    pub fn from_toml_str(text: &str) -> GestureResult<Self> {
        let settings: GestureSettings = toml::from_str(text)?;
        Ok(settings.validated())
    }

    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> GestureResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> GestureResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
