// =============================================================================
// Eustress Gestures - Classification Rules
// =============================================================================
// Table of Contents:
// 1. Direction Bucketing
// 2. Single-Finger Rules (tap, double tap, swipe, long press, flick)
// 3. Two-Finger Rules (pinch)
// 4. Event Construction
// =============================================================================
//
// Pure functions only. The tracker owns all state and decides *when* each
// rule is evaluated; this module only answers *whether* it holds.

use glam::Vec2;

use crate::settings::GestureSettings;
use crate::types::{GestureEvent, SwipeDirection};

/// Pinch threshold at sensitivity 1.0, in pixels.
pub const PINCH_BASE_EPSILON_PX: f32 = 1.0;

/// Slack when comparing a measured angle against the swipe angle threshold,
/// so an exact diagonal still passes the default 45 degrees.
const ANGLE_EPSILON_DEG: f32 = 1.0e-3;

// -----------------------------------------------------------------------------
// 1. Direction Bucketing
// -----------------------------------------------------------------------------

/// Quantize a direction vector (y up) into a cardinal direction.
pub fn bucket(direction: Vec2) -> SwipeDirection {
    bucket_angle(direction.y.atan2(direction.x).to_degrees())
}

/// Half-open buckets so every boundary has exactly one owner:
/// `[-45, 45)` Right, `[45, 135)` Up, `>= 135 or < -135` Left, else Down.
pub fn bucket_angle(angle_deg: f32) -> SwipeDirection {
    if (-45.0..45.0).contains(&angle_deg) {
        SwipeDirection::Right
    } else if (45.0..135.0).contains(&angle_deg) {
        SwipeDirection::Up
    } else if angle_deg >= 135.0 || angle_deg < -135.0 {
        SwipeDirection::Left
    } else {
        SwipeDirection::Down
    }
}

/// Angle in degrees between `direction` and the closest of the four axes (0..=45).
pub fn axis_deviation(direction: Vec2) -> f32 {
    let angle = direction.y.atan2(direction.x).to_degrees().abs() % 90.0;
    angle.min(90.0 - angle)
}

pub fn within_swipe_angle(direction: Vec2, settings: &GestureSettings) -> bool {
    axis_deviation(direction) <= settings.swipe_angle_threshold + ANGLE_EPSILON_DEG
}

// -----------------------------------------------------------------------------
// 2. Single-Finger Rules
// -----------------------------------------------------------------------------

/// Short and still. Both bounds are strict.
pub fn is_tap(duration: f64, distance: f32, settings: &GestureSettings) -> bool {
    duration < settings.tap_time_threshold && distance < settings.tap_distance_threshold
}

/// Far enough, fast enough, and close enough to an axis.
pub fn is_swipe(start: Vec2, end: Vec2, elapsed: f64, settings: &GestureSettings) -> bool {
    let delta = end - start;
    delta.length() >= settings.swipe_min_distance
        && elapsed <= settings.swipe_max_time
        && within_swipe_angle(delta, settings)
}

/// Held long enough without leaving the tap dead zone.
pub fn is_long_press(elapsed: f64, distance: f32, settings: &GestureSettings) -> bool {
    elapsed >= settings.long_press_time_threshold && distance < settings.tap_distance_threshold
}

/// Second tap within the double-tap window and the tap dead zone of the first.
pub fn is_double_tap(interval: f64, distance: f32, settings: &GestureSettings) -> bool {
    settings.double_tap_enabled
        && interval >= 0.0
        && interval <= settings.double_tap_time_threshold
        && distance < settings.tap_distance_threshold
}

/// Release velocity in px/s when the touch qualifies as a flick.
pub fn flick_velocity(
    start: Vec2,
    end: Vec2,
    duration: f64,
    settings: &GestureSettings,
) -> Option<Vec2> {
    if !settings.flick_enabled || duration <= 0.0 || duration > settings.flick_max_time {
        return None;
    }
    let velocity = (end - start) / duration as f32;
    (velocity.length() >= settings.flick_min_velocity).then_some(velocity)
}

// -----------------------------------------------------------------------------
// 3. Two-Finger Rules
// -----------------------------------------------------------------------------

/// Minimum per-tick distance change that counts as a pinch.
pub fn pinch_threshold(settings: &GestureSettings) -> f32 {
    PINCH_BASE_EPSILON_PX / settings.pinch_sensitivity
}

pub fn is_pinch(delta: f32, current_distance: f32, settings: &GestureSettings) -> bool {
    delta.abs() >= pinch_threshold(settings) && current_distance >= settings.pinch_min_distance
}

// -----------------------------------------------------------------------------
// 4. Event Construction
// -----------------------------------------------------------------------------

pub fn tap_event(position: Vec2, duration: f64, distance: f32) -> GestureEvent {
    GestureEvent::Tap {
        position,
        duration,
        distance,
    }
}

pub fn swipe_event(start: Vec2, end: Vec2, duration: f64) -> GestureEvent {
    let delta = end - start;
    GestureEvent::Swipe {
        start_position: start,
        end_position: end,
        direction: delta.normalize_or_zero(),
        bucketed_direction: bucket(delta),
        distance: delta.length(),
        duration,
    }
}

pub fn long_press_event(position: Vec2, duration: f64) -> GestureEvent {
    GestureEvent::LongPress { position, duration }
}

pub fn pinch_event(delta: f32, distance: f32) -> GestureEvent {
    GestureEvent::Pinch {
        delta,
        distance,
        finger_count: 2,
    }
}

pub fn flick_event(start: Vec2, end: Vec2, velocity: Vec2) -> GestureEvent {
    GestureEvent::Flick {
        start_position: start,
        end_position: end,
        velocity,
        speed: velocity.length(),
        bucketed_direction: bucket(velocity),
    }
}
