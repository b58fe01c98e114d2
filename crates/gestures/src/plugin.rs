// =============================================================================
// Eustress Gestures - Bevy Integration
// =============================================================================
// Table of Contents:
// 1. Plugin Definition
// 2. Recognizer Resource
// 3. Gesture Detection System
// =============================================================================
//
// Bevy systems take the place of subscribers here: read `GestureMessage`
// with a `MessageReader` instead of registering callbacks.
//
// Needs `InputPlugin` (part of `DefaultPlugins`) for `TouchInput` and
// `Touches`.

use bevy::input::touch::{Touch, TouchInput, TouchPhase as BevyTouchPhase, Touches};
use bevy::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

use crate::clock::ManualClock;
use crate::history::TouchHistoryStore;
use crate::settings::GestureSettings;
use crate::tracker::{self, TouchTracker};
use crate::types::{FingerId, GestureEvent, TouchPhase, TouchSample};

// -----------------------------------------------------------------------------
// 1. Plugin Definition
// -----------------------------------------------------------------------------

/// Plugin for recognizing multi-touch gestures from Bevy `TouchInput`.
#[derive(Default)]
pub struct GesturePlugin {
    pub settings: GestureSettings,
}

impl Plugin for GesturePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GestureRecognizer::new(self.settings.clone()))
            .add_message::<GestureMessage>()
            .add_systems(Update, detect_gestures);
    }
}

/// A recognized gesture.
///
/// Positions are in y-up space: Bevy's window y is negated so that
/// `SwipeDirection::Up` means "towards the top of the screen".
#[derive(Message, Clone, Debug, PartialEq)]
pub struct GestureMessage(pub GestureEvent);

// -----------------------------------------------------------------------------
// 2. Recognizer Resource
// -----------------------------------------------------------------------------

/// Tracker and history driven by the frame clock.
#[derive(Resource)]
pub struct GestureRecognizer {
    pub tracker: TouchTracker,
    pub history: TouchHistoryStore,
    clock: ManualClock,
    pending_settings: Option<GestureSettings>,
}

impl GestureRecognizer {
    pub fn new(settings: GestureSettings) -> Self {
        let settings = settings.validated();
        let clock = ManualClock::new(0.0);
        Self {
            history: TouchHistoryStore::with_timeouts(
                Arc::new(clock.clone()),
                settings.touch_history_timeout,
                settings.cleanup_interval,
            ),
            tracker: TouchTracker::new(settings),
            clock,
            pending_settings: None,
        }
    }

    /// Queue new settings for the next frame.
    pub fn update_settings(&mut self, settings: GestureSettings) {
        self.pending_settings = Some(settings.validated());
    }

    fn update(&mut self, now: f64, samples: &[TouchSample]) -> Vec<GestureEvent> {
        if let Some(settings) = self.pending_settings.take() {
            self.history
                .set_timeouts(settings.touch_history_timeout, settings.cleanup_interval);
            self.tracker.set_settings(settings);
        }
        self.clock.set(now);

        for sample in samples {
            if tracker::check_sample(sample).is_ok() {
                self.history.record(sample);
            }
        }
        let events = self.tracker.update(samples);
        self.history.cleanup(now);
        events
    }
}

// -----------------------------------------------------------------------------
// 3. Gesture Detection System
// -----------------------------------------------------------------------------

/// Detect gestures from touch input.
///
/// Bevy only sends `TouchInput` when a finger changes, so every pressed
/// finger without a message this frame is reported as `Stationary`. That
/// keeps a held finger's time moving towards a long press.
fn detect_gestures(
    mut touch_events: MessageReader<TouchInput>,
    touches: Res<Touches>,
    mut recognizer: ResMut<GestureRecognizer>,
    mut gestures: MessageWriter<GestureMessage>,
    time: Res<Time>,
) {
    let now = time.elapsed_secs_f64();
    let mut samples: Vec<TouchSample> = touch_events
        .read()
        .filter_map(|touch| to_sample(touch, now))
        .collect();

    let reported: HashSet<FingerId> = samples.iter().map(|s| s.finger_id).collect();
    let mut held: Vec<TouchSample> = touches
        .iter()
        .filter_map(|touch| held_sample(touch, now))
        .filter(|sample| !reported.contains(&sample.finger_id))
        .collect();
    // `Touches` iterates in hash order
    held.sort_by_key(|sample| sample.finger_id);
    samples.extend(held);

    for event in recognizer.update(now, &samples) {
        gestures.write(GestureMessage(event));
    }
}

/// Convert one Bevy touch. Ids that do not fit a `FingerId` are dropped.
fn to_sample(touch: &TouchInput, now: f64) -> Option<TouchSample> {
    let finger_id = FingerId::try_from(touch.id).ok()?;
    let phase = match touch.phase {
        BevyTouchPhase::Started => TouchPhase::Began,
        BevyTouchPhase::Moved => TouchPhase::Moved,
        BevyTouchPhase::Ended => TouchPhase::Ended,
        BevyTouchPhase::Canceled => TouchPhase::Cancelled,
    };
    Some(TouchSample::new(finger_id, flip_y(touch.position), phase, now))
}

/// A pressed finger that sent nothing this frame.
fn held_sample(touch: &Touch, now: f64) -> Option<TouchSample> {
    let finger_id = FingerId::try_from(touch.id()).ok()?;
    Some(TouchSample::new(
        finger_id,
        flip_y(touch.position()),
        TouchPhase::Stationary,
        now,
    ))
}

fn flip_y(position: Vec2) -> Vec2 {
    Vec2::new(position.x, -position.y)
}
