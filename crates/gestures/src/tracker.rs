// =============================================================================
// Eustress Gestures - Touch Tracker
// =============================================================================
// Table of Contents:
// 1. Touch State
// 2. Tracker Statistics
// 3. Tracker
// 4. Per-Phase Transitions
// 5. Pinch Evaluation
// =============================================================================

use glam::Vec2;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::classifier;
use crate::diagnostics::{DiagnosticSink, LogLevel, TracingSink};
use crate::error::GestureError;
use crate::settings::GestureSettings;
use crate::types::{FingerId, GestureEvent, TouchPhase, TouchSample};

// -----------------------------------------------------------------------------
// 1. Touch State
// -----------------------------------------------------------------------------

/// Lifecycle record for one finger, from `Began` to `Ended`/`Cancelled`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchState {
    pub finger_id: FingerId,
    pub start_position: Vec2,
    pub start_time: f64,
    pub last_position: Vec2,
    pub last_time: f64,
    /// A touch emits at most one swipe
    pub swipe_already_fired: bool,
    /// A touch emits at most one long press
    pub long_press_already_fired: bool,
}

impl TouchState {
    fn begin(sample: &TouchSample) -> Self {
        Self {
            finger_id: sample.finger_id,
            start_position: sample.position,
            start_time: sample.timestamp,
            last_position: sample.position,
            last_time: sample.timestamp,
            swipe_already_fired: false,
            long_press_already_fired: false,
        }
    }

    /// Take the sample's position. Time never runs backwards: a timestamp
    /// older than the latest one seen keeps the latest.
    fn advance(&mut self, sample: &TouchSample) {
        self.last_position = sample.position;
        self.last_time = self.last_time.max(sample.timestamp);
    }

    pub fn elapsed(&self) -> f64 {
        self.last_time - self.start_time
    }

    pub fn distance(&self) -> f32 {
        self.start_position.distance(self.last_position)
    }
}

/// Two-finger distance from the previous tick, tied to the finger pair.
#[derive(Clone, Copy, Debug)]
struct PinchBaseline {
    pair: (FingerId, FingerId),
    distance: f32,
}

#[derive(Clone, Copy, Debug)]
struct LastTap {
    position: Vec2,
    time: f64,
}

// -----------------------------------------------------------------------------
// 2. Tracker Statistics
// -----------------------------------------------------------------------------

/// Counters for conditions the tracker recovers from silently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrackerStats {
    /// `Moved`/`Ended`/`Cancelled` for a finger that was never tracked
    pub stale_events_ignored: u64,
    /// `Began` for a finger that was already tracked
    pub duplicate_touches: u64,
    /// Negative finger ids or non-finite values
    pub rejected_samples: u64,
    pub gestures_emitted: u64,
}

// -----------------------------------------------------------------------------
// 3. Tracker
// -----------------------------------------------------------------------------

/// Owns one [`TouchState`] per active finger and advances them once per tick.
pub struct TouchTracker {
    /// Ordered by finger id so pinch pairing and iteration are deterministic
    states: BTreeMap<FingerId, TouchState>,
    settings: GestureSettings,
    pinch: Option<PinchBaseline>,
    last_tap: Option<LastTap>,
    stats: TrackerStats,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for TouchTracker {
    fn default() -> Self {
        Self::new(GestureSettings::default())
    }
}

impl TouchTracker {
    pub fn new(settings: GestureSettings) -> Self {
        Self::with_sink(settings, Arc::new(TracingSink))
    }

    pub fn with_sink(settings: GestureSettings, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            states: BTreeMap::new(),
            settings: settings.validated(),
            pinch: None,
            last_tap: None,
            stats: TrackerStats::default(),
            sink,
        }
    }

    /// Advance every finger by this tick's samples and return the gestures
    /// they completed, in sample order; a pinch, if any, comes last.
    pub fn update(&mut self, samples: &[TouchSample]) -> Vec<GestureEvent> {
        let mut events = Vec::new();

        for sample in samples {
            if let Err(err) = check_sample(sample) {
                self.stats.rejected_samples += 1;
                self.sink.log(LogLevel::Warning, &err.to_string());
                continue;
            }
            match sample.phase {
                TouchPhase::Began => self.handle_began(sample),
                TouchPhase::Moved | TouchPhase::Stationary => self.handle_moved(sample, &mut events),
                TouchPhase::Ended => self.handle_finished(sample, false, &mut events),
                TouchPhase::Cancelled => self.handle_finished(sample, true, &mut events),
            }
        }

        self.evaluate_pinch(&mut events);

        for event in &events {
            self.sink.log(LogLevel::Debug, &format!("Gesture detected: {event:?}"));
        }
        self.stats.gestures_emitted += events.len() as u64;
        events
    }

    /// Swap thresholds. Callers apply this between ticks, never inside one.
    pub fn set_settings(&mut self, settings: GestureSettings) {
        self.settings = settings.validated();
    }

    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    pub fn state(&self, finger_id: FingerId) -> Option<&TouchState> {
        self.states.get(&finger_id)
    }

    pub fn active_count(&self) -> usize {
        self.states.len()
    }

    pub fn stats(&self) -> TrackerStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = TrackerStats::default();
    }

    /// Forget every finger, the pinch baseline and the double-tap memory.
    pub fn reset(&mut self) {
        self.states.clear();
        self.pinch = None;
        self.last_tap = None;
    }

    // -------------------------------------------------------------------------
    // 4. Per-Phase Transitions
    // -------------------------------------------------------------------------

    fn handle_began(&mut self, sample: &TouchSample) {
        let state = TouchState::begin(sample);
        if self.states.insert(sample.finger_id, state).is_some() {
            self.stats.duplicate_touches += 1;
            let err = GestureError::DuplicateTouch {
                finger_id: sample.finger_id,
            };
            self.sink.log(LogLevel::Warning, &format!("{err}; restarting touch"));
        }
    }

    fn handle_moved(&mut self, sample: &TouchSample, events: &mut Vec<GestureEvent>) {
        let Some(state) = self.states.get_mut(&sample.finger_id) else {
            self.note_stale(sample);
            return;
        };
        state.advance(sample);

        let settings = &self.settings;
        let elapsed = state.elapsed();

        if !state.swipe_already_fired
            && classifier::is_swipe(state.start_position, state.last_position, elapsed, settings)
        {
            state.swipe_already_fired = true;
            events.push(classifier::swipe_event(
                state.start_position,
                state.last_position,
                elapsed,
            ));
        }

        if !state.long_press_already_fired
            && classifier::is_long_press(elapsed, state.distance(), settings)
        {
            state.long_press_already_fired = true;
            events.push(classifier::long_press_event(state.last_position, elapsed));
        }
    }

    fn handle_finished(&mut self, sample: &TouchSample, cancelled: bool, events: &mut Vec<GestureEvent>) {
        let Some(mut state) = self.states.remove(&sample.finger_id) else {
            self.note_stale(sample);
            return;
        };
        if cancelled {
            return;
        }
        state.advance(sample);

        let duration = state.elapsed();
        let distance = state.distance();
        let fresh = !state.swipe_already_fired && !state.long_press_already_fired;

        if fresh && classifier::is_tap(duration, distance, &self.settings) {
            events.push(classifier::tap_event(state.last_position, duration, distance));
            self.register_tap(state.last_position, state.last_time, events);
            return;
        }

        if let Some(velocity) = classifier::flick_velocity(
            state.start_position,
            state.last_position,
            duration,
            &self.settings,
        ) {
            events.push(classifier::flick_event(
                state.start_position,
                state.last_position,
                velocity,
            ));
        }
    }

    /// Pair this tap with the previous one, or remember it for the next.
    fn register_tap(&mut self, position: Vec2, time: f64, events: &mut Vec<GestureEvent>) {
        if let Some(previous) = self.last_tap.take() {
            let interval = time - previous.time;
            if classifier::is_double_tap(interval, previous.position.distance(position), &self.settings) {
                events.push(GestureEvent::DoubleTap { position, interval });
                return;
            }
        }
        self.last_tap = Some(LastTap { position, time });
    }

    fn note_stale(&mut self, sample: &TouchSample) {
        self.stats.stale_events_ignored += 1;
        let err = GestureError::StaleEvent {
            finger_id: sample.finger_id,
            phase: sample.phase,
        };
        self.sink.log(LogLevel::Debug, &err.to_string());
    }

    // -------------------------------------------------------------------------
    // 5. Pinch Evaluation
    // -------------------------------------------------------------------------

    fn evaluate_pinch(&mut self, events: &mut Vec<GestureEvent>) {
        if self.states.len() != 2 {
            self.pinch = None;
            return;
        }
        let mut fingers = self.states.values();
        let (Some(a), Some(b)) = (fingers.next(), fingers.next()) else {
            self.pinch = None;
            return;
        };
        let pair = (a.finger_id, b.finger_id);
        let current = a.last_position.distance(b.last_position);

        if let Some(baseline) = self.pinch.filter(|baseline| baseline.pair == pair) {
            let delta = current - baseline.distance;
            if classifier::is_pinch(delta, current, &self.settings) {
                events.push(classifier::pinch_event(delta, current));
            }
        }
        self.pinch = Some(PinchBaseline {
            pair,
            distance: current,
        });
    }
}

impl std::fmt::Debug for TouchTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TouchTracker")
            .field("states", &self.states)
            .field("settings", &self.settings)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

pub(crate) fn check_sample(sample: &TouchSample) -> Result<(), GestureError> {
    let reason = if sample.finger_id < 0 {
        "negative finger id"
    } else if !sample.position.is_finite() {
        "non-finite position"
    } else if !sample.timestamp.is_finite() {
        "non-finite timestamp"
    } else {
        return Ok(());
    };
    Err(GestureError::InvalidSample {
        finger_id: sample.finger_id,
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use crate::types::{GestureKind, SwipeDirection};

    const EPS: f32 = 1.0e-3;

    fn tracker() -> TouchTracker {
        TouchTracker::with_sink(GestureSettings::default(), Arc::new(crate::diagnostics::NullSink))
    }

    fn kinds(events: &[GestureEvent]) -> Vec<GestureKind> {
        events.iter().map(GestureEvent::kind).collect()
    }

    #[test]
    fn test_quick_touch_taps_on_end() {
        let mut t = tracker();
        assert!(t.update(&[TouchSample::began(0, Vec2::new(100.0, 100.0), 0.0)]).is_empty());
        assert!(t.update(&[TouchSample::moved(0, Vec2::new(105.0, 100.0), 0.05)]).is_empty());
        let events = t.update(&[TouchSample::ended(0, Vec2::new(106.0, 100.0), 0.1)]);

        assert_eq!(kinds(&events), vec![GestureKind::Tap]);
        let GestureEvent::Tap { position, duration, distance } = events[0] else {
            panic!("expected tap");
        };
        assert_eq!(position, Vec2::new(106.0, 100.0));
        assert!((duration - 0.1).abs() < 1.0e-9);
        assert!((distance - 6.0).abs() < EPS);
        assert_eq!(t.active_count(), 0);
    }

    #[test]
    fn test_cancel_never_taps() {
        let mut t = tracker();
        let events = t.update(&[
            TouchSample::began(0, Vec2::ZERO, 0.0),
            TouchSample::cancelled(0, Vec2::ZERO, 0.05),
        ]);
        assert!(events.is_empty());
        assert!(t.state(0).is_none());
    }

    #[test]
    fn test_slow_release_is_not_a_tap() {
        let mut t = tracker();
        t.update(&[TouchSample::began(0, Vec2::ZERO, 0.0)]);
        assert!(t.update(&[TouchSample::ended(0, Vec2::ZERO, 0.5)]).is_empty());
    }

    #[test]
    fn test_swipe_fires_once_while_moving() {
        let mut t = tracker();
        t.update(&[TouchSample::began(0, Vec2::ZERO, 0.0)]);
        assert!(t.update(&[TouchSample::moved(0, Vec2::new(60.0, 0.0), 0.1)]).is_empty());

        let events = t.update(&[TouchSample::moved(0, Vec2::new(120.0, 0.0), 0.2)]);
        assert_eq!(kinds(&events), vec![GestureKind::Swipe]);
        let GestureEvent::Swipe { bucketed_direction, distance, .. } = events[0] else {
            panic!("expected swipe");
        };
        assert_eq!(bucketed_direction, SwipeDirection::Right);
        assert!((distance - 120.0).abs() < EPS);

        for step in 1..10 {
            let x = 120.0 + step as f32 * 30.0;
            assert!(t.update(&[TouchSample::moved(0, Vec2::new(x, 0.0), 0.2 + step as f64 * 0.02)]).is_empty());
        }
        assert!(t.update(&[TouchSample::ended(0, Vec2::new(400.0, 0.0), 0.5)]).is_empty());
    }

    #[test]
    fn test_slow_drag_never_swipes() {
        let mut t = tracker();
        t.update(&[TouchSample::began(0, Vec2::ZERO, 0.0)]);
        assert!(t.update(&[TouchSample::moved(0, Vec2::new(0.0, 150.0), 1.2)]).is_empty());
    }

    #[test]
    fn test_long_press_fires_once_and_suppresses_tap() {
        let settings = GestureSettings {
            tap_time_threshold: 2.0,
            ..Default::default()
        };
        let mut t = TouchTracker::with_sink(settings, Arc::new(crate::diagnostics::NullSink));
        t.update(&[TouchSample::began(3, Vec2::new(50.0, 50.0), 0.0)]);
        assert!(t.update(&[TouchSample::moved(3, Vec2::new(52.0, 50.0), 0.5)]).is_empty());

        let events = t.update(&[TouchSample::moved(3, Vec2::new(53.0, 50.0), 1.0)]);
        assert_eq!(kinds(&events), vec![GestureKind::LongPress]);
        assert!(t.update(&[TouchSample::moved(3, Vec2::new(53.0, 51.0), 1.4)]).is_empty());
        // short enough for the (raised) tap threshold, but the long press already claimed it
        assert!(t.update(&[TouchSample::ended(3, Vec2::new(53.0, 51.0), 1.5)]).is_empty());
    }

    #[test]
    fn test_stationary_reaches_long_press() {
        let mut t = tracker();
        t.update(&[TouchSample::began(0, Vec2::ONE, 0.0)]);
        let events = t.update(&[TouchSample::new(0, Vec2::ONE, TouchPhase::Stationary, 1.1)]);
        assert_eq!(kinds(&events), vec![GestureKind::LongPress]);
    }

    #[test]
    fn test_moved_finger_is_not_long_press() {
        let mut t = tracker();
        t.update(&[TouchSample::began(0, Vec2::ZERO, 0.0)]);
        assert!(t.update(&[TouchSample::moved(0, Vec2::new(70.0, 0.0), 1.5)]).is_empty());
    }

    #[test]
    fn test_stale_events_ignored_and_counted() {
        let mut t = tracker();
        let events = t.update(&[
            TouchSample::moved(9, Vec2::ZERO, 0.0),
            TouchSample::ended(9, Vec2::ZERO, 0.1),
        ]);
        assert!(events.is_empty());
        assert!(t.state(9).is_none());
        assert_eq!(t.stats().stale_events_ignored, 2);
    }

    #[test]
    fn test_duplicate_began_overwrites_and_warns() {
        let sink = Arc::new(MemorySink::new(16));
        let mut t = TouchTracker::with_sink(GestureSettings::default(), sink.clone());
        t.update(&[TouchSample::began(1, Vec2::ZERO, 0.0)]);
        t.update(&[TouchSample::began(1, Vec2::new(300.0, 300.0), 2.0)]);

        let state = t.state(1).unwrap();
        assert_eq!(state.start_position, Vec2::new(300.0, 300.0));
        assert_eq!(state.start_time, 2.0);
        assert_eq!(t.stats().duplicate_touches, 1);
        assert!(sink.contains(LogLevel::Warning, "finger 1"));
    }

    #[test]
    fn test_invalid_samples_rejected() {
        let mut t = tracker();
        t.update(&[
            TouchSample::began(-1, Vec2::ZERO, 0.0),
            TouchSample::began(2, Vec2::new(f32::NAN, 0.0), 0.0),
            TouchSample::began(3, Vec2::ZERO, f64::INFINITY),
        ]);
        assert_eq!(t.active_count(), 0);
        assert_eq!(t.stats().rejected_samples, 3);
    }

    #[test]
    fn test_pinch_reports_distance_change() {
        let mut t = tracker();
        let first = t.update(&[
            TouchSample::began(0, Vec2::new(100.0, 100.0), 0.0),
            TouchSample::began(1, Vec2::new(200.0, 100.0), 0.0),
        ]);
        assert!(first.is_empty());

        let events = t.update(&[
            TouchSample::moved(0, Vec2::new(70.0, 100.0), 0.016),
            TouchSample::moved(1, Vec2::new(230.0, 100.0), 0.016),
        ]);
        assert_eq!(kinds(&events), vec![GestureKind::Pinch]);
        let GestureEvent::Pinch { delta, distance, finger_count } = events[0] else {
            panic!("expected pinch");
        };
        assert!((delta - 60.0).abs() < EPS);
        assert!((distance - 160.0).abs() < EPS);
        assert_eq!(finger_count, 2);
    }

    #[test]
    fn test_pinch_below_min_distance_is_silent() {
        let mut t = tracker();
        t.update(&[
            TouchSample::began(0, Vec2::new(0.0, 0.0), 0.0),
            TouchSample::began(1, Vec2::new(20.0, 0.0), 0.0),
        ]);
        let events = t.update(&[TouchSample::moved(1, Vec2::new(40.0, 0.0), 0.016)]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_still_fingers_never_pinch_at_extreme_sensitivity() {
        let settings = GestureSettings {
            pinch_sensitivity: f32::INFINITY,
            ..Default::default()
        };
        let mut t = TouchTracker::with_sink(settings, Arc::new(crate::diagnostics::NullSink));
        t.update(&[
            TouchSample::began(0, Vec2::new(0.0, 0.0), 0.0),
            TouchSample::began(1, Vec2::new(200.0, 0.0), 0.0),
        ]);
        for step in 1..5 {
            let now = step as f64 * 0.016;
            let events = t.update(&[
                TouchSample::new(0, Vec2::new(0.0, 0.0), TouchPhase::Stationary, now),
                TouchSample::new(1, Vec2::new(200.0, 0.0), TouchPhase::Stationary, now),
            ]);
            assert!(events.is_empty(), "unexpected {events:?}");
        }
    }

    #[test]
    fn test_pinch_baseline_resets_when_pair_changes() {
        let mut t = tracker();
        t.update(&[
            TouchSample::began(0, Vec2::new(0.0, 0.0), 0.0),
            TouchSample::began(1, Vec2::new(100.0, 0.0), 0.0),
        ]);
        // finger 1 lifts and finger 2 lands in the same tick: new pair, no pinch
        let events = t.update(&[
            TouchSample::ended(1, Vec2::new(100.0, 0.0), 0.5),
            TouchSample::began(2, Vec2::new(300.0, 0.0), 0.5),
        ]);
        assert!(events.iter().all(|e| e.kind() != GestureKind::Pinch));

        let events = t.update(&[TouchSample::moved(2, Vec2::new(320.0, 0.0), 0.516)]);
        let GestureEvent::Pinch { delta, .. } = events[0] else {
            panic!("expected pinch, got {events:?}");
        };
        assert!((delta - 20.0).abs() < EPS);
    }

    #[test]
    fn test_double_tap_opt_in() {
        let settings = GestureSettings {
            double_tap_enabled: true,
            ..Default::default()
        };
        let mut t = TouchTracker::with_sink(settings, Arc::new(crate::diagnostics::NullSink));
        t.update(&[TouchSample::began(0, Vec2::new(10.0, 10.0), 0.0)]);
        assert_eq!(kinds(&t.update(&[TouchSample::ended(0, Vec2::new(10.0, 10.0), 0.1)])), vec![GestureKind::Tap]);

        t.update(&[TouchSample::began(0, Vec2::new(14.0, 10.0), 0.3)]);
        let events = t.update(&[TouchSample::ended(0, Vec2::new(14.0, 10.0), 0.35)]);
        assert_eq!(kinds(&events), vec![GestureKind::Tap, GestureKind::DoubleTap]);

        // third tap starts a new pair
        t.update(&[TouchSample::began(0, Vec2::new(14.0, 10.0), 0.5)]);
        let events = t.update(&[TouchSample::ended(0, Vec2::new(14.0, 10.0), 0.55)]);
        assert_eq!(kinds(&events), vec![GestureKind::Tap]);
    }

    #[test]
    fn test_flick_on_fast_release() {
        let settings = GestureSettings {
            flick_enabled: true,
            ..Default::default()
        };
        let mut t = TouchTracker::with_sink(settings, Arc::new(crate::diagnostics::NullSink));
        t.update(&[TouchSample::began(0, Vec2::ZERO, 0.0)]);
        let events = t.update(&[TouchSample::moved(0, Vec2::new(0.0, -150.0), 0.1)]);
        assert_eq!(kinds(&events), vec![GestureKind::Swipe]);

        let events = t.update(&[TouchSample::ended(0, Vec2::new(0.0, -200.0), 0.15)]);
        assert_eq!(kinds(&events), vec![GestureKind::Flick]);
        let GestureEvent::Flick { speed, bucketed_direction, .. } = events[0] else {
            panic!("expected flick");
        };
        assert_eq!(bucketed_direction, SwipeDirection::Down);
        assert!(speed > 1000.0);
    }

    #[test]
    fn test_cancelled_fast_release_never_flicks() {
        let settings = GestureSettings {
            flick_enabled: true,
            ..Default::default()
        };
        let mut t = TouchTracker::with_sink(settings, Arc::new(crate::diagnostics::NullSink));
        t.update(&[TouchSample::began(0, Vec2::ZERO, 0.0)]);
        assert!(t.update(&[TouchSample::cancelled(0, Vec2::new(300.0, 0.0), 0.1)]).is_empty());
    }

    #[test]
    fn test_backwards_end_timestamp_keeps_duration_non_negative() {
        let mut t = tracker();
        t.update(&[TouchSample::began(0, Vec2::new(10.0, 10.0), 2.0)]);
        let events = t.update(&[TouchSample::ended(0, Vec2::new(11.0, 10.0), 1.5)]);

        let [GestureEvent::Tap { duration, position, .. }] = events.as_slice() else {
            panic!("expected one tap, got {events:?}");
        };
        assert_eq!(*duration, 0.0);
        assert_eq!(*position, Vec2::new(11.0, 10.0));
    }

    #[test]
    fn test_out_of_order_move_does_not_rewind_time() {
        let mut t = tracker();
        t.update(&[TouchSample::began(0, Vec2::ZERO, 0.0)]);
        t.update(&[TouchSample::moved(0, Vec2::ZERO, 0.8)]);
        t.update(&[TouchSample::moved(0, Vec2::new(1.0, 0.0), 0.4)]);
        assert_eq!(t.state(0).unwrap().last_time, 0.8);
    }

    #[test]
    fn test_reset_forgets_everything() {
        let mut t = tracker();
        t.update(&[TouchSample::began(0, Vec2::ZERO, 0.0), TouchSample::began(1, Vec2::ONE, 0.0)]);
        t.reset();
        assert_eq!(t.active_count(), 0);
        assert!(t.update(&[TouchSample::ended(0, Vec2::ZERO, 0.1)]).is_empty());
        assert_eq!(t.stats().stale_events_ignored, 1);
    }

    #[test]
    fn test_events_follow_sample_order() {
        let mut t = tracker();
        t.update(&[
            TouchSample::began(5, Vec2::new(0.0, 0.0), 0.0),
            TouchSample::began(2, Vec2::new(500.0, 500.0), 0.0),
            TouchSample::began(7, Vec2::new(900.0, 900.0), 0.0),
        ]);
        let events = t.update(&[
            TouchSample::moved(5, Vec2::new(0.0, 200.0), 0.1),
            TouchSample::ended(2, Vec2::new(500.0, 500.0), 0.1),
            TouchSample::moved(7, Vec2::new(700.0, 900.0), 0.1),
        ]);
        // fingers 5 and 7 only just became a pair, so no pinch baseline yet
        assert_eq!(
            kinds(&events),
            vec![GestureKind::Swipe, GestureKind::Tap, GestureKind::Swipe]
        );
    }
}
