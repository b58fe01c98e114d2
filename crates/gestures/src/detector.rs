//! # Gesture Detector
//!
//! Per-tick facade: tracker, history store and dispatcher driven by one call.
//!
//! ## Table of Contents
//! - **GestureDetector**: `update(samples)` once per host frame
//! - **GestureDetectorBuilder**: settings / clock / sink injection

use std::path::PathBuf;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::diagnostics::{DiagnosticSink, LogLevel, TracingSink};
use crate::dispatch::{EventDispatcher, GestureSubscriber, SubscriptionId};
use crate::error::{GestureError, GestureResult};
use crate::history::TouchHistoryStore;
use crate::settings::GestureSettings;
use crate::tracker::{self, TouchTracker, TrackerStats};
use crate::types::{GestureEvent, GestureKind, TouchSample};

// ============================================================================
// GestureDetector
// ============================================================================

/// Turns each tick's touch samples into dispatched gesture events.
///
/// Single-threaded. The host calls [`update`](Self::update) once per frame;
/// classification, eviction and dispatch for that frame finish before it
/// returns.
pub struct GestureDetector {
    tracker: TouchTracker,
    history: TouchHistoryStore,
    dispatcher: EventDispatcher,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn DiagnosticSink>,
    /// Applied at the start of the next tick
    pending_settings: Option<GestureSettings>,
    enabled: bool,
}

impl GestureDetector {
    /// Detector with the system clock and `tracing` diagnostics.
    pub fn new(settings: GestureSettings) -> Self {
        Self::assemble(settings, Arc::new(SystemClock::new()), Arc::new(TracingSink))
    }

    pub fn builder() -> GestureDetectorBuilder {
        GestureDetectorBuilder::new()
    }

    fn assemble(settings: GestureSettings, clock: Arc<dyn Clock>, sink: Arc<dyn DiagnosticSink>) -> Self {
        let settings = settings.validated();
        let history = TouchHistoryStore::with_timeouts(
            clock.clone(),
            settings.touch_history_timeout,
            settings.cleanup_interval,
        );
        let detector = Self {
            tracker: TouchTracker::with_sink(settings, sink.clone()),
            history,
            dispatcher: EventDispatcher::new(sink.clone()),
            clock,
            sink,
            pending_settings: None,
            enabled: true,
        };
        detector.sink.log(LogLevel::Info, "GestureDetector initialized");
        detector
    }

    /// Run one tick. Events are dispatched before this returns and are also
    /// handed back in the same order.
    pub fn update(&mut self, samples: &[TouchSample]) -> Vec<GestureEvent> {
        self.apply_pending_settings();
        if !self.enabled {
            return Vec::new();
        }

        for sample in samples {
            if tracker::check_sample(sample).is_ok() {
                self.history.record(sample);
            }
        }

        let events = self.tracker.update(samples);

        let evicted = self.history.cleanup(self.clock.now());
        if evicted > 0 {
            self.sink
                .log(LogLevel::Debug, &format!("Touch history cleanup evicted {evicted} record(s)"));
        }

        self.dispatcher.dispatch_all(&events);
        events
    }

    // ------------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------------

    /// Queue new settings; they take effect at the start of the next tick.
    pub fn update_settings(&mut self, settings: GestureSettings) {
        self.pending_settings = Some(settings.validated());
    }

    /// Settings in effect for the current tick.
    pub fn settings(&self) -> &GestureSettings {
        self.tracker.settings()
    }

    fn apply_pending_settings(&mut self) {
        let Some(settings) = self.pending_settings.take() else {
            return;
        };
        self.history
            .set_timeouts(settings.touch_history_timeout, settings.cleanup_interval);
        self.tracker.set_settings(settings);
        self.sink.log(LogLevel::Info, "Gesture settings updated");
    }

    // ------------------------------------------------------------------------
    // Enable / Disable
    // ------------------------------------------------------------------------

    /// While disabled, samples are ignored and nothing is emitted. Disabling
    /// drops every in-flight touch so nothing fires after re-enabling.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.tracker.reset();
        }
        let state = if enabled { "enabled" } else { "disabled" };
        self.sink.log(LogLevel::Info, &format!("Gesture detection {state}"));
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    // ------------------------------------------------------------------------
    // Subscribers
    // ------------------------------------------------------------------------

    pub fn register<S>(&mut self, kind: GestureKind, subscriber: S) -> SubscriptionId
    where
        S: GestureSubscriber + 'static,
    {
        self.dispatcher.register(kind, subscriber)
    }

    pub fn register_catch_all<S>(&mut self, subscriber: S) -> SubscriptionId
    where
        S: GestureSubscriber + 'static,
    {
        self.dispatcher.register_catch_all(subscriber)
    }

    pub fn unregister(&mut self, kind: GestureKind, id: SubscriptionId) -> bool {
        self.dispatcher.unregister(kind, id)
    }

    pub fn unregister_catch_all(&mut self, id: SubscriptionId) -> bool {
        self.dispatcher.unregister_catch_all(id)
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn tracker(&self) -> &TouchTracker {
        &self.tracker
    }

    pub fn history(&self) -> &TouchHistoryStore {
        &self.history
    }

    pub fn stats(&self) -> TrackerStats {
        self.tracker.stats()
    }

    /// Drop all touch state and history. Subscribers and settings stay.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.history.clear();
    }
}

impl std::fmt::Debug for GestureDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureDetector")
            .field("tracker", &self.tracker)
            .field("history", &self.history)
            .field("dispatcher", &self.dispatcher)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// GestureDetectorBuilder
// ============================================================================

/// Builder for [`GestureDetector`]. Settings are mandatory.
#[derive(Default)]
pub struct GestureDetectorBuilder {
    settings: Option<GestureSettings>,
    settings_path: Option<PathBuf>,
    clock: Option<Arc<dyn Clock>>,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl GestureDetectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(mut self, settings: GestureSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Load settings from a TOML file at build time. Ignored if
    /// [`settings`](Self::settings) was also given.
    pub fn settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = Some(path.into());
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> GestureResult<GestureDetector> {
        let settings = match (self.settings, self.settings_path) {
            (Some(settings), _) => settings,
            (None, Some(path)) => GestureSettings::load(&path).map_err(|err| {
                GestureError::Configuration(format!(
                    "failed to load gesture settings from {}: {err}",
                    path.display()
                ))
            })?,
            (None, None) => {
                return Err(GestureError::Configuration(
                    "gesture settings were not provided".to_string(),
                ))
            }
        };
        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock::new()),
        };
        let sink: Arc<dyn DiagnosticSink> = match self.sink {
            Some(sink) => sink,
            None => Arc::new(TracingSink),
        };
        Ok(GestureDetector::assemble(settings, clock, sink))
    }
}
