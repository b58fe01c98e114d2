//! # Eustress Gestures
//!
//! Touch gesture recognition for Eustress games.
//!
//! Feed one batch of [`TouchSample`]s per frame into a [`GestureDetector`];
//! it classifies each finger and hands the resulting [`GestureEvent`]s to
//! every subscriber registered for that [`GestureKind`] (plus catch-all
//! subscribers) before returning.
//!
//! ## Architecture
//!
//! ```text
//! host input ──► GestureDetector::update(samples)
//!                 ├── TouchHistoryStore   record + interval-gated eviction
//!                 ├── TouchTracker        per-finger state machine
//!                 │    └── classifier     tap / swipe / long press / pinch rules
//!                 └── EventDispatcher     typed subscribers, then catch-all
//! ```
//!
//! ## Gestures
//!
//! | Gesture   | Fires                                                  |
//! |-----------|--------------------------------------------------------|
//! | Tap       | on `Ended`, short and still                            |
//! | Swipe     | during `Moved`, once per touch                         |
//! | LongPress | during `Moved`/`Stationary`, once per touch            |
//! | Pinch     | end of tick, exactly two fingers                       |
//! | DoubleTap | after the second close Tap (`double_tap_enabled`)      |
//! | Flick     | on `Ended`, fast release (`flick_enabled`)             |
//!
//! `Cancelled` never produces a gesture; it only tears the touch down.
//!
//! ## Example
//!
//! ```
//! use eustress_gestures::{GestureDetector, GestureEvent, GestureKind, GestureSettings, TouchSample};
//! use glam::Vec2;
//!
//! let mut detector = GestureDetector::new(GestureSettings::default());
//! detector.register(GestureKind::Tap, |event: &GestureEvent| -> anyhow::Result<()> {
//!     println!("tap: {event:?}");
//!     Ok(())
//! });
//!
//! detector.update(&[TouchSample::began(0, Vec2::new(10.0, 10.0), 0.0)]);
//! let events = detector.update(&[TouchSample::ended(0, Vec2::new(12.0, 10.0), 0.1)]);
//! assert_eq!(events[0].kind(), GestureKind::Tap);
//! ```

pub mod classifier;
pub mod clock;
pub mod diagnostics;
pub mod dispatch;
pub mod history;
pub mod settings;
pub mod tracker;
pub mod types;

#[cfg(feature = "bevy")]
pub mod plugin;

mod detector;
mod error;

// Re-exports
pub use clock::{Clock, ManualClock, SystemClock};
pub use detector::{GestureDetector, GestureDetectorBuilder};
pub use diagnostics::{DiagnosticSink, LogEntry, LogLevel, MemorySink, NullSink, TracingSink};
pub use dispatch::{CallbackRegistry, EventDispatcher, GestureSubscriber, SubscriptionId};
pub use error::{GestureError, GestureResult};
pub use history::{TouchHistoryRecord, TouchHistoryStore};
pub use settings::GestureSettings;
pub use tracker::{TouchState, TouchTracker, TrackerStats};
pub use types::{FingerId, GestureEvent, GestureKind, SwipeDirection, TouchPhase, TouchSample};

#[cfg(feature = "bevy")]
pub use plugin::{GestureMessage, GesturePlugin, GestureRecognizer};
