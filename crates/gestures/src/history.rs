//! # Touch History
//!
//! Per-finger first-seen / last-seen bookkeeping with interval-gated eviction.
//!
//! The store never gates gesture dispatch. It answers analytics and debug
//! queries ("how long has finger 2 been down, how far has it travelled")
//! and forgets fingers that stopped reporting. Time comes from the injected
//! [`Clock`], so tests drive eviction with a [`ManualClock`](crate::ManualClock).

use glam::Vec2;
use std::collections::HashMap;
use std::sync::Arc;

use crate::clock::Clock;
use crate::settings::defaults;
use crate::types::{FingerId, TouchSample};

// ============================================================================
// TouchHistoryRecord
// ============================================================================

/// First and last sighting of one finger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchHistoryRecord {
    pub start_time: f64,
    pub start_position: Vec2,
    pub last_position: Vec2,
    pub last_update_time: f64,
}

impl TouchHistoryRecord {
    pub fn duration(&self) -> f64 {
        self.last_update_time - self.start_time
    }

    pub fn distance(&self) -> f32 {
        self.start_position.distance(self.last_position)
    }

    /// Unit vector from first to last position, zero if the finger never moved.
    pub fn direction(&self) -> Vec2 {
        (self.last_position - self.start_position).normalize_or_zero()
    }
}

// ============================================================================
// TouchHistoryStore
// ============================================================================

/// Owned history table keyed by finger id.
pub struct TouchHistoryStore {
    records: HashMap<FingerId, TouchHistoryRecord>,
    clock: Arc<dyn Clock>,
    /// Idle time after which a record is evicted
    timeout: f64,
    /// Minimum time between cleanup passes
    cleanup_interval: f64,
    last_cleanup_time: f64,
}

impl TouchHistoryStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_timeouts(clock, defaults::TOUCH_HISTORY_TIMEOUT, defaults::CLEANUP_INTERVAL)
    }

    pub fn with_timeouts(clock: Arc<dyn Clock>, timeout: f64, cleanup_interval: f64) -> Self {
        let last_cleanup_time = clock.now();
        Self {
            records: HashMap::new(),
            clock,
            timeout,
            cleanup_interval,
            last_cleanup_time,
        }
    }

    /// Change eviction timing; takes effect on the next cleanup call.
    pub fn set_timeouts(&mut self, timeout: f64, cleanup_interval: f64) {
        self.timeout = timeout;
        self.cleanup_interval = cleanup_interval;
    }

    /// Upsert the record for `sample.finger_id`, stamped with the clock's time.
    pub fn record(&mut self, sample: &TouchSample) {
        let now = self.clock.now();
        self.records
            .entry(sample.finger_id)
            .and_modify(|record| {
                record.last_position = sample.position;
                record.last_update_time = now;
            })
            .or_insert(TouchHistoryRecord {
                start_time: now,
                start_position: sample.position,
                last_position: sample.position,
                last_update_time: now,
            });
    }

    /// Evict idle records, at most once per cleanup interval.
    ///
    /// Returns the number of records removed (zero when the pass was skipped).
    pub fn cleanup(&mut self, now: f64) -> usize {
        if now - self.last_cleanup_time <= self.cleanup_interval {
            return 0;
        }
        self.last_cleanup_time = now;

        let before = self.records.len();
        let timeout = self.timeout;
        self.records
            .retain(|_, record| now - record.last_update_time <= timeout);
        before - self.records.len()
    }

    pub fn get(&self, finger_id: FingerId) -> Option<TouchHistoryRecord> {
        self.records.get(&finger_id).copied()
    }

    pub fn active_count(&self) -> usize {
        self.records.len()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    pub fn last_cleanup_time(&self) -> f64 {
        self.last_cleanup_time
    }
}

impl std::fmt::Debug for TouchHistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TouchHistoryStore")
            .field("records", &self.records)
            .field("timeout", &self.timeout)
            .field("cleanup_interval", &self.cleanup_interval)
            .field("last_cleanup_time", &self.last_cleanup_time)
            .finish()
    }
}
