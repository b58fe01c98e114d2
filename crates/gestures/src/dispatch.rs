//! # Event Dispatch
//!
//! Ordered multi-subscriber registry keyed by [`GestureKind`], plus a
//! catch-all stream that sees every event.
//!
//! Dispatch is synchronous: every subscriber has run by the time
//! [`EventDispatcher::dispatch`] returns. A subscriber that returns `Err` or
//! panics is logged at Error level and skipped; the rest still run.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use crate::diagnostics::{DiagnosticSink, LogLevel, TracingSink};
use crate::error::GestureError;
use crate::types::{GestureEvent, GestureKind};

// ============================================================================
// Subscribers
// ============================================================================

/// Receives gesture events.
pub trait GestureSubscriber {
    fn on_gesture(&mut self, event: &GestureEvent) -> anyhow::Result<()>;
}

impl<F> GestureSubscriber for F
where
    F: FnMut(&GestureEvent) -> anyhow::Result<()>,
{
    fn on_gesture(&mut self, event: &GestureEvent) -> anyhow::Result<()> {
        self(event)
    }
}

/// Handle returned on registration; the only way to unregister.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    subscriber: Box<dyn GestureSubscriber>,
}

// ============================================================================
// EventDispatcher
// ============================================================================

/// Per-kind subscriber lists plus a catch-all list, all in registration order.
pub struct EventDispatcher {
    typed: HashMap<GestureKind, Vec<Subscription>>,
    catch_all: Vec<Subscription>,
    next_id: u64,
    sink: Arc<dyn DiagnosticSink>,
}

/// Registration-side name for the same type.
pub type CallbackRegistry = EventDispatcher;

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

impl EventDispatcher {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            typed: HashMap::new(),
            catch_all: Vec::new(),
            next_id: 0,
            sink,
        }
    }

    /// Append a subscriber for one gesture kind. Existing subscribers stay.
    pub fn register<S>(&mut self, kind: GestureKind, subscriber: S) -> SubscriptionId
    where
        S: GestureSubscriber + 'static,
    {
        let subscription = self.subscription(subscriber);
        let id = subscription.id;
        self.typed.entry(kind).or_default().push(subscription);
        id
    }

    /// Append a subscriber that receives every event regardless of kind.
    pub fn register_catch_all<S>(&mut self, subscriber: S) -> SubscriptionId
    where
        S: GestureSubscriber + 'static,
    {
        let subscription = self.subscription(subscriber);
        let id = subscription.id;
        self.catch_all.push(subscription);
        id
    }

    /// Remove the subscriber registered for `kind` under `id`.
    pub fn unregister(&mut self, kind: GestureKind, id: SubscriptionId) -> bool {
        self.typed
            .get_mut(&kind)
            .is_some_and(|list| remove_by_id(list, id))
    }

    pub fn unregister_catch_all(&mut self, id: SubscriptionId) -> bool {
        remove_by_id(&mut self.catch_all, id)
    }

    pub fn subscriber_count(&self, kind: GestureKind) -> usize {
        self.typed.get(&kind).map_or(0, Vec::len)
    }

    pub fn catch_all_count(&self) -> usize {
        self.catch_all.len()
    }

    pub fn clear(&mut self) {
        self.typed.clear();
        self.catch_all.clear();
    }

    /// Deliver one event: typed subscribers first, then the catch-all stream.
    ///
    /// Returns how many subscribers failed.
    pub fn dispatch(&mut self, event: &GestureEvent) -> usize {
        let kind = event.kind();
        let mut failures = 0;

        if let Some(list) = self.typed.get_mut(&kind) {
            failures += deliver(list, event, self.sink.as_ref());
        }
        failures += deliver(&mut self.catch_all, event, self.sink.as_ref());
        failures
    }

    /// Deliver a tick's events in order.
    pub fn dispatch_all(&mut self, events: &[GestureEvent]) -> usize {
        events.iter().map(|event| self.dispatch(event)).sum()
    }

    fn subscription<S>(&mut self, subscriber: S) -> Subscription
    where
        S: GestureSubscriber + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        Subscription {
            id,
            subscriber: Box::new(subscriber),
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let typed: HashMap<_, _> = self.typed.iter().map(|(k, v)| (*k, v.len())).collect();
        f.debug_struct("EventDispatcher")
            .field("typed", &typed)
            .field("catch_all", &self.catch_all.len())
            .finish_non_exhaustive()
    }
}

fn remove_by_id(list: &mut Vec<Subscription>, id: SubscriptionId) -> bool {
    let before = list.len();
    list.retain(|s| s.id != id);
    list.len() != before
}

fn deliver(list: &mut [Subscription], event: &GestureEvent, sink: &dyn DiagnosticSink) -> usize {
    let mut failures = 0;
    for subscription in list.iter_mut() {
        let outcome = catch_unwind(AssertUnwindSafe(|| subscription.subscriber.on_gesture(event)));
        let message = match outcome {
            Ok(Ok(())) => continue,
            Ok(Err(err)) => format!("{err:#}"),
            Err(payload) => panic_message(payload.as_ref()),
        };
        failures += 1;
        let err = GestureError::Subscriber {
            kind: event.kind(),
            message,
        };
        sink.log(LogLevel::Error, &err.to_string());
    }
    failures
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        format!("panicked: {text}")
    } else if let Some(text) = payload.downcast_ref::<String>() {
        format!("panicked: {text}")
    } else {
        "panicked".to_string()
    }
}
