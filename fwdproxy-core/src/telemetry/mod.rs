//! Telemetry for fwdproxy.
//!
//! Diagnostics are emitted with [`tracing`]. Components that produce
//! domain events (e.g. the forward proxy connector) do not reach for a
//! global logger directly: they are handed an [`EventLog`], which can be
//! a [`TracingEventLog`] (the default), the no-op `()` log, or a
//! [`RecordingEventLog`] when you want to inspect events yourself.

pub mod tracing {
    //! [`tracing`](https://docs.rs/tracing) re-export, for your convenience.

    #[doc(inline)]
    pub use ::tracing::*;
}

use parking_lot::Mutex;
use std::{fmt, sync::Arc};

/// An event that knows how to describe itself to `tracing`.
pub trait TraceEvent {
    /// Emit this event as a `tracing` event.
    fn trace(&self);
}

/// An injectable collaborator receiving structured events of type `E`.
pub trait EventLog<E>: Send + Sync + 'static {
    /// Record a single event.
    fn record(&self, event: &E);
}

impl<E> EventLog<E> for () {
    #[inline(always)]
    fn record(&self, _event: &E) {}
}

impl<E, L> EventLog<E> for Arc<L>
where
    L: EventLog<E>,
{
    #[inline]
    fn record(&self, event: &E) {
        (**self).record(event)
    }
}

#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
/// An [`EventLog`] which emits every event via `tracing`.
pub struct TracingEventLog;

impl TracingEventLog {
    /// Create a new [`TracingEventLog`].
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<E: TraceEvent> EventLog<E> for TracingEventLog {
    #[inline]
    fn record(&self, event: &E) {
        event.trace()
    }
}

/// An [`EventLog`] keeping a clone of every event it received.
pub struct RecordingEventLog<E> {
    events: Mutex<Vec<E>>,
}

impl<E> RecordingEventLog<E> {
    /// Create a new empty [`RecordingEventLog`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Take all events recorded so far, leaving the log empty.
    pub fn take(&self) -> Vec<E> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Amount of events currently recorded.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns true if no events are recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl<E: Clone> RecordingEventLog<E> {
    /// Snapshot of all events recorded so far.
    pub fn events(&self) -> Vec<E> {
        self.events.lock().clone()
    }
}

impl<E> Default for RecordingEventLog<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for RecordingEventLog<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingEventLog")
            .field("events", &*self.events.lock())
            .finish()
    }
}

impl<E> EventLog<E> for RecordingEventLog<E>
where
    E: Clone + Send + 'static,
{
    fn record(&self, event: &E) {
        self.events.lock().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::{Arc, EventLog, RecordingEventLog, TraceEvent, TracingEventLog};
    use tracing_test::traced_test;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Ping(u8);

    impl TraceEvent for Ping {
        fn trace(&self) {
            tracing::debug!(ping.id = self.0, "ping received");
        }
    }

    #[test]
    fn recording_log_keeps_events_in_order() {
        let log = RecordingEventLog::new();
        log.record(&Ping(1));
        log.record(&Ping(2));
        assert_eq!(log.len(), 2);
        assert_eq!(log.events(), vec![Ping(1), Ping(2)]);
        assert_eq!(log.take(), vec![Ping(1), Ping(2)]);
        assert!(log.is_empty());
    }

    #[test]
    fn shared_recording_log() {
        let log = Arc::new(RecordingEventLog::new());
        let shared = log.clone();
        shared.record(&Ping(3));
        assert_eq!(log.events(), vec![Ping(3)]);
    }

    #[test]
    fn noop_log_accepts_anything() {
        ().record(&Ping(4));
    }

    #[test]
    #[traced_test]
    fn tracing_log_emits_events() {
        TracingEventLog::new().record(&Ping(5));
        assert!(logs_contain("ping received"));
    }
}
