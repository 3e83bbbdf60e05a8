//! Broadcast metrics tracking using OpenTelemetry.

use opentelemetry::metrics::{Counter, Gauge, Histogram, Meter};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for subject broadcasts.
///
/// # Examples
///
/// ```rust,no_run
/// use pattern_demos::metrics::NotifyMetrics;
/// use opentelemetry::global;
///
/// let metrics = NotifyMetrics::new(global::meter("pattern-demos"));
///
/// let timer = metrics.start_broadcast();
/// // ... invoke subscribers ...
/// metrics.record_broadcast(timer, 3);
/// ```
#[derive(Clone)]
pub struct NotifyMetrics {
    broadcasts: Counter<u64>,
    reactions: Counter<u64>,
    failures: Counter<u64>,
    broadcast_duration: Histogram<f64>,
    active_subscribers: Gauge<i64>,
    idle_seconds: Gauge<i64>,
    last_broadcast: Arc<parking_lot::Mutex<Instant>>,
}

impl NotifyMetrics {
    /// Create a new metrics collector with the provided meter.
    pub fn new(meter: Meter) -> Self {
        let broadcasts = meter
            .u64_counter("pattern_demos.broadcast.count")
            .with_description("Total number of broadcasts started")
            .build();

        let reactions = meter
            .u64_counter("pattern_demos.broadcast.reactions")
            .with_description("Number of subscriber reactions invoked")
            .build();

        let failures = meter
            .u64_counter("pattern_demos.broadcast.failures")
            .with_description("Number of subscriber reactions that failed")
            .build();

        let broadcast_duration = meter
            .f64_histogram("pattern_demos.broadcast.duration")
            .with_description("Duration of broadcasts in seconds")
            .with_unit("s")
            .build();

        let active_subscribers = meter
            .i64_gauge("pattern_demos.subscribers.active")
            .with_description("Number of registered subscribers")
            .build();

        let idle_seconds = meter
            .i64_gauge("pattern_demos.broadcast.idle")
            .with_description("Idle time before the latest broadcast in seconds")
            .with_unit("s")
            .build();

        Self {
            broadcasts,
            reactions,
            failures,
            broadcast_duration,
            active_subscribers,
            idle_seconds,
            last_broadcast: Arc::new(parking_lot::Mutex::new(Instant::now())),
        }
    }

    /// Count a broadcast, record how long the subject sat idle before it,
    /// and start its timer.
    ///
    /// Pass the returned `Instant` to `record_broadcast` once the broadcast
    /// ends, whether or not it succeeded.
    pub fn start_broadcast(&self) -> Instant {
        self.broadcasts.add(1, &[]);
        self.idle_seconds
            .record(self.idle_time().as_secs() as i64, &[]);
        Instant::now()
    }

    /// Record the end of a broadcast that invoked `reactions` subscribers.
    pub fn record_broadcast(&self, start: Instant, reactions: usize) {
        self.reactions.add(reactions as u64, &[]);
        self.broadcast_duration
            .record(start.elapsed().as_secs_f64(), &[]);
        *self.last_broadcast.lock() = Instant::now();
    }

    /// Record one failed reaction.
    pub fn record_failure(&self) {
        self.failures.add(1, &[]);
    }

    /// Update the number of registered subscribers.
    pub fn update_subscriber_count(&self, count: i64) {
        self.active_subscribers.record(count, &[]);
    }

    /// Time since the last completed broadcast, or since creation if there
    /// has been none.
    pub fn idle_time(&self) -> Duration {
        self.last_broadcast.lock().elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ObserverError;
    use crate::observer::{FnObserver, Observable, Subject};
    use opentelemetry::global;
    use std::rc::Rc;

    #[test]
    fn test_idle_time_resets_after_broadcast() {
        let metrics = NotifyMetrics::new(global::meter("test"));
        std::thread::sleep(Duration::from_millis(20));
        let idle = metrics.idle_time();
        assert!(idle >= Duration::from_millis(20));

        let timer = metrics.start_broadcast();
        metrics.record_failure();
        metrics.record_broadcast(timer, 2);
        metrics.update_subscriber_count(2);

        assert!(metrics.idle_time() < idle);
    }

    #[test]
    fn test_subject_with_metrics_still_notifies() {
        let mut subject = Subject::new().with_metrics(NotifyMetrics::new(global::meter("test")));
        subject.subscribe(|| {});
        subject.add_observer(Rc::new(FnObserver::new(|| Err(ObserverError::new("x")))));

        assert!(subject.notify_observers().is_err());
        assert_eq!(subject.notify_isolated().failures.len(), 1);
    }

    #[test]
    fn test_aborted_broadcast_still_marks_activity() {
        let metrics = NotifyMetrics::new(global::meter("test"));
        let mut subject = Subject::new().with_metrics(metrics.clone());
        let calls = Rc::new(std::cell::Cell::new(0));

        let first = Rc::clone(&calls);
        subject.subscribe(move || first.set(first.get() + 1));
        let bad = subject.add_observer(Rc::new(FnObserver::new(|| Err(ObserverError::new("x")))));
        let last = Rc::clone(&calls);
        subject.subscribe(move || last.set(last.get() + 1));

        std::thread::sleep(Duration::from_millis(20));
        let idle = metrics.idle_time();

        match subject.notify_observers() {
            Err(crate::error::PatternError::ObserverFailed { id, .. }) => assert_eq!(id, bad),
            other => panic!("expected fail-fast error, got {:?}", other),
        }
        assert_eq!(calls.get(), 1);
        assert!(metrics.idle_time() < idle);
    }

    #[test]
    fn test_last_broadcast_is_shared_between_clones() {
        let metrics = NotifyMetrics::new(global::meter("test"));
        let clone = metrics.clone();

        let before = *metrics.last_broadcast.lock();
        std::thread::sleep(Duration::from_millis(5));
        let timer = clone.start_broadcast();
        clone.record_broadcast(timer, 0);

        assert!(*metrics.last_broadcast.lock() > before);
    }
}
