//! Ordered subscriber registry with synchronous broadcast.

use super::subscriber::{FnObserver, Observer};
use crate::error::{ObserverError, PatternError, Result};
use serde::Deserialize;
use std::fmt;
use std::rc::Rc;

#[cfg(feature = "metrics")]
use crate::metrics::NotifyMetrics;

/// Token returned when a subscriber is registered.
///
/// Ids are handed out from a counter that only moves forward, so a token is
/// never reused within one subject, even after its entry is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a broadcast treats a failing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMode {
    /// Stop at the first failing subscriber and return its error.
    #[default]
    FailFast,
    /// Keep going past failures and report all of them afterwards.
    Isolated,
}

/// A subscriber failure recorded during an isolated broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserverFailure {
    /// Subscription whose reaction failed
    pub id: SubscriptionId,
    /// The error the reaction returned
    pub error: ObserverError,
}

impl fmt::Display for ObserverFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer {}: {}", self.id, self.error)
    }
}

/// Outcome of one broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifyReport {
    /// Number of reactions that were invoked (successful or not).
    pub notified: usize,
    /// Failures in registration order.
    pub failures: Vec<ObserverFailure>,
}

impl NotifyReport {
    /// True when every invoked reaction succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Convert into an error if any reaction failed.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::BroadcastFailures` carrying every failure.
    pub fn into_result(self) -> Result<usize> {
        if self.failures.is_empty() {
            Ok(self.notified)
        } else {
            Err(PatternError::BroadcastFailures(self.failures))
        }
    }
}

/// The three operations every subject offers.
pub trait Observable {
    /// Append a subscriber. Duplicates are allowed and are notified once per
    /// registration.
    fn add_observer(&mut self, observer: Rc<dyn Observer>) -> SubscriptionId;

    /// Remove the registration identified by `id`.
    ///
    /// Returns `false` and leaves the registry untouched when `id` is not
    /// registered.
    fn remove_observer(&mut self, id: SubscriptionId) -> bool;

    /// Invoke every subscriber in registration order, stopping at the first
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns `PatternError::ObserverFailed` for the first reaction that
    /// fails. Subscribers after it are not invoked.
    fn notify_observers(&self) -> Result<()>;
}

/// Registry of subscribers that broadcasts a zero-argument signal.
///
/// The registry is single-threaded: subscribers are held as `Rc` and every
/// broadcast runs to completion on the calling thread.
///
/// # Examples
///
/// ```rust
/// use pattern_demos::observer::{Observable, Subject};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let mut subject = Subject::new();
/// let hits = Rc::new(Cell::new(0));
///
/// let hits_clone = Rc::clone(&hits);
/// let id = subject.subscribe(move || hits_clone.set(hits_clone.get() + 1));
///
/// subject.notify_observers().unwrap();
/// assert_eq!(hits.get(), 1);
///
/// subject.remove_observer(id);
/// subject.notify_observers().unwrap();
/// assert_eq!(hits.get(), 1);
/// ```
pub struct Subject {
    observers: Vec<(SubscriptionId, Rc<dyn Observer>)>,
    next_id: u64,
    #[cfg(feature = "metrics")]
    metrics: Option<NotifyMetrics>,
}

impl Subject {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
            #[cfg(feature = "metrics")]
            metrics: None,
        }
    }

    /// Attach a metrics collector that records every broadcast.
    #[cfg(feature = "metrics")]
    pub fn with_metrics(mut self, metrics: NotifyMetrics) -> Self {
        metrics.update_subscriber_count(self.observers.len() as i64);
        self.metrics = Some(metrics);
        self
    }

    /// Register an inline subscriber that cannot fail.
    pub fn subscribe<F>(&mut self, reaction: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.add_observer(Rc::new(FnObserver::infallible(reaction)))
    }

    /// Remove the first registration of this exact subscriber instance.
    ///
    /// Instances are compared by allocation, not by value. When the same
    /// instance was added several times only the earliest entry is removed.
    pub fn remove_instance(&mut self, observer: &Rc<dyn Observer>) -> bool {
        let position = self
            .observers
            .iter()
            .position(|(_, registered)| {
                std::ptr::addr_eq(Rc::as_ptr(registered), Rc::as_ptr(observer))
            });

        match position {
            Some(index) => {
                let (id, _) = self.observers.remove(index);
                self.after_removal(id);
                true
            }
            None => false,
        }
    }

    /// Number of registrations, counting duplicates.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Registration tokens in notification order.
    pub fn subscription_ids(&self) -> Vec<SubscriptionId> {
        self.observers.iter().map(|(id, _)| *id).collect()
    }

    /// Invoke every subscriber, even after some of them fail.
    ///
    /// Failures are collected in registration order instead of aborting the
    /// broadcast.
    pub fn notify_isolated(&self) -> NotifyReport {
        #[cfg(feature = "metrics")]
        let timer = self.metrics.as_ref().map(|m| m.start_broadcast());

        let mut report = NotifyReport::default();
        for (id, observer) in &self.observers {
            report.notified += 1;
            if let Err(error) = observer.update() {
                #[cfg(feature = "tracing")]
                tracing::warn!(observer = %id, %error, "observer failed, continuing broadcast");

                #[cfg(feature = "metrics")]
                if let Some(metrics) = &self.metrics {
                    metrics.record_failure();
                }

                report.failures.push(ObserverFailure { id: *id, error });
            }
        }

        #[cfg(feature = "metrics")]
        if let (Some(metrics), Some(timer)) = (&self.metrics, timer) {
            metrics.record_broadcast(timer, report.notified);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            notified = report.notified,
            failed = report.failures.len(),
            "isolated broadcast complete"
        );

        report
    }

    /// Broadcast using the given delivery mode.
    ///
    /// # Errors
    ///
    /// In `FailFast` mode returns the first reaction error. `Isolated` mode
    /// never errors; failures are in the returned report.
    pub fn broadcast(&self, mode: DeliveryMode) -> Result<NotifyReport> {
        match mode {
            DeliveryMode::FailFast => {
                self.notify_observers()?;
                Ok(NotifyReport {
                    notified: self.observers.len(),
                    failures: Vec::new(),
                })
            }
            DeliveryMode::Isolated => Ok(self.notify_isolated()),
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn after_removal(&self, id: SubscriptionId) {
        #[cfg(feature = "tracing")]
        tracing::debug!(observer = %id, remaining = self.observers.len(), "observer removed");

        #[cfg(feature = "metrics")]
        if let Some(metrics) = &self.metrics {
            metrics.update_subscriber_count(self.observers.len() as i64);
        }
    }
}

impl Observable for Subject {
    fn add_observer(&mut self, observer: Rc<dyn Observer>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));

        #[cfg(feature = "tracing")]
        tracing::debug!(observer = %id, total = self.observers.len(), "observer added");

        #[cfg(feature = "metrics")]
        if let Some(metrics) = &self.metrics {
            metrics.update_subscriber_count(self.observers.len() as i64);
        }

        id
    }

    fn remove_observer(&mut self, id: SubscriptionId) -> bool {
        let Some(index) = self.observers.iter().position(|(sub_id, _)| *sub_id == id) else {
            return false;
        };
        self.observers.remove(index);
        self.after_removal(id);
        true
    }

    fn notify_observers(&self) -> Result<()> {
        #[cfg(feature = "metrics")]
        let timer = self.metrics.as_ref().map(|m| m.start_broadcast());

        let mut remaining = self.observers.iter();
        while let Some((id, observer)) = remaining.next() {
            if let Err(source) = observer.update() {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    observer = %id,
                    error = %source,
                    skipped = remaining.len(),
                    "observer failed, aborting broadcast"
                );

                #[cfg(feature = "metrics")]
                if let (Some(metrics), Some(timer)) = (&self.metrics, timer) {
                    metrics.record_failure();
                    metrics.record_broadcast(timer, self.observers.len() - remaining.len());
                }

                return Err(PatternError::ObserverFailed { id: *id, source });
            }
        }

        #[cfg(feature = "metrics")]
        if let (Some(metrics), Some(timer)) = (&self.metrics, timer) {
            metrics.record_broadcast(timer, self.observers.len());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(notified = self.observers.len(), "broadcast complete");

        Ok(())
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("subscriptions", &self.subscription_ids())
            .field("next_id", &self.next_id)
            .finish()
    }
}
