//! The video channel subject and its stock subscriber.

use super::subject::{DeliveryMode, NotifyReport, Observable, Subject, SubscriptionId};
use super::subscriber::Observer;
use crate::console::Console;
use crate::error::{ObserverError, Result};
use std::rc::Rc;

/// A channel that announces new videos to its subscribers.
///
/// Releasing a video prints the title and then broadcasts a bare
/// "something new" signal. Subscribers are not told which video it was.
#[derive(Debug)]
pub struct VideoChannel {
    subject: Subject,
    console: Console,
}

impl VideoChannel {
    /// Create a channel with no subscribers.
    pub fn new(console: Console) -> Self {
        Self {
            subject: Subject::new(),
            console,
        }
    }

    /// Create a channel around an existing registry.
    pub fn with_subject(subject: Subject, console: Console) -> Self {
        Self { subject, console }
    }

    /// Register an inline subscriber.
    pub fn subscribe<F>(&mut self, reaction: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.subject.subscribe(reaction)
    }

    /// Print the release line and notify every subscriber, stopping at the
    /// first failure.
    ///
    /// # Errors
    ///
    /// Returns the first subscriber failure.
    pub fn release_new_video(&self, title: &str) -> Result<()> {
        self.announce(title);
        self.subject.notify_observers()
    }

    /// Print the release line and notify with the chosen delivery mode.
    ///
    /// # Errors
    ///
    /// Only `DeliveryMode::FailFast` returns errors.
    pub fn release_with(&self, title: &str, mode: DeliveryMode) -> Result<NotifyReport> {
        self.announce(title);
        self.subject.broadcast(mode)
    }

    /// The underlying registry.
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// The console this channel prints to.
    pub fn console(&self) -> &Console {
        &self.console
    }

    fn announce(&self, title: &str) {
        #[cfg(feature = "tracing")]
        tracing::info!(title, subscribers = self.subject.observer_count(), "releasing video");

        self.console.println(format_args!("New video released: {}", title));
    }
}

impl Observable for VideoChannel {
    fn add_observer(&mut self, observer: Rc<dyn Observer>) -> SubscriptionId {
        self.subject.add_observer(observer)
    }

    fn remove_observer(&mut self, id: SubscriptionId) -> bool {
        self.subject.remove_observer(id)
    }

    fn notify_observers(&self) -> Result<()> {
        self.subject.notify_observers()
    }
}

/// Subscriber that prints a fixed notice whenever its channel releases.
#[derive(Debug, Clone)]
pub struct ChannelSubscriber {
    console: Console,
}

impl ChannelSubscriber {
    /// Create a subscriber that prints to `console`.
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Observer for ChannelSubscriber {
    fn update(&self) -> std::result::Result<(), ObserverError> {
        self.console.println("New video available.");
        Ok(())
    }
}
