//! Observer pattern: a subject broadcasting to an ordered list of subscribers.
//!
//! Notification is synchronous and single-threaded. Registration order is
//! notification order, and duplicates are notified once per registration.

mod channel;
pub mod demo;
mod subject;
mod subscriber;

pub use channel::{ChannelSubscriber, VideoChannel};
pub use subject::{
    DeliveryMode, NotifyReport, Observable, ObserverFailure, Subject, SubscriptionId,
};
pub use subscriber::{FnObserver, Observer};
