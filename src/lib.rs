//! # pattern-demos
//!
//! Small, self-contained demonstrations of classic design patterns.
//!
//! ## Overview
//!
//! Each module is an independent example with its own driver:
//! - [`observer`]: a subject broadcasting to an ordered list of subscribers
//! - [`factory`]: a pure mapping from a discriminator to a variant
//! - [`hamburger`]: a consuming builder
//! - [`strategy`]: characters with swappable weapon behaviour
//!
//! The observer example is the most complete one. Its registry keeps
//! subscribers in registration order, returns a token for every
//! registration, and notifies synchronously on the calling thread.
//!
//! ## Quick Start
//!
//! ```rust
//! use pattern_demos::prelude::*;
//! use std::rc::Rc;
//!
//! # fn example() -> pattern_demos::error::Result<()> {
//! let console = Console::capture();
//! let mut channel = VideoChannel::new(console.clone());
//!
//! channel.add_observer(Rc::new(ChannelSubscriber::new(console.clone())));
//! let inline = console.clone();
//! channel.subscribe(move || inline.println("New video available"));
//!
//! channel.release_new_video("Design Patterns : Observer pattern")?;
//! assert_eq!(console.lines().len(), 3);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Feature Flags
//!
//! - `validation` (default): validate loaded settings
//! - `tracing` (default): emit `tracing` events from the registry and loader
//! - `metrics`: OpenTelemetry metrics for broadcasts

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod console;
pub mod error;
pub mod factory;
pub mod hamburger;
pub mod observer;
pub mod settings;
pub mod strategy;

#[cfg(feature = "metrics")]
pub mod metrics;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::console::Console;
    pub use crate::error::{ObserverError, PatternError, Result, ValidationError};
    pub use crate::observer::{
        ChannelSubscriber, DeliveryMode, FnObserver, NotifyReport, Observable, Observer, Subject,
        SubscriptionId, VideoChannel,
    };
    pub use crate::settings::{DemoSettings, SettingsBuilder};

    #[cfg(feature = "validation")]
    pub use crate::settings::Validate;
}
