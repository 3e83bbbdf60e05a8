//! Built-in metrics for broadcasts.
//!
//! Provides OpenTelemetry metrics tracking:
//! - Broadcasts and individual reactions
//! - Reaction failures
//! - Broadcast duration
//! - Active subscribers
//! - Time since the last broadcast
//!
//! # Examples
//!
//! ```rust,no_run
//! use pattern_demos::metrics::NotifyMetrics;
//! use pattern_demos::observer::Subject;
//! use opentelemetry::global;
//!
//! let meter = global::meter("my-app");
//! let subject = Subject::new().with_metrics(NotifyMetrics::new(meter));
//! ```

mod notify_metrics;

pub use notify_metrics::NotifyMetrics;
