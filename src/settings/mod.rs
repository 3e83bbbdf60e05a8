//! Layered settings for the demonstration drivers.
//!
//! Settings start from built-in defaults that reproduce the canonical
//! scenario, then files and environment variables override them in that
//! order.

mod builder;

#[cfg(feature = "validation")]
mod validation;

pub use builder::SettingsBuilder;

#[cfg(feature = "validation")]
pub use validation::Validate;

use crate::observer::DeliveryMode;
use serde::Deserialize;

#[cfg(feature = "validation")]
use crate::error::ValidationError;

/// Title released by the default scenario.
pub const DEFAULT_VIDEO_TITLE: &str = "Design Patterns : Observer pattern";

/// Line printed by the default inline subscriber. It has no trailing period.
pub const DEFAULT_INLINE_MESSAGE: &str = "New video available";

/// Settings for the observer driver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Title passed to the release.
    pub video_title: String,
    /// How many object subscribers to register before the inline one.
    pub object_subscribers: usize,
    /// Line the inline subscriber prints.
    pub inline_message: String,
    /// Failure handling for the broadcast.
    pub delivery: DeliveryMode,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            video_title: DEFAULT_VIDEO_TITLE.to_string(),
            object_subscribers: 3,
            inline_message: DEFAULT_INLINE_MESSAGE.to_string(),
            delivery: DeliveryMode::FailFast,
        }
    }
}

#[cfg(feature = "validation")]
impl Validate for DemoSettings {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if self.video_title.trim().is_empty() {
            errors.push(ValidationError::invalid_field(
                "video_title",
                "must not be empty",
            ));
        }

        if self.inline_message.is_empty() {
            errors.push(ValidationError::invalid_field(
                "inline_message",
                "must not be empty",
            ));
        }

        match ValidationError::collect(errors) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
