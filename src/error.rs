//! Error types for pattern-demos.

use crate::observer::{ObserverFailure, SubscriptionId};
use std::fmt;

/// Result type alias for pattern-demos operations.
pub type Result<T> = std::result::Result<T, PatternError>;

/// Errors that can occur while running a demonstration.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// A subscriber reaction failed and stopped a fail-fast broadcast.
    #[error("Observer {id} failed: {source}")]
    ObserverFailed {
        /// Subscription whose reaction failed
        id: SubscriptionId,
        /// The error returned by the reaction
        #[source]
        source: ObserverError,
    },

    /// One or more subscriber reactions failed during an isolated broadcast.
    #[error("{} observer(s) failed during broadcast", .0.len())]
    BroadcastFailures(Vec<ObserverFailure>),

    /// Failed to load settings from a source.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// Failed to deserialize settings.
    #[error("Failed to deserialize settings: {0}")]
    DeserializationError(String),

    /// Settings validation failed.
    #[error("Settings validation failed: {0}")]
    ValidationError(String),

    /// A dialog kind name did not match any known kind.
    #[error("Unknown dialog kind: {0}")]
    UnknownDialogKind(String),
}

/// Error returned by a subscriber reaction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ObserverError {
    message: String,
}

impl ObserverError {
    /// Create an observer error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message describing what went wrong.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A settings rule that was broken.
#[derive(Debug)]
pub enum ValidationError {
    /// Free-form rule violation.
    Custom(String),

    /// One settings key holds a value the demo cannot use.
    InvalidField {
        /// Settings key, e.g. `video_title`
        field: String,
        /// What is wrong with the value
        reason: String,
    },

    /// Every rule the settings broke, in the order they were checked.
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// Build a free-form rule violation.
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Build a violation tied to one settings key.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Collapse a list of errors: `None` when empty, the error itself when
    /// there is one, `Multiple` otherwise.
    pub fn collect(mut errors: Vec<ValidationError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(msg) => f.write_str(msg),
            Self::InvalidField { field, reason } => write!(f, "setting `{}` {}", field, reason),
            Self::Multiple(errors) => {
                write!(f, "{} settings rules broken:", errors.len())?;
                for err in errors {
                    write!(f, " [{}]", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for PatternError {
    fn from(err: ValidationError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
