//! Settings validation support.

use crate::error::ValidationError;

/// Trait for validating loaded settings.
///
/// `SettingsBuilder::build` runs this after deserializing, so invalid values
/// are rejected before a demonstration starts.
///
/// # Examples
///
/// ```rust
/// use pattern_demos::error::ValidationError;
/// use pattern_demos::settings::Validate;
///
/// struct Banner {
///     width: usize,
/// }
///
/// impl Validate for Banner {
///     fn validate(&self) -> Result<(), ValidationError> {
///         if self.width == 0 {
///             return Err(ValidationError::invalid_field("width", "must be greater than 0"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validate {
    /// Validate the settings.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` describing every rule that failed.
    fn validate(&self) -> Result<(), ValidationError>;
}
