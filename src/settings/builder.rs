//! Builder that layers defaults, files and environment variables.

use super::DemoSettings;
use crate::error::{PatternError, Result, ValidationError};
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use std::path::{Path, PathBuf};

#[cfg(feature = "validation")]
use super::Validate;

type Validator = Box<dyn Fn(&DemoSettings) -> std::result::Result<(), ValidationError>>;

/// Builder for loading `DemoSettings`.
///
/// Later layers override earlier ones: defaults, then files in the order
/// they were added, then environment variables.
///
/// # Examples
///
/// ```rust,no_run
/// use pattern_demos::settings::SettingsBuilder;
///
/// # fn example() -> pattern_demos::error::Result<()> {
/// // PATTERNS_VIDEO_TITLE="Rust Traits" overrides the file value
/// let settings = SettingsBuilder::new()
///     .with_file("demo.yaml")
///     .with_env_overrides("PATTERNS", "__")
///     .build()?;
/// println!("Releasing {}", settings.video_title);
/// # Ok(())
/// # }
/// ```
pub struct SettingsBuilder {
    file_paths: Vec<PathBuf>,
    env_prefix: Option<String>,
    env_separator: Option<String>,
    validator: Option<Validator>,
}

impl SettingsBuilder {
    /// Create a builder that yields the defaults unless layers are added.
    pub fn new() -> Self {
        Self {
            file_paths: Vec::new(),
            env_prefix: None,
            env_separator: None,
            validator: None,
        }
    }

    /// Add a settings file. The format comes from the extension: `.yaml`,
    /// `.yml`, `.toml` or `.json`. The file must exist.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_paths.push(path.into());
        self
    }

    /// Read overrides from environment variables.
    ///
    /// With prefix `PATTERNS`, `PATTERNS_OBJECT_SUBSCRIBERS=5` sets
    /// `object_subscribers`. `separator` splits nested keys. Values stay
    /// strings until deserialization, so a title like `1.10` is kept as-is.
    pub fn with_env_overrides(mut self, prefix: &str, separator: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self.env_separator = Some(separator.to_string());
        self
    }

    /// Add an extra check that runs after the built-in validation.
    pub fn with_validation<F>(mut self, validator: F) -> Self
    where
        F: Fn(&DemoSettings) -> std::result::Result<(), ValidationError> + 'static,
    {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Merge every layer and deserialize the result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A file has an unsupported extension or does not exist
    /// - A layer cannot be parsed
    /// - Deserialization fails
    /// - Validation fails
    pub fn build(self) -> Result<DemoSettings> {
        let mut builder = default_layer()?;

        for path in &self.file_paths {
            check_file(path)?;

            #[cfg(feature = "tracing")]
            tracing::debug!(path = %path.display(), "adding settings file");

            builder = builder.add_source(File::from(path.clone()).required(true));
        }

        if let (Some(prefix), Some(separator)) = (&self.env_prefix, &self.env_separator) {
            #[cfg(feature = "tracing")]
            tracing::debug!(prefix = %prefix, "adding environment overrides");

            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator(separator),
            );
        }

        let merged = builder
            .build()
            .map_err(|e| PatternError::LoadError(format!("Failed to build settings: {}", e)))?;

        let settings = merged.try_deserialize::<DemoSettings>().map_err(|e| {
            PatternError::DeserializationError(format!("Failed to deserialize settings: {}", e))
        })?;

        #[cfg(feature = "validation")]
        settings.validate()?;

        if let Some(validator) = &self.validator {
            validator(&settings)?;
        }

        Ok(settings)
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_layer() -> Result<ConfigBuilder<DefaultState>> {
    let defaults = DemoSettings::default();
    Config::builder()
        .set_default("video_title", defaults.video_title)
        .and_then(|b| b.set_default("object_subscribers", defaults.object_subscribers as i64))
        .and_then(|b| b.set_default("inline_message", defaults.inline_message))
        .and_then(|b| b.set_default("delivery", "fail-fast"))
        .map_err(|e| PatternError::LoadError(format!("Failed to seed defaults: {}", e)))
}

fn check_file(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| {
            PatternError::LoadError(format!(
                "Unable to determine file format for: {}",
                path.display()
            ))
        })?;

    match extension {
        "yaml" | "yml" | "toml" | "json" => {}
        _ => {
            return Err(PatternError::LoadError(format!(
                "Unsupported file extension: {}. Supported: .yaml, .yml, .toml, .json",
                extension
            )));
        }
    }

    if !path.exists() {
        return Err(PatternError::LoadError(format!(
            "Settings file not found: {}",
            path.display()
        )));
    }

    Ok(())
}
