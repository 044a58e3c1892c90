//! Message lookup and formatting
//!
//! [`Translator`] wraps a Fluent bundle loaded from the resources compiled
//! into this crate.

use crate::lang::{default_locale, negotiate};
use fluent::{FluentArgs, FluentBundle, FluentResource};
use std::fmt;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

const RESOURCES: &[(&str, &str)] = &[
    ("en-US", include_str!("../locales/en-US/common.ftl")),
    ("de", include_str!("../locales/de/common.ftl")),
];

/// Translator error types
#[derive(Debug, Error)]
pub enum TranslatorError {
    /// No bundled resources for the locale
    #[error("No resources for locale: {0}")]
    MissingResources(String),

    /// A bundled resource failed to parse or load
    #[error("Invalid resources for {locale}: {details}")]
    InvalidResources {
        /// Locale of the broken resource
        locale: String,
        /// Parser or bundle errors
        details: String,
    },

    /// Message id not present in the bundle
    #[error("Message not found: {0}")]
    MessageNotFound(String),

    /// Message exists but only carries attributes
    #[error("Message has no value: {0}")]
    NoValue(String),

    /// Formatting reported errors (e.g. a missing argument)
    #[error("Failed to format {id}: {details}")]
    Format {
        /// Message id
        id: String,
        /// Formatter errors
        details: String,
    },
}

/// Result type for translator operations
pub type Result<T> = std::result::Result<T, TranslatorError>;

/// Localized message source
pub struct Translator {
    locale: LanguageIdentifier,
    bundle: FluentBundle<FluentResource>,
}

impl Translator {
    /// Create a translator for the best match among the requested tags
    pub fn new(requested: &[&str]) -> Result<Self> {
        Self::for_locale(negotiate(requested))
    }

    /// Create a translator for a specific bundled locale
    pub fn for_locale(locale: LanguageIdentifier) -> Result<Self> {
        let tag = locale.to_string();
        let source = RESOURCES
            .iter()
            .find(|(resource_tag, _)| *resource_tag == tag)
            .map(|(_, source)| *source)
            .ok_or_else(|| TranslatorError::MissingResources(tag.clone()))?;

        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            TranslatorError::InvalidResources { locale: tag.clone(), details: format!("{:?}", errors) }
        })?;

        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| TranslatorError::InvalidResources {
            locale: tag.clone(),
            details: format!("{:?}", errors),
        })?;

        Ok(Self { locale, bundle })
    }

    /// Negotiated locale
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Whether the bundle has a message with this id
    pub fn has_message(&self, id: &str) -> bool {
        self.bundle.has_message(id)
    }

    /// Format a message with optional arguments
    pub fn format(&self, id: &str, args: Option<&FluentArgs>) -> Result<String> {
        let message = self
            .bundle
            .get_message(id)
            .ok_or_else(|| TranslatorError::MessageNotFound(id.to_string()))?;
        let pattern = message.value().ok_or_else(|| TranslatorError::NoValue(id.to_string()))?;

        let mut errors = Vec::new();
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            return Err(TranslatorError::Format { id: id.to_string(), details: format!("{:?}", errors) });
        }

        Ok(value.into_owned())
    }

    /// Look up a message, falling back to the id itself
    pub fn get(&self, id: &str) -> String {
        self.format(id, None).unwrap_or_else(|e| {
            tracing::warn!("Translation lookup failed: {}", e);
            id.to_string()
        })
    }

    /// Look up a message that takes a `$count` argument
    ///
    /// Plural variants are selected by the locale's plural rules.
    pub fn get_count(&self, id: &str, count: i64) -> String {
        let mut args = FluentArgs::new();
        args.set("count", count);

        self.format(id, Some(&args)).unwrap_or_else(|e| {
            tracing::warn!("Translation lookup failed: {}", e);
            id.to_string()
        })
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::for_locale(default_locale()).expect("bundled default locale resources are valid")
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator").field("locale", &self.locale.to_string()).finish()
    }
}
