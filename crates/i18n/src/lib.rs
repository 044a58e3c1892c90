//! Internationalization for the companion app libraries
//!
//! This crate provides i18n support with translation loading,
//! language negotiation, and message formatting.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;
pub mod translator;

pub use lang::{available_locales, negotiate, DEFAULT_LOCALE};
pub use translator::{Translator, TranslatorError};
