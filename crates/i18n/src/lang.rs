//! Language negotiation
//!
//! Picks the best bundled locale for a list of requested language tags.

use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use unic_langid::LanguageIdentifier;

/// Locale used when nothing requested is available
pub const DEFAULT_LOCALE: &str = "en-US";

/// Locales that ship with bundled resources
pub(crate) const BUNDLED_LOCALES: &[&str] = &["en-US", "de"];

/// All locales with bundled resources
pub fn available_locales() -> Vec<LanguageIdentifier> {
    BUNDLED_LOCALES.iter().filter_map(|tag| tag.parse().ok()).collect()
}

/// The fallback locale
pub fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

/// Negotiate the best available locale for the requested tags
///
/// Tags that fail to parse are skipped. Falls back to [`DEFAULT_LOCALE`].
pub fn negotiate(requested: &[&str]) -> LanguageIdentifier {
    let requested: Vec<LanguageIdentifier> = requested
        .iter()
        .filter_map(|tag| match tag.parse::<LanguageIdentifier>() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!("Ignoring invalid language tag {:?}: {}", tag, e);
                None
            }
        })
        .collect();

    let available = available_locales();
    let default = default_locale();

    let chosen = negotiate_languages(
        &requested,
        &available,
        Some(&default),
        NegotiationStrategy::Filtering,
    )
    .first()
    .map(|id| (*id).clone());

    chosen.unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_locales() {
        let locales = available_locales();
        assert_eq!(locales.len(), BUNDLED_LOCALES.len());
        assert!(locales.contains(&default_locale()));
    }

    #[test]
    fn test_negotiate_exact() {
        assert_eq!(negotiate(&["de"]).to_string(), "de");
        assert_eq!(negotiate(&["en-US"]).to_string(), "en-US");
    }

    #[test]
    fn test_negotiate_region_falls_back_to_language() {
        assert_eq!(negotiate(&["de-DE"]).to_string(), "de");
    }

    #[test]
    fn test_negotiate_unsupported_uses_default() {
        assert_eq!(negotiate(&["fr"]).to_string(), DEFAULT_LOCALE);
        assert_eq!(negotiate(&[]).to_string(), DEFAULT_LOCALE);
    }

    #[test]
    fn test_negotiated_locale_loads_bundle() {
        let locale = negotiate(&["de-CH", "en-GB"]);
        assert_eq!(locale.to_string(), "de");

        let translator = crate::Translator::for_locale(locale).unwrap();
        assert_eq!(translator.get("date-formatting-now"), "jetzt");
    }

    #[test]
    fn test_negotiate_skips_invalid_tags() {
        assert_eq!(negotiate(&["not a tag!", "de"]).to_string(), "de");
    }
}
