//! Account name validation
//!
//! Account names travel between apps as plain strings. Before one is sent
//! or accepted it must have an email-like shape; this is a transport gate,
//! not address verification.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Pattern an account name must match in full
pub const ACCOUNT_NAME_PATTERN_REGEX: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-z]{2,}";

fn account_name_regex() -> &'static Regex {
    static ACCOUNT_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    ACCOUNT_NAME_REGEX.get_or_init(|| {
        // Anchored so the whole candidate has to match, not a substring
        Regex::new(&format!("^(?:{})$", ACCOUNT_NAME_PATTERN_REGEX)).unwrap()
    })
}

/// Check whether a candidate account name may be sent or accepted
///
/// Absent, empty and blank candidates are rejected.
pub fn is_valid_account_name(candidate: Option<&str>) -> bool {
    match candidate {
        Some(name) if !name.trim().is_empty() => account_name_regex().is_match(name),
        _ => false,
    }
}

/// Why a candidate account name was refused
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountNameError {
    /// Absent, empty or blank
    #[error("No account name provided")]
    Missing,

    /// Present but not email-shaped
    #[error("Invalid account name: {0}")]
    InvalidShape(String),
}

/// An account name that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountName(String);

impl AccountName {
    /// Validate a candidate account name
    pub fn parse(candidate: Option<&str>) -> Result<Self, AccountNameError> {
        let name = match candidate {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(AccountNameError::Missing),
        };

        if !is_valid_account_name(Some(name)) {
            return Err(AccountNameError::InvalidShape(name.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    /// The account name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for AccountName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        AccountName::parse(Some(&raw)).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_account_names() {
        assert!(is_valid_account_name(Some("abc@example.cloud.com")));
        assert!(is_valid_account_name(Some("user.name+test@sub.domain.org")));
        assert!(is_valid_account_name(Some("user_123@test.co")));
        assert!(is_valid_account_name(Some("A%b-c@EXAMPLE.com")));
    }

    #[test]
    fn test_invalid_account_names() {
        assert!(!is_valid_account_name(Some("abc")));
        assert!(!is_valid_account_name(Some("abc@")));
        assert!(!is_valid_account_name(Some("abc@example")));
        assert!(!is_valid_account_name(Some("abc@example.")));
        assert!(!is_valid_account_name(Some("abc@.com")));
        assert!(!is_valid_account_name(Some("@example.com")));
        assert!(!is_valid_account_name(Some("abc@example.c")));
        assert!(!is_valid_account_name(Some("abc example@test.com")));
    }

    #[test]
    fn test_empty_or_blank_account_names() {
        assert!(!is_valid_account_name(None));
        assert!(!is_valid_account_name(Some("")));
        assert!(!is_valid_account_name(Some(" ")));
        assert!(!is_valid_account_name(Some("\t\n")));
    }

    #[test]
    fn test_full_match_only() {
        assert!(!is_valid_account_name(Some(" abc@example.com")));
        assert!(!is_valid_account_name(Some("abc@example.com ")));
        assert!(!is_valid_account_name(Some("abc@example.com\n")));
        assert!(!is_valid_account_name(Some("x abc@example.com")));
        assert!(!is_valid_account_name(Some("abc@example.COM")));
    }

    #[test]
    fn test_loose_domains_are_kept() {
        assert!(is_valid_account_name(Some("abc@example..com")));
        assert!(is_valid_account_name(Some("abc@-.com")));
    }

    #[test]
    fn test_parse_account_name() {
        let name = AccountName::parse(Some("user@example.com")).unwrap();
        assert_eq!(name.as_str(), "user@example.com");
        assert_eq!(name.to_string(), "user@example.com");

        assert_eq!(AccountName::parse(None), Err(AccountNameError::Missing));
        assert_eq!(AccountName::parse(Some("  ")), Err(AccountNameError::Missing));
        assert_eq!(
            AccountName::parse(Some("not-an-email")),
            Err(AccountNameError::InvalidShape("not-an-email".to_string()))
        );
    }

    #[test]
    fn test_account_name_serde() {
        let name: AccountName = serde_json::from_str("\"user@example.com\"").unwrap();
        assert_eq!(name.into_inner(), "user@example.com");

        assert!(serde_json::from_str::<AccountName>("\"nope\"").is_err());
    }
}
