//! Handoff error types

use super::account::AccountNameError;
use super::app::CompanionApp;
use app_platform::DispatchError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a handoff send
///
/// None of these are fatal; each ends the current call only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HandoffError {
    /// Account name absent or blank
    #[error("No account name provided")]
    MissingAccount,

    /// Account name present but not email-shaped
    #[error("Invalid account name: {0}")]
    InvalidAccountShape(String),

    /// None of the app's package identifiers are installed
    #[error("Companion app not installed: {0}")]
    AppNotInstalled(CompanionApp),

    /// The platform could not deliver the handoff intent
    #[error("Dispatch failed: {0}")]
    DispatchFailed(#[from] DispatchError),

    /// Neither the marketplace nor the web store link could be opened
    #[error("Could not open store listing for {0}")]
    StoreOpenFailed(String),
}

/// Result type for handoff operations
pub type Result<T> = std::result::Result<T, HandoffError>;

impl From<AccountNameError> for HandoffError {
    fn from(error: AccountNameError) -> Self {
        match error {
            AccountNameError::Missing => HandoffError::MissingAccount,
            AccountNameError::InvalidShape(name) => HandoffError::InvalidAccountShape(name),
        }
    }
}

/// Why an inbound handoff was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    /// No message was delivered
    NoMessage,
    /// Message action is not the handoff action
    ActionMismatch,
    /// Account extra absent or blank
    MissingAccount,
    /// Account extra fails validation
    MalformedAccount,
}

impl RejectReason {
    /// Localized message id describing the reason
    pub fn message_id(self) -> &'static str {
        match self {
            RejectReason::NoMessage => "ecosystem-wrong-intent",
            RejectReason::ActionMismatch => "ecosystem-action-mismatch",
            RejectReason::MissingAccount => "ecosystem-null-account",
            RejectReason::MalformedAccount => "ecosystem-received-account-invalid",
        }
    }

    /// Stable machine-readable name
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::NoMessage => "no-message",
            RejectReason::ActionMismatch => "action-mismatch",
            RejectReason::MissingAccount => "missing-account",
            RejectReason::MalformedAccount => "malformed-account",
        }
    }
}

impl From<AccountNameError> for RejectReason {
    fn from(error: AccountNameError) -> Self {
        match error {
            AccountNameError::Missing => RejectReason::MissingAccount,
            AccountNameError::InvalidShape(_) => RejectReason::MalformedAccount,
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(HandoffError::MissingAccount.to_string(), "No account name provided");
        assert!(HandoffError::AppNotInstalled(CompanionApp::Talk).to_string().contains("talk"));

        let err: HandoffError = DispatchError::Rejected("busy".to_string()).into();
        assert!(matches!(err, HandoffError::DispatchFailed(_)));
        assert!(err.to_string().contains("busy"));
    }

    #[test]
    fn test_account_errors_convert_explicitly() {
        assert_eq!(HandoffError::from(AccountNameError::Missing), HandoffError::MissingAccount);
        assert_eq!(
            HandoffError::from(AccountNameError::InvalidShape("abc".to_string())),
            HandoffError::InvalidAccountShape("abc".to_string())
        );

        assert_eq!(RejectReason::from(AccountNameError::Missing), RejectReason::MissingAccount);
        assert_eq!(
            RejectReason::from(AccountNameError::InvalidShape("abc".to_string())),
            RejectReason::MalformedAccount
        );
    }

    #[test]
    fn test_reject_reason_names() {
        assert_eq!(RejectReason::ActionMismatch.to_string(), "action-mismatch");
        assert_eq!(
            serde_json::to_string(&RejectReason::MalformedAccount).unwrap(),
            "\"malformed-account\""
        );
        assert_eq!(RejectReason::MissingAccount.message_id(), "ecosystem-null-account");
    }
}
