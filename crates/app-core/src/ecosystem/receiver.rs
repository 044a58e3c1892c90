//! Receiving side of the handoff

use super::account::AccountName;
use super::error::RejectReason;
use super::{ECOSYSTEM_INTENT_ACTION, EXTRA_KEY_ACCOUNT};
use app_platform::Intent;

/// Callback interface for hosts that prefer callbacks over return values
pub trait AccountReceiver {
    /// A valid account name arrived
    fn on_account_received(&mut self, account_name: &str);

    /// The inbound message was rejected; `reason` is localized
    fn on_account_error(&mut self, reason: &str);
}

/// Outcome of receiving a handoff
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffResult {
    /// A valid account name was delivered
    Delivered(AccountName),
    /// The message was rejected
    Rejected(RejectReason),
}

impl HandoffResult {
    /// Whether an account was delivered
    pub fn is_delivered(&self) -> bool {
        matches!(self, HandoffResult::Delivered(_))
    }

    /// The delivered account, if any
    pub fn account(&self) -> Option<&AccountName> {
        match self {
            HandoffResult::Delivered(account) => Some(account),
            HandoffResult::Rejected(_) => None,
        }
    }

    /// Convert into a standard result
    pub fn into_result(self) -> Result<AccountName, RejectReason> {
        match self {
            HandoffResult::Delivered(account) => Ok(account),
            HandoffResult::Rejected(reason) => Err(reason),
        }
    }
}

impl From<Result<AccountName, RejectReason>> for HandoffResult {
    fn from(result: Result<AccountName, RejectReason>) -> Self {
        match result {
            Ok(account) => HandoffResult::Delivered(account),
            Err(reason) => HandoffResult::Rejected(reason),
        }
    }
}

/// Validate an inbound handoff intent
///
/// Checks run in order and stop at the first failure: presence of the
/// message, its action, presence of the account extra, then its shape.
pub fn accept_handoff(intent: Option<&Intent>) -> Result<AccountName, RejectReason> {
    let intent = intent.ok_or(RejectReason::NoMessage)?;

    if intent.action() != Some(ECOSYSTEM_INTENT_ACTION) {
        tracing::debug!("unexpected handoff action: {:?}", intent.action());
        return Err(RejectReason::ActionMismatch);
    }

    AccountName::parse(intent.string_extra(EXTRA_KEY_ACCOUNT)).map_err(|e| {
        tracing::debug!("received account refused: {}", e);
        RejectReason::from(e)
    })
}
