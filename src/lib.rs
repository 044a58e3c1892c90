//! Companion Common
//!
//! Shared libraries for the companion apps: account handoff between apps,
//! relative date formatting, color helpers and localized strings. Each
//! concern lives in its own workspace crate; this crate re-exports them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_core;
pub use app_platform;
pub use app_ui;
pub use i18n;

pub use app_core::ecosystem::{
    is_valid_account_name, AccountName, AccountReceiver, CompanionApp, EcosystemConfig,
    EcosystemManager, HandoffError, HandoffResult, RejectReason, ACCOUNT_NAME_PATTERN_REGEX,
    ECOSYSTEM_INTENT_ACTION, EXTRA_KEY_ACCOUNT,
};
pub use app_core::DateFormatter;
pub use app_platform::{DispatchError, Intent, Messenger, NoticeLength, NoticeSink, TargetHandle};
