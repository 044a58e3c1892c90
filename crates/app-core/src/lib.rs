//! Core logic shared by the companion apps
//!
//! This crate contains the account handoff protocol between companion
//! apps and the date formatting used in list rows.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dates;
pub mod ecosystem;

pub use dates::DateFormatter;
pub use ecosystem::{
    AccountName, AccountReceiver, CompanionApp, EcosystemConfig, EcosystemManager, HandoffError,
    HandoffResult, RejectReason,
};
