//! Platform seams for the companion app ecosystem
//!
//! This crate models the parts of the host platform that shared app logic
//! talks to: inter-process intents, the installed package registry,
//! activity dispatch and transient user notices. Hosting applications
//! implement [`Messenger`] and [`NoticeSink`] on top of the real platform;
//! [`memory`] provides an in-process implementation for tests and demos.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod intent;
pub mod memory;
pub mod messenger;
pub mod notice;

pub use intent::{Intent, IntentFlags, ACTION_VIEW};
pub use messenger::{DispatchError, Messenger, TargetHandle};
pub use notice::{NoticeLength, NoticeSink};
