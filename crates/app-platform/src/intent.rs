//! Inter-process intents
//!
//! An [`Intent`] is the message exchanged between applications: an action,
//! an optional package restriction, an optional data URI and a set of
//! string extras.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Standard action for opening a URI in whatever app handles it
pub const ACTION_VIEW: &str = "android.intent.action.VIEW";

/// Task stacking flags attached to an outbound intent
///
/// These only affect how the platform stacks windows, never the data
/// carried by the intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentFlags {
    /// Start the target activity in a new task
    pub new_task: bool,
    /// Reuse the target activity if it is already on top of the stack
    pub single_top: bool,
}

impl IntentFlags {
    /// No flags set
    pub const NONE: IntentFlags = IntentFlags { new_task: false, single_top: false };

    /// New task, reusing an existing top activity
    pub const NEW_TASK_SINGLE_TOP: IntentFlags = IntentFlags { new_task: true, single_top: true };
}

/// A message routed between applications by the platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Action identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Package the intent is restricted to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// String extras keyed by name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, String>,
    /// Task stacking flags
    #[serde(default)]
    pub flags: IntentFlags,
}

impl Intent {
    /// Create an intent with the given action
    pub fn new(action: impl Into<String>) -> Self {
        Self { action: Some(action.into()), ..Default::default() }
    }

    /// Create an [`ACTION_VIEW`] intent for a URI
    pub fn view(uri: impl Into<String>) -> Self {
        Self { data: Some(uri.into()), ..Self::new(ACTION_VIEW) }
    }

    /// Restrict the intent to a package
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Attach a string extra
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Set the task stacking flags
    pub fn with_flags(mut self, flags: IntentFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Action identifier, if any
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Package restriction, if any
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Data URI, if any
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Look up a string extra
    pub fn string_extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }
}
