//! Intent dispatch capability
//!
//! [`Messenger`] is the only way shared code reaches other applications.
//! It answers which of a list of packages is installed and hands intents
//! to the platform for delivery.

use crate::intent::Intent;
use thiserror::Error;

/// Platform-level delivery failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No installed activity can handle the intent
    #[error("No activity found to handle intent: {0}")]
    NoHandler(String),

    /// The target refused the intent
    #[error("Intent rejected by target: {0}")]
    Rejected(String),

    /// The target package went away between resolution and dispatch
    #[error("Target package no longer available: {0}")]
    TargetGone(String),
}

/// A resolved, installed package that intents can be scoped to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetHandle {
    package: String,
}

impl TargetHandle {
    /// Create a handle for an installed package
    pub fn new(package: impl Into<String>) -> Self {
        Self { package: package.into() }
    }

    /// Package identifier of the target
    pub fn package(&self) -> &str {
        &self.package
    }
}

/// Inter-process messaging capability provided by the host platform
pub trait Messenger {
    /// Return the first candidate package that is installed and launchable
    ///
    /// Candidates are checked in order, so earlier entries win when several
    /// are installed.
    fn resolve_installed_target(&self, candidates: &[&'static str]) -> Option<TargetHandle>;

    /// Hand an intent to the platform for delivery
    fn dispatch(&self, intent: &Intent) -> Result<(), DispatchError>;
}

impl<M: Messenger + ?Sized> Messenger for &M {
    fn resolve_installed_target(&self, candidates: &[&'static str]) -> Option<TargetHandle> {
        (**self).resolve_installed_target(candidates)
    }

    fn dispatch(&self, intent: &Intent) -> Result<(), DispatchError> {
        (**self).dispatch(intent)
    }
}
