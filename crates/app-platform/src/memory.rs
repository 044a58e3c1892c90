//! In-process platform
//!
//! [`MemoryPlatform`] keeps an installed-package set and a log of every
//! intent it was asked to deliver, which makes protocol behavior observable
//! without a device. [`RecordedNotices`] captures notices the same way.

use crate::intent::{Intent, ACTION_VIEW};
use crate::messenger::{DispatchError, Messenger, TargetHandle};
use crate::notice::{NoticeLength, NoticeSink};
use std::cell::RefCell;
use std::collections::BTreeSet;

/// Messenger backed by in-memory state
#[derive(Debug, Default)]
pub struct MemoryPlatform {
    installed: BTreeSet<String>,
    store_app: bool,
    browser: bool,
    dispatch_failure: Option<DispatchError>,
    attempted: RefCell<Vec<Intent>>,
    delivered: RefCell<Vec<Intent>>,
}

impl MemoryPlatform {
    /// Create a platform with nothing installed
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a package as installed
    pub fn with_installed(mut self, package: impl Into<String>) -> Self {
        self.install(package);
        self
    }

    /// Whether a marketplace app handles `market://` links
    pub fn with_store_app(mut self, available: bool) -> Self {
        self.store_app = available;
        self
    }

    /// Whether a browser handles `http(s)://` links
    pub fn with_browser(mut self, available: bool) -> Self {
        self.browser = available;
        self
    }

    /// Make every package-scoped dispatch fail with the given error
    pub fn with_dispatch_failure(mut self, error: DispatchError) -> Self {
        self.dispatch_failure = Some(error);
        self
    }

    /// Mark a package as installed
    pub fn install(&mut self, package: impl Into<String>) {
        self.installed.insert(package.into());
    }

    /// Remove a package
    pub fn uninstall(&mut self, package: &str) {
        self.installed.remove(package);
    }

    /// Whether a package is installed
    pub fn is_installed(&self, package: &str) -> bool {
        self.installed.contains(package)
    }

    /// Every intent passed to [`Messenger::dispatch`], in order
    pub fn attempted(&self) -> Vec<Intent> {
        self.attempted.borrow().clone()
    }

    /// Intents that were delivered successfully, in order
    pub fn delivered(&self) -> Vec<Intent> {
        self.delivered.borrow().clone()
    }

    /// Forget recorded intents
    pub fn clear_log(&self) {
        self.attempted.borrow_mut().clear();
        self.delivered.borrow_mut().clear();
    }

    fn route(&self, intent: &Intent) -> Result<(), DispatchError> {
        if let Some(package) = intent.package() {
            if !self.is_installed(package) {
                return Err(DispatchError::TargetGone(package.to_string()));
            }
            if let Some(error) = &self.dispatch_failure {
                return Err(error.clone());
            }
            return Ok(());
        }

        let uri = intent.data().unwrap_or_default();
        if intent.action() != Some(ACTION_VIEW) {
            return Err(DispatchError::NoHandler(uri.to_string()));
        }

        let scheme = uri.split_once(':').map(|(scheme, _)| scheme).unwrap_or_default();
        let handled = match scheme {
            "market" => self.store_app,
            "http" | "https" => self.browser,
            _ => false,
        };

        if handled {
            Ok(())
        } else {
            Err(DispatchError::NoHandler(uri.to_string()))
        }
    }
}

impl Messenger for MemoryPlatform {
    fn resolve_installed_target(&self, candidates: &[&'static str]) -> Option<TargetHandle> {
        candidates
            .iter()
            .find(|package| self.is_installed(package))
            .map(|package| TargetHandle::new(*package))
    }

    fn dispatch(&self, intent: &Intent) -> Result<(), DispatchError> {
        self.attempted.borrow_mut().push(intent.clone());

        let result = self.route(intent);
        match &result {
            Ok(()) => {
                tracing::debug!(action = ?intent.action(), package = ?intent.package(), "intent delivered");
                self.delivered.borrow_mut().push(intent.clone());
            }
            Err(e) => tracing::debug!("intent not delivered: {}", e),
        }
        result
    }
}

/// Notice sink that keeps every message it was shown
#[derive(Debug, Default)]
pub struct RecordedNotices {
    shown: RefCell<Vec<(String, NoticeLength)>>,
}

impl RecordedNotices {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages shown so far, in order
    pub fn messages(&self) -> Vec<String> {
        self.shown.borrow().iter().map(|(message, _)| message.clone()).collect()
    }

    /// Messages and their display lengths, in order
    pub fn entries(&self) -> Vec<(String, NoticeLength)> {
        self.shown.borrow().clone()
    }

    /// Whether nothing has been shown
    pub fn is_empty(&self) -> bool {
        self.shown.borrow().is_empty()
    }
}

impl NoticeSink for RecordedNotices {
    fn show(&self, message: &str, length: NoticeLength) {
        self.shown.borrow_mut().push((message.to_string(), length));
    }
}
