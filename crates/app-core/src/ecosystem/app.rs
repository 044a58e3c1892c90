//! Companion app directory
//!
//! Each companion app can be installed under several package identifiers
//! depending on the build flavor. The production identifier always comes
//! first; store links are built from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An application in the companion family that can receive an account handoff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanionApp {
    /// Files client
    Files,
    /// Notes client
    Notes,
    /// Talk client
    Talk,
}

const FILES_PACKAGES: &[&str] = &[
    "com.nextcloud.client",       // generic, gplay, huawei
    "com.nextcloud.android.beta", // dev
    "com.nextcloud.android.qa",   // qa
];

const NOTES_PACKAGES: &[&str] = &[
    "it.niedermann.owncloud.notes",     // play, fdroid
    "it.niedermann.owncloud.notes.dev", // dev
    "it.niedermann.owncloud.notes.qa",  // qa
];

const TALK_PACKAGES: &[&str] = &[
    "com.nextcloud.talk2",    // generic, gplay
    "com.nextcloud.talk2.qa", // qa
];

impl CompanionApp {
    /// Every companion app
    pub fn all() -> [CompanionApp; 3] {
        [CompanionApp::Files, CompanionApp::Notes, CompanionApp::Talk]
    }

    /// Known package identifiers, production identifier first
    pub fn package_names(self) -> &'static [&'static str] {
        match self {
            CompanionApp::Files => FILES_PACKAGES,
            CompanionApp::Notes => NOTES_PACKAGES,
            CompanionApp::Talk => TALK_PACKAGES,
        }
    }

    /// Production package identifier, used for store links
    pub fn canonical_package(self) -> &'static str {
        self.package_names()[0]
    }

    /// Lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            CompanionApp::Files => "files",
            CompanionApp::Notes => "notes",
            CompanionApp::Talk => "talk",
        }
    }
}

impl fmt::Display for CompanionApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown app name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown companion app: {0}")]
pub struct UnknownAppError(pub String);

impl FromStr for CompanionApp {
    type Err = UnknownAppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "files" => Ok(CompanionApp::Files),
            "notes" => Ok(CompanionApp::Notes),
            "talk" => Ok(CompanionApp::Talk),
            _ => Err(UnknownAppError(s.to_string())),
        }
    }
}
