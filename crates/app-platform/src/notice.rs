//! Transient user-facing notices

use serde::{Deserialize, Serialize};

/// How long a notice stays on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLength {
    /// Short display
    Short,
    /// Long display
    #[default]
    Long,
}

/// Surface for short-lived messages shown to the user (snackbar, toast)
pub trait NoticeSink {
    /// Show a localized message
    fn show(&self, message: &str, length: NoticeLength);
}

impl<N: NoticeSink + ?Sized> NoticeSink for &N {
    fn show(&self, message: &str, length: NoticeLength) {
        (**self).show(message, length)
    }
}
