//! Handoff Integration Tests
//!
//! End-to-end runs of the account handoff: one manager sends, the intent the
//! platform delivered is fed to a second manager acting as the receiving app.

use companion_common::app_platform::memory::{MemoryPlatform, RecordedNotices};
use companion_common::{
    AccountReceiver, CompanionApp, DispatchError, EcosystemConfig, EcosystemManager, HandoffError,
    HandoffResult, Intent, NoticeLength, RejectReason, ECOSYSTEM_INTENT_ACTION, EXTRA_KEY_ACCOUNT,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn device_with(packages: &[&str]) -> MemoryPlatform {
    let mut platform = MemoryPlatform::new().with_store_app(true).with_browser(true);
    for package in packages {
        platform.install(*package);
    }
    platform
}

#[derive(Default)]
struct CollectingReceiver {
    received: Vec<String>,
    errors: Vec<String>,
}

impl AccountReceiver for CollectingReceiver {
    fn on_account_received(&mut self, account_name: &str) {
        self.received.push(account_name.to_string());
    }

    fn on_account_error(&mut self, reason: &str) {
        self.errors.push(reason.to_string());
    }
}

/// Account sent from one app arrives unchanged in the other
#[test]
fn test_send_then_receive_round_trip() {
    let sender_platform = device_with(&["com.nextcloud.talk2"]);
    let sender_notices = RecordedNotices::new();
    let sender = EcosystemManager::new(&sender_platform, &sender_notices);

    let target = sender.open_app(CompanionApp::Talk, Some("alice@cloud.example.com")).unwrap();
    assert_eq!(target.package(), "com.nextcloud.talk2");
    assert!(sender_notices.is_empty());

    let delivered = sender_platform.delivered();
    assert_eq!(delivered.len(), 1);
    let intent = &delivered[0];
    assert_eq!(intent.action(), Some(ECOSYSTEM_INTENT_ACTION));
    assert_eq!(intent.package(), Some("com.nextcloud.talk2"));
    assert!(intent.flags.new_task);
    assert!(intent.flags.single_top);

    let receiver_platform = MemoryPlatform::new();
    let receiver = EcosystemManager::new(&receiver_platform, RecordedNotices::new());
    let result = receiver.receive_account(Some(intent));
    assert!(result.is_delivered());
    assert_eq!(result.account().unwrap().as_str(), "alice@cloud.example.com");
}

/// The first installed package variant wins
#[test]
fn test_prefers_first_installed_variant() {
    let platform = device_with(&["com.nextcloud.android.qa", "com.nextcloud.android.beta"]);
    let manager = EcosystemManager::new(&platform, RecordedNotices::new());

    let target = manager.open_app(CompanionApp::Files, Some("bob@example.org")).unwrap();
    assert_eq!(target.package(), "com.nextcloud.android.beta");
}

/// Missing app sends the user to the marketplace listing
#[test]
fn test_not_installed_opens_marketplace() {
    let platform = device_with(&[]);
    let notices = RecordedNotices::new();
    let manager = EcosystemManager::new(&platform, &notices);

    let result = manager.open_app(CompanionApp::Notes, Some("alice@example.com"));
    assert!(matches!(result, Err(HandoffError::AppNotInstalled(CompanionApp::Notes))));
    assert_eq!(notices.messages(), vec!["The app is not installed".to_string()]);

    let delivered = platform.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].data(), Some("market://details?id=it.niedermann.owncloud.notes"));
}

/// Without a marketplace app the web listing is opened
#[test]
fn test_not_installed_falls_back_to_web_store() {
    let platform = MemoryPlatform::new().with_browser(true);
    let notices = RecordedNotices::new();
    let manager = EcosystemManager::new(&platform, &notices);

    let _ = manager.open_app(CompanionApp::Files, Some("alice@example.com"));

    assert_eq!(platform.attempted().len(), 2);
    let delivered = platform.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(
        delivered[0].data(),
        Some("https://play.google.com/store/apps/details?id=com.nextcloud.client")
    );
    assert_eq!(notices.messages().len(), 1);
}

/// Neither store nor browser: both notices, nothing delivered
#[test]
fn test_no_store_handler_at_all() {
    let platform = MemoryPlatform::new();
    let notices = RecordedNotices::new();
    let manager = EcosystemManager::new(&platform, &notices);

    let result = manager.open_app(CompanionApp::Talk, Some("alice@example.com"));
    assert!(matches!(result, Err(HandoffError::AppNotInstalled(_))));
    assert!(platform.delivered().is_empty());
    assert_eq!(platform.attempted().len(), 2);
    assert_eq!(
        notices.messages(),
        vec!["The app is not installed".to_string(), "Could not open the store".to_string()]
    );
}

/// Missing account also falls back to the store, even when the app is installed
#[test]
fn test_missing_account_falls_back_to_store() {
    for account in [None, Some(""), Some("  ")] {
        let platform = device_with(&["com.nextcloud.client"]);
        let notices = RecordedNotices::new();
        let manager = EcosystemManager::new(&platform, &notices);

        let result = manager.open_app(CompanionApp::Files, account);
        assert!(matches!(result, Err(HandoffError::MissingAccount)));
        assert_eq!(notices.messages(), vec!["No account was provided".to_string()]);

        let delivered = platform.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].package(), None);
        assert_eq!(delivered[0].data(), Some("market://details?id=com.nextcloud.client"));
    }
}

/// Malformed account never reaches the platform
#[test]
fn test_malformed_account_is_not_sent() {
    let platform = device_with(&["com.nextcloud.talk2"]);
    let notices = RecordedNotices::new();
    let manager = EcosystemManager::new(&platform, &notices);

    let result = manager.open_app(CompanionApp::Talk, Some("not an account"));
    assert!(matches!(result, Err(HandoffError::InvalidAccountShape(_))));
    assert!(platform.attempted().is_empty());
    assert_eq!(notices.messages(), vec!["The account name is not valid".to_string()]);
}

/// Dispatch failure is reported once and not retried
#[test]
fn test_dispatch_failure_reported() {
    let platform = device_with(&["com.nextcloud.client"])
        .with_dispatch_failure(DispatchError::Rejected("blocked".to_string()));
    let notices = RecordedNotices::new();
    let manager = EcosystemManager::new(&platform, &notices);

    let result = manager.open_app(CompanionApp::Files, Some("alice@example.com"));
    assert!(matches!(result, Err(HandoffError::DispatchFailed(DispatchError::Rejected(_)))));
    assert_eq!(platform.attempted().len(), 1);
    assert!(platform.delivered().is_empty());
    assert_eq!(notices.messages(), vec!["Could not open the app".to_string()]);
}

/// Receiving side rejects foreign or incomplete intents
#[test]
fn test_receive_rejections() {
    let platform = MemoryPlatform::new();
    let manager = EcosystemManager::new(&platform, RecordedNotices::new());

    assert_eq!(manager.receive_account(None), HandoffResult::Rejected(RejectReason::NoMessage));

    let foreign = Intent::new("android.intent.action.SEND").with_extra(EXTRA_KEY_ACCOUNT, "alice@example.com");
    assert_eq!(
        manager.receive_account(Some(&foreign)),
        HandoffResult::Rejected(RejectReason::ActionMismatch)
    );

    let no_account = Intent::new(ECOSYSTEM_INTENT_ACTION);
    assert_eq!(
        manager.receive_account(Some(&no_account)),
        HandoffResult::Rejected(RejectReason::MissingAccount)
    );

    let malformed = Intent::new(ECOSYSTEM_INTENT_ACTION).with_extra(EXTRA_KEY_ACCOUNT, "alice");
    assert_eq!(
        manager.receive_account(Some(&malformed)),
        HandoffResult::Rejected(RejectReason::MalformedAccount)
    );
}

/// Callback receiver gets exactly one localized outcome per intent
#[test]
fn test_callback_receiver_with_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"locale": ["de-DE"], "noticeLength": "short"}}"#).unwrap();
    let config = EcosystemConfig::load(file.path()).unwrap();
    assert_eq!(config.notice_length, NoticeLength::Short);

    let platform = MemoryPlatform::new();
    let manager = EcosystemManager::with_config(&platform, RecordedNotices::new(), config).unwrap();

    let mut receiver = CollectingReceiver::default();
    let good = Intent::new(ECOSYSTEM_INTENT_ACTION).with_extra(EXTRA_KEY_ACCOUNT, "alice@example.com");
    manager.receive_account_with(Some(&good), &mut receiver);
    manager.receive_account_with(None, &mut receiver);

    assert_eq!(receiver.received, vec!["alice@example.com".to_string()]);
    assert_eq!(receiver.errors, vec!["Keine gültige Kontoübergabe".to_string()]);
}

/// Localized notices use the configured display length
#[test]
fn test_localized_notices_with_short_length() {
    let config = EcosystemConfig::from_json(r#"{"locale": ["de"], "noticeLength": "short"}"#).unwrap();
    let platform = MemoryPlatform::new();
    let notices = RecordedNotices::new();
    let manager = EcosystemManager::with_config(&platform, &notices, config).unwrap();

    let _ = manager.open_app(CompanionApp::Files, Some("bad"));
    assert_eq!(
        notices.entries(),
        vec![("Der Kontoname ist ungültig".to_string(), NoticeLength::Short)]
    );
}

/// Custom store links are used for the fallback
#[test]
fn test_custom_store_links() {
    let config = EcosystemConfig::from_json(
        r#"{"storeMarketLink": "appmarket://app/", "storeWebLink": "https://apps.example.com/app/"}"#,
    )
    .unwrap();
    let platform = MemoryPlatform::new().with_browser(true);
    let manager = EcosystemManager::with_config(&platform, RecordedNotices::new(), config).unwrap();

    let _ = manager.open_app(CompanionApp::Talk, Some("alice@example.com"));

    let attempted = platform.attempted();
    assert_eq!(attempted[0].data(), Some("appmarket://app/com.nextcloud.talk2"));
    assert_eq!(attempted[1].data(), Some("https://apps.example.com/app/com.nextcloud.talk2"));
    assert_eq!(platform.delivered().len(), 1);
}
